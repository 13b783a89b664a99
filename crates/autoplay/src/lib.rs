//! Seeded greedy autoplay over the core battle API.

mod action;
mod config;
mod error;
mod objective;
mod policy;
mod simulator;
mod trace;

pub use action::*;
pub use config::*;
pub use error::*;
pub use objective::*;
pub use policy::*;
pub use simulator::*;
pub use trace::*;
