//! Core battle logic. Keep this crate free of IO and platform concerns.

pub mod battle;
pub mod cards;
pub mod combat;
pub mod config;
pub mod deck;
pub mod effects;
pub mod events;
pub mod hand;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod state;

pub use battle::*;
pub use cards::*;
pub use combat::*;
pub use config::*;
pub use deck::*;
pub use effects::*;
pub use events::*;
pub use hand::*;
pub use rng::*;
pub use scoring::*;
pub use snapshot::*;
pub use state::*;
