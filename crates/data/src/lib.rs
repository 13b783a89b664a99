//! Loading and validation of game config from JSON assets.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
