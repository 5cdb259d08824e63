// Pickup domain models
pub mod pickup;

pub use pickup::*;
