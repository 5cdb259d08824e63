// Shared errors
pub mod pickup_error;

pub use pickup_error::*;
