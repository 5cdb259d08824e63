// Pickup domain handlers
pub mod pickup_handler;
pub mod currency_handler;

pub use pickup_handler::*;
pub use currency_handler::*;
