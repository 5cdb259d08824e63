// Pickup domain services
pub mod pickup_service;
pub mod state;

pub use pickup_service::*;
pub use state::*;
