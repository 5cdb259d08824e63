// Shared middleware
pub mod extract;

pub use extract::*;
