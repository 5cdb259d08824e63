// All repositories module
pub mod pickup_repository;
pub mod memory_store;

// Re-export all repositories for convenience
pub use pickup_repository::*;
pub use memory_store::*;
