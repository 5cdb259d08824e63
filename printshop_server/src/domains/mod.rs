// Domain modules
pub mod pickup;
