//! Health HTTP module

pub mod handlers;

pub use handlers::HealthState;
