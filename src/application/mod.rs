//! Business logic and use cases

pub mod services;

pub use services::TenancyService;
