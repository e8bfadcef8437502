//! Business services

pub mod tenancy;

pub use tenancy::TenancyService;
