//! Tenant (penyewa) aggregate

pub mod model;
pub mod repository;

pub use model::{NewTenant, Tenant, TenantDetail, TenantFilter, TenantUpdate};
pub use repository::TenantRepository;
