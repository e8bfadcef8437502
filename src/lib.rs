//! # Sultan Kost Backend
//!
//! Property-management backend for a boarding house: room types, rooms,
//! tenants and payment history behind a REST API, with a financial summary
//! for the dashboard.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, repository interfaces and errors
//! - **application**: Business logic: tenancy (check-in/check-out/transfer)
//! - **infrastructure**: External concerns (SeaORM entities, migrations,
//!   repository implementations)
//! - **interfaces**: HTTP REST API (axum handlers, DTOs, router)
//! - **shared**: Graceful shutdown helper
//!
//! The one non-trivial rule lives in `application::TenancyService`: every
//! tenant mutation and its matching room-status change commit in a single
//! database transaction, keeping `kamar.status == ISI` exactly in sync with
//! the tenant-room links.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
