//! HTTP REST API interfaces
//!
//! - `common`: response envelope, pagination, validated JSON extractor
//! - `modules`: request handlers, one module per resource
//! - `router`: the assembled API router

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, AppState};
