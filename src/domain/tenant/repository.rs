//! Tenant repository interface
//!
//! Read-only by design: every tenant mutation changes room occupancy too and
//! therefore goes through `TenancyService`, which runs both writes in one
//! transaction.

use async_trait::async_trait;

use super::model::{TenantDetail, TenantFilter};
use crate::domain::DomainResult;

#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Tenants matching the filter, newest first.
    async fn find_filtered(&self, filter: &TenantFilter) -> DomainResult<Vec<TenantDetail>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<TenantDetail>>;
}
