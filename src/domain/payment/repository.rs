//! Payment repository interface

use async_trait::async_trait;

use super::model::{NewPayment, PaymentDetail, PaymentFilter, PaymentPage, PaymentPatch};
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// One page of payments matching the filter, newest first.
    /// `page` is 1-based; `limit` is the bounded page size.
    async fn find_page(
        &self,
        filter: &PaymentFilter,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaymentPage>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentDetail>>;
    /// Validates that the tenant exists and stamps the current timestamp.
    async fn save(&self, new: NewPayment) -> DomainResult<PaymentDetail>;
    async fn update(&self, id: i32, patch: PaymentPatch) -> DomainResult<PaymentDetail>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
