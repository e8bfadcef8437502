//! Repository provider interface
//!
//! One object owning a repository per aggregate, so handlers and services
//! depend on a single `Arc<dyn RepositoryProvider>` instead of four
//! separately wired repositories.

use crate::domain::payment::PaymentRepository;
use crate::domain::room::RoomRepository;
use crate::domain::room_type::RoomTypeRepository;
use crate::domain::tenant::TenantRepository;

pub trait RepositoryProvider: Send + Sync {
    fn room_types(&self) -> &dyn RoomTypeRepository;
    fn rooms(&self) -> &dyn RoomRepository;
    fn tenants(&self) -> &dyn TenantRepository;
    fn payments(&self) -> &dyn PaymentRepository;
}
