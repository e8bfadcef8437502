//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::payment::PaymentRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::room::RoomRepository;
use crate::domain::room_type::RoomTypeRepository;
use crate::domain::tenant::TenantRepository;

use super::payment_repository::SeaOrmPaymentRepository;
use super::room_repository::SeaOrmRoomRepository;
use super::room_type_repository::SeaOrmRoomTypeRepository;
use super::tenant_repository::SeaOrmTenantRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let rooms = repos.rooms().find_filtered(&RoomFilter::default()).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    room_types: SeaOrmRoomTypeRepository,
    rooms: SeaOrmRoomRepository,
    tenants: SeaOrmTenantRepository,
    payments: SeaOrmPaymentRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            room_types: SeaOrmRoomTypeRepository::new(db.clone()),
            rooms: SeaOrmRoomRepository::new(db.clone()),
            tenants: SeaOrmTenantRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn room_types(&self) -> &dyn RoomTypeRepository {
        &self.room_types
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn tenants(&self) -> &dyn TenantRepository {
        &self.tenants
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }
}
