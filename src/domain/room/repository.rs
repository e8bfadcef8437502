//! Room repository interface

use async_trait::async_trait;

use super::model::{NewRoom, RoomDetail, RoomFilter, RoomPatch};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Rooms matching the filter, ordered by `nomor_kamar`.
    async fn find_filtered(&self, filter: &RoomFilter) -> DomainResult<Vec<RoomDetail>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomDetail>>;
    /// Validates that the referenced room type exists.
    async fn save(&self, new: NewRoom) -> DomainResult<RoomDetail>;
    /// Rejects a user-supplied transition to `Isi` and any status change
    /// while a tenant holds the room.
    async fn update(&self, id: i32, patch: RoomPatch) -> DomainResult<RoomDetail>;
    /// Unlinks any tenant referencing the room, then deletes it, atomically.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
