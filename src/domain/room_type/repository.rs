//! Room type repository interface

use async_trait::async_trait;

use super::model::{NewRoomType, RoomType, RoomTypePatch};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomTypeRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<RoomType>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomType>>;
    async fn save(&self, new: NewRoomType) -> DomainResult<RoomType>;
    async fn update(&self, id: i32, patch: RoomTypePatch) -> DomainResult<RoomType>;
    /// Fails with [`DomainError::Conflict`] while any room references the type.
    ///
    /// [`DomainError::Conflict`]: crate::domain::DomainError::Conflict
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
