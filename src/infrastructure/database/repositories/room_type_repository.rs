//! SeaORM implementation of RoomTypeRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::room_type::{NewRoomType, RoomType, RoomTypePatch, RoomTypeRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{kamar, tipe_kamar};

use super::tipe_to_domain;

pub struct SeaOrmRoomTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn name_taken(&self, nama: &str, exclude_id: Option<i32>) -> DomainResult<bool> {
        let mut query = tipe_kamar::Entity::find().filter(tipe_kamar::Column::NamaTipe.eq(nama));
        if let Some(id) = exclude_id {
            query = query.filter(tipe_kamar::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.is_some())
    }
}

#[async_trait]
impl RoomTypeRepository for SeaOrmRoomTypeRepository {
    async fn find_all(&self) -> DomainResult<Vec<RoomType>> {
        let models = tipe_kamar::Entity::find()
            .order_by_asc(tipe_kamar::Column::NamaTipe)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(tipe_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomType>> {
        let model = tipe_kamar::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(tipe_to_domain))
    }

    async fn save(&self, new: NewRoomType) -> DomainResult<RoomType> {
        if self.name_taken(&new.nama_tipe, None).await? {
            return Err(DomainError::Conflict(format!(
                "room type '{}' already exists",
                new.nama_tipe
            )));
        }

        let model = tipe_kamar::ActiveModel {
            nama_tipe: Set(new.nama_tipe),
            harga_per_bulan: Set(new.harga_per_bulan),
            fasilitas: Set(new.fasilitas),
            ..Default::default()
        };
        let result = model.insert(&self.db).await?;
        info!("Room type saved: {} ({})", result.nama_tipe, result.id);
        Ok(tipe_to_domain(result))
    }

    async fn update(&self, id: i32, patch: RoomTypePatch) -> DomainResult<RoomType> {
        let existing = tipe_kamar::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Tipe kamar", id))?;

        if let Some(ref nama) = patch.nama_tipe {
            if self.name_taken(nama, Some(id)).await? {
                return Err(DomainError::Conflict(format!(
                    "room type '{}' already exists",
                    nama
                )));
            }
        }

        let model = tipe_kamar::ActiveModel {
            id: Set(id),
            nama_tipe: Set(patch.nama_tipe.unwrap_or(existing.nama_tipe)),
            harga_per_bulan: Set(patch.harga_per_bulan.unwrap_or(existing.harga_per_bulan)),
            fasilitas: Set(patch.fasilitas.unwrap_or(existing.fasilitas)),
        };
        let result = model.update(&self.db).await?;
        Ok(tipe_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        // Protect-on-delete: refuse while rooms still reference the type.
        let referencing = kamar::Entity::find()
            .filter(kamar::Column::TipeId.eq(id))
            .count(&self.db)
            .await?;
        if referencing > 0 {
            return Err(DomainError::Conflict(format!(
                "room type {} is referenced by {} room(s)",
                id, referencing
            )));
        }

        let result = tipe_kamar::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Tipe kamar", id));
        }
        info!("Room type deleted: {}", id);
        Ok(())
    }
}
