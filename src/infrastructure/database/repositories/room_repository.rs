//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::room::{NewRoom, RoomDetail, RoomFilter, RoomPatch, RoomRepository, RoomStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{kamar, penyewa, tipe_kamar};

use super::{room_detail, status_to_entity};

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn number_taken(&self, nomor: &str, exclude_id: Option<i32>) -> DomainResult<bool> {
        let mut query = kamar::Entity::find().filter(kamar::Column::NomorKamar.eq(nomor));
        if let Some(id) = exclude_id {
            query = query.filter(kamar::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.is_some())
    }

    async fn assert_tipe_exists(&self, tipe_id: i32) -> DomainResult<()> {
        tipe_kamar::Entity::find_by_id(tipe_id)
            .one(&self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Tipe kamar", tipe_id))
    }

    /// The tenant currently holding this room, if any.
    async fn occupant(&self, room_id: i32) -> DomainResult<Option<penyewa::Model>> {
        Ok(penyewa::Entity::find()
            .filter(penyewa::Column::KamarId.eq(room_id))
            .one(&self.db)
            .await?)
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn find_filtered(&self, filter: &RoomFilter) -> DomainResult<Vec<RoomDetail>> {
        let mut query = kamar::Entity::find();
        if let Some(status) = filter.status {
            query = query.filter(kamar::Column::Status.eq(status_to_entity(status)));
        }
        if let Some(lantai) = filter.lantai {
            query = query.filter(kamar::Column::Lantai.eq(lantai));
        }
        if let Some(tipe_id) = filter.tipe_id {
            query = query.filter(kamar::Column::TipeId.eq(tipe_id));
        }
        if let Some(ref search) = filter.search {
            query = query.filter(kamar::Column::NomorKamar.contains(search));
        }

        let rows = query
            .order_by_asc(kamar::Column::NomorKamar)
            .find_also_related(tipe_kamar::Entity)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|(room, tipe)| room_detail(room, tipe))
            .collect()
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomDetail>> {
        let row = kamar::Entity::find_by_id(id)
            .find_also_related(tipe_kamar::Entity)
            .one(&self.db)
            .await?;
        row.map(|(room, tipe)| room_detail(room, tipe)).transpose()
    }

    async fn save(&self, new: NewRoom) -> DomainResult<RoomDetail> {
        self.assert_tipe_exists(new.tipe_id).await?;
        if self.number_taken(&new.nomor_kamar, None).await? {
            return Err(DomainError::Conflict(format!(
                "room '{}' already exists",
                new.nomor_kamar
            )));
        }
        if new.status == RoomStatus::Isi {
            return Err(DomainError::Validation(
                "status ISI is derived from tenancy and cannot be set directly".into(),
            ));
        }

        let model = kamar::ActiveModel {
            nomor_kamar: Set(new.nomor_kamar),
            tipe_id: Set(new.tipe_id),
            lantai: Set(new.lantai),
            status: Set(status_to_entity(new.status)),
            ..Default::default()
        };
        let result = model.insert(&self.db).await?;
        info!("Room saved: {} ({})", result.nomor_kamar, result.id);

        self.find_by_id(result.id)
            .await?
            .ok_or_else(|| DomainError::Storage("room vanished after insert".into()))
    }

    async fn update(&self, id: i32, patch: RoomPatch) -> DomainResult<RoomDetail> {
        let existing = kamar::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Kamar", id))?;

        if let Some(tipe_id) = patch.tipe_id {
            self.assert_tipe_exists(tipe_id).await?;
        }
        if let Some(ref nomor) = patch.nomor_kamar {
            if self.number_taken(nomor, Some(id)).await? {
                return Err(DomainError::Conflict(format!(
                    "room '{}' already exists",
                    nomor
                )));
            }
        }

        if let Some(new_status) = patch.status {
            let current = super::status_to_domain(existing.status.clone());
            if new_status != current {
                // ISI is owned by the tenancy operations in both directions.
                if new_status == RoomStatus::Isi {
                    return Err(DomainError::Validation(
                        "status ISI is derived from tenancy and cannot be set directly".into(),
                    ));
                }
                if self.occupant(id).await?.is_some() {
                    return Err(DomainError::Conflict(format!(
                        "room {} is occupied; check the tenant out first",
                        id
                    )));
                }
            }
        }

        let model = kamar::ActiveModel {
            id: Set(id),
            nomor_kamar: Set(patch.nomor_kamar.unwrap_or(existing.nomor_kamar)),
            tipe_id: Set(patch.tipe_id.unwrap_or(existing.tipe_id)),
            lantai: Set(patch.lantai.unwrap_or(existing.lantai)),
            status: Set(patch
                .status
                .map(status_to_entity)
                .unwrap_or(existing.status)),
        };
        let result = model.update(&self.db).await?;

        self.find_by_id(result.id)
            .await?
            .ok_or_else(|| DomainError::Storage("room vanished after update".into()))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        // Unlink any tenant first (set-null policy), then drop the room.
        // Both writes commit together so a reader never sees a dangling link.
        let txn = self.db.begin().await?;

        if let Some(tenant) = penyewa::Entity::find()
            .filter(penyewa::Column::KamarId.eq(id))
            .one(&txn)
            .await?
        {
            let mut unlink: penyewa::ActiveModel = tenant.into();
            unlink.kamar_id = Set(None);
            unlink.update(&txn).await?;
        }

        let result = kamar::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Kamar", id));
        }

        txn.commit().await?;

        info!("Room deleted: {}", id);
        Ok(())
    }
}
