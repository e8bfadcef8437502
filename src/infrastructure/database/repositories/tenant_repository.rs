//! SeaORM implementation of TenantRepository (read side)

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::domain::tenant::{Tenant, TenantDetail, TenantFilter, TenantRepository};
use crate::domain::{DomainResult, RoomDetail};
use crate::infrastructure::database::entities::{kamar, penyewa, tipe_kamar};

use super::room_detail;

pub(crate) fn tenant_to_domain(m: penyewa::Model) -> Tenant {
    Tenant {
        id: m.id,
        nama_lengkap: m.nama_lengkap,
        nomor_hp: m.nomor_hp,
        ktp_foto: m.ktp_foto,
        kamar_id: m.kamar_id,
        tanggal_masuk: m.tanggal_masuk,
        durasi_sewa_bulan: m.durasi_sewa_bulan,
    }
}

pub struct SeaOrmTenantRepository {
    db: DatabaseConnection,
}

impl SeaOrmTenantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve the room (and its type) for each fetched tenant row.
    async fn attach_rooms(
        &self,
        rows: Vec<(penyewa::Model, Option<kamar::Model>)>,
    ) -> DomainResult<Vec<TenantDetail>> {
        let tipe_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, room)| room.as_ref().map(|r| r.tipe_id))
            .collect();

        let mut types: HashMap<i32, tipe_kamar::Model> = HashMap::new();
        if !tipe_ids.is_empty() {
            for tipe in tipe_kamar::Entity::find()
                .filter(tipe_kamar::Column::Id.is_in(tipe_ids))
                .all(&self.db)
                .await?
            {
                types.insert(tipe.id, tipe);
            }
        }

        rows.into_iter()
            .map(|(tenant, room)| {
                let kamar: Option<RoomDetail> = room
                    .map(|r| {
                        let tipe = types.get(&r.tipe_id).cloned();
                        room_detail(r, tipe)
                    })
                    .transpose()?;
                Ok(TenantDetail {
                    tenant: tenant_to_domain(tenant),
                    kamar,
                })
            })
            .collect()
    }
}

#[async_trait]
impl TenantRepository for SeaOrmTenantRepository {
    async fn find_filtered(&self, filter: &TenantFilter) -> DomainResult<Vec<TenantDetail>> {
        let mut query = penyewa::Entity::find();
        if let Some(kamar_id) = filter.kamar_id {
            query = query.filter(penyewa::Column::KamarId.eq(kamar_id));
        }
        if let Some(ref search) = filter.search {
            query = query.filter(
                Condition::any()
                    .add(penyewa::Column::NamaLengkap.contains(search))
                    .add(penyewa::Column::NomorHp.contains(search)),
            );
        }

        let rows = query
            .order_by_desc(penyewa::Column::Id)
            .find_also_related(kamar::Entity)
            .all(&self.db)
            .await?;

        self.attach_rooms(rows).await
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<TenantDetail>> {
        let row = penyewa::Entity::find_by_id(id)
            .find_also_related(kamar::Entity)
            .one(&self.db)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(self.attach_rooms(vec![row]).await?.pop())
    }
}
