//! Tenancy business logic service
//!
//! Check-in, check-out and transfer are the only ways a tenant row changes,
//! and each one also owns the matching room-status write. Both writes run in
//! a single database transaction, so `kamar.status == ISI` holds exactly when
//! a tenant references the room, for every reader that observes the commit.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::info;

use crate::domain::tenant::{NewTenant, Tenant, TenantUpdate};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{kamar, penyewa, riwayat_pembayaran};
use crate::infrastructure::database::repositories::tenant_to_domain;

/// Service for tenant check-in / check-out / transfer.
pub struct TenancyService {
    db: DatabaseConnection,
}

impl TenancyService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Mark a room occupied on behalf of a tenant moving in.
    ///
    /// The room must exist and must not be held by any tenant. The UNIQUE
    /// index on `penyewa.kamar_id` backs this check under concurrency: of two
    /// racing check-ins, the second insert fails and the transaction rolls
    /// the status write back.
    async fn occupy(txn: &DatabaseTransaction, room_id: i32) -> DomainResult<()> {
        let room = kamar::Entity::find_by_id(room_id)
            .one(txn)
            .await?
            .ok_or_else(|| DomainError::not_found("Kamar", room_id))?;

        let occupant = penyewa::Entity::find()
            .filter(penyewa::Column::KamarId.eq(room_id))
            .one(txn)
            .await?;
        if occupant.is_some() {
            return Err(DomainError::Conflict(format!(
                "room '{}' is already occupied",
                room.nomor_kamar
            )));
        }

        let mut active: kamar::ActiveModel = room.into();
        active.status = Set(kamar::StatusKamar::Isi);
        active.update(txn).await?;
        Ok(())
    }

    /// Mark a room vacant after its tenant leaves. Tolerates the room having
    /// been deleted in the meantime: no row, no action.
    async fn vacate(txn: &DatabaseTransaction, room_id: i32) -> DomainResult<()> {
        if let Some(room) = kamar::Entity::find_by_id(room_id).one(txn).await? {
            let mut active: kamar::ActiveModel = room.into();
            active.status = Set(kamar::StatusKamar::Kosong);
            active.update(txn).await?;
        }
        Ok(())
    }

    /// Check a tenant in. When a room is supplied it becomes ISI in the same
    /// transaction that inserts the tenant row. An uncommitted transaction
    /// rolls back on drop, so an error on either write leaves nothing behind.
    pub async fn check_in(&self, new: NewTenant) -> DomainResult<Tenant> {
        let txn = self.db.begin().await?;

        if let Some(room_id) = new.kamar_id {
            Self::occupy(&txn, room_id).await?;
        }

        let tenant = penyewa::ActiveModel {
            nama_lengkap: Set(new.nama_lengkap),
            nomor_hp: Set(new.nomor_hp),
            ktp_foto: Set(new.ktp_foto),
            kamar_id: Set(new.kamar_id),
            tanggal_masuk: Set(new.tanggal_masuk),
            durasi_sewa_bulan: Set(new.durasi_sewa_bulan),
            ..Default::default()
        };
        let model = tenant.insert(&txn).await?;

        txn.commit().await?;

        info!(
            tenant_id = model.id,
            kamar_id = model.kamar_id,
            "Tenant checked in"
        );
        Ok(tenant_to_domain(model))
    }

    /// Check a tenant out: payments go with the tenant, and the room (if it
    /// still exists) becomes KOSONG, all in one transaction.
    pub async fn check_out(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await?;

        let tenant = penyewa::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DomainError::not_found("Penyewa", id))?;
        let room_id = tenant.kamar_id;

        riwayat_pembayaran::Entity::delete_many()
            .filter(riwayat_pembayaran::Column::PenyewaId.eq(id))
            .exec(&txn)
            .await?;
        penyewa::Entity::delete_by_id(id).exec(&txn).await?;

        if let Some(room_id) = room_id {
            Self::vacate(&txn, room_id).await?;
        }

        txn.commit().await?;

        info!(tenant_id = id, "Tenant checked out");
        Ok(())
    }

    /// Full-replacement update. A changed room link is a transfer: the old
    /// room is vacated and the new one occupied in the same transaction, so
    /// no reader ever sees two ISI rooms for one tenant or an ISI room with
    /// no tenant.
    pub async fn update(&self, id: i32, update: TenantUpdate) -> DomainResult<Tenant> {
        let txn = self.db.begin().await?;

        let existing = penyewa::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DomainError::not_found("Penyewa", id))?;

        let old_room = existing.kamar_id;
        let new_room = update.kamar_id;

        if old_room != new_room {
            if let Some(old_id) = old_room {
                Self::vacate(&txn, old_id).await?;
            }
            if let Some(new_id) = new_room {
                Self::occupy(&txn, new_id).await?;
            }
        }

        let mut active: penyewa::ActiveModel = existing.into();
        active.nama_lengkap = Set(update.nama_lengkap);
        active.nomor_hp = Set(update.nomor_hp);
        active.ktp_foto = Set(update.ktp_foto);
        active.kamar_id = Set(new_room);
        active.tanggal_masuk = Set(update.tanggal_masuk);
        active.durasi_sewa_bulan = Set(update.durasi_sewa_bulan);
        let model = active.update(&txn).await?;

        txn.commit().await?;

        info!(tenant_id = id, kamar_id = model.kamar_id, "Tenant updated");
        Ok(tenant_to_domain(model))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{ConnectOptions, Database, PaginatorTrait};
    use sea_orm_migration::MigratorTrait;

    use crate::domain::room::{NewRoom, RoomFilter, RoomRepository, RoomStatus};
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::SeaOrmRoomRepository;

    async fn test_db() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn seed_room(db: &DatabaseConnection, nomor: &str) -> i32 {
        let tipe = match tipe_kamar_row(db).await {
            Some(id) => id,
            None => {
                let t = crate::infrastructure::database::entities::tipe_kamar::ActiveModel {
                    nama_tipe: Set("Standard".to_owned()),
                    harga_per_bulan: Set(500_000),
                    fasilitas: Set("Kasur, lemari".to_owned()),
                    ..Default::default()
                };
                t.insert(db).await.unwrap().id
            }
        };
        let room = kamar::ActiveModel {
            nomor_kamar: Set(nomor.to_owned()),
            tipe_id: Set(tipe),
            lantai: Set(1),
            status: Set(kamar::StatusKamar::Kosong),
            ..Default::default()
        };
        room.insert(db).await.unwrap().id
    }

    async fn tipe_kamar_row(db: &DatabaseConnection) -> Option<i32> {
        crate::infrastructure::database::entities::tipe_kamar::Entity::find()
            .one(db)
            .await
            .unwrap()
            .map(|t| t.id)
    }

    fn budi(kamar_id: Option<i32>) -> NewTenant {
        NewTenant {
            nama_lengkap: "Budi Santoso".to_owned(),
            nomor_hp: "081234567890".to_owned(),
            ktp_foto: None,
            kamar_id,
            tanggal_masuk: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            durasi_sewa_bulan: 6,
        }
    }

    fn as_update(t: &Tenant, kamar_id: Option<i32>) -> TenantUpdate {
        TenantUpdate {
            nama_lengkap: t.nama_lengkap.clone(),
            nomor_hp: t.nomor_hp.clone(),
            ktp_foto: t.ktp_foto.clone(),
            kamar_id,
            tanggal_masuk: t.tanggal_masuk,
            durasi_sewa_bulan: t.durasi_sewa_bulan,
        }
    }

    async fn room_status(db: &DatabaseConnection, id: i32) -> kamar::StatusKamar {
        kamar::Entity::find_by_id(id)
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .status
    }

    /// status == ISI iff exactly one tenant references the room.
    async fn assert_occupancy_invariant(db: &DatabaseConnection) {
        let rooms = kamar::Entity::find().all(db).await.unwrap();
        for room in rooms {
            let tenants = penyewa::Entity::find()
                .filter(penyewa::Column::KamarId.eq(room.id))
                .count(db)
                .await
                .unwrap();
            match room.status {
                kamar::StatusKamar::Isi => assert_eq!(
                    tenants, 1,
                    "room {} is ISI but has {} tenants",
                    room.nomor_kamar, tenants
                ),
                _ => assert_eq!(
                    tenants, 0,
                    "room {} is {:?} but has {} tenants",
                    room.nomor_kamar, room.status, tenants
                ),
            }
        }
    }

    #[tokio::test]
    async fn check_in_with_room_marks_it_isi() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room = seed_room(&db, "A01").await;

        let tenant = service.check_in(budi(Some(room))).await.unwrap();
        assert_eq!(tenant.kamar_id, Some(room));
        assert_eq!(room_status(&db, room).await, kamar::StatusKamar::Isi);
        assert_occupancy_invariant(&db).await;
    }

    #[tokio::test]
    async fn check_in_without_room_touches_no_room() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room = seed_room(&db, "A01").await;

        service.check_in(budi(None)).await.unwrap();
        assert_eq!(room_status(&db, room).await, kamar::StatusKamar::Kosong);
        assert_occupancy_invariant(&db).await;
    }

    #[tokio::test]
    async fn check_in_against_missing_room_creates_nothing() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());

        let err = service.check_in(budi(Some(999))).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(penyewa::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn second_check_in_for_same_room_is_a_conflict() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room = seed_room(&db, "A01").await;

        service.check_in(budi(Some(room))).await.unwrap();
        let err = service.check_in(budi(Some(room))).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(penyewa::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(room_status(&db, room).await, kamar::StatusKamar::Isi);
        assert_occupancy_invariant(&db).await;
    }

    #[tokio::test]
    async fn check_out_frees_the_room_and_drops_payments() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room = seed_room(&db, "A01").await;
        let tenant = service.check_in(budi(Some(room))).await.unwrap();

        let payment = riwayat_pembayaran::ActiveModel {
            penyewa_id: Set(tenant.id),
            tanggal_bayar: Set(chrono::Utc::now()),
            jumlah: Set(500_000),
            keterangan: Set("Bayar kost Maret".to_owned()),
            bukti_transfer: Set(None),
            ..Default::default()
        };
        payment.insert(&db).await.unwrap();

        service.check_out(tenant.id).await.unwrap();

        assert_eq!(room_status(&db, room).await, kamar::StatusKamar::Kosong);
        assert_eq!(penyewa::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(
            riwayat_pembayaran::Entity::find().count(&db).await.unwrap(),
            0
        );
        assert_occupancy_invariant(&db).await;
    }

    #[tokio::test]
    async fn check_out_of_unlinked_tenant_changes_no_room() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room = seed_room(&db, "A01").await;
        let tenant = service.check_in(budi(None)).await.unwrap();

        service.check_out(tenant.id).await.unwrap();
        assert_eq!(room_status(&db, room).await, kamar::StatusKamar::Kosong);
    }

    #[tokio::test]
    async fn check_out_survives_the_room_being_deleted_first() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let rooms = SeaOrmRoomRepository::new(db.clone());
        let room = seed_room(&db, "A01").await;
        let tenant = service.check_in(budi(Some(room))).await.unwrap();

        // Deleting the room unlinks the tenant (set-null), then check-out
        // must still succeed with no room left to vacate.
        rooms.delete(room).await.unwrap();
        service.check_out(tenant.id).await.unwrap();

        assert_eq!(penyewa::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn transfer_vacates_old_room_and_occupies_new() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room_a = seed_room(&db, "A01").await;
        let room_b = seed_room(&db, "B02").await;
        let tenant = service.check_in(budi(Some(room_a))).await.unwrap();

        let moved = service
            .update(tenant.id, as_update(&tenant, Some(room_b)))
            .await
            .unwrap();

        assert_eq!(moved.kamar_id, Some(room_b));
        assert_eq!(room_status(&db, room_a).await, kamar::StatusKamar::Kosong);
        assert_eq!(room_status(&db, room_b).await, kamar::StatusKamar::Isi);
        assert_occupancy_invariant(&db).await;
    }

    #[tokio::test]
    async fn transfer_into_occupied_room_is_rejected_atomically() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room_a = seed_room(&db, "A01").await;
        let room_b = seed_room(&db, "B02").await;
        let first = service.check_in(budi(Some(room_a))).await.unwrap();
        let second = service.check_in(budi(Some(room_b))).await.unwrap();

        let err = service
            .update(second.id, as_update(&second, Some(room_a)))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        // The failed transfer must not have vacated B either.
        assert_eq!(room_status(&db, room_a).await, kamar::StatusKamar::Isi);
        assert_eq!(room_status(&db, room_b).await, kamar::StatusKamar::Isi);
        assert_eq!(first.kamar_id, Some(room_a));
        assert_occupancy_invariant(&db).await;
    }

    #[tokio::test]
    async fn clearing_the_room_link_vacates_it() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room = seed_room(&db, "A01").await;
        let tenant = service.check_in(budi(Some(room))).await.unwrap();

        service
            .update(tenant.id, as_update(&tenant, None))
            .await
            .unwrap();

        assert_eq!(room_status(&db, room).await, kamar::StatusKamar::Kosong);
        assert_occupancy_invariant(&db).await;
    }

    #[tokio::test]
    async fn update_without_room_change_leaves_statuses_alone() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room = seed_room(&db, "A01").await;
        let tenant = service.check_in(budi(Some(room))).await.unwrap();

        let mut update = as_update(&tenant, Some(room));
        update.nomor_hp = "089999999999".to_owned();
        let updated = service.update(tenant.id, update).await.unwrap();

        assert_eq!(updated.nomor_hp, "089999999999");
        assert_eq!(room_status(&db, room).await, kamar::StatusKamar::Isi);
        assert_occupancy_invariant(&db).await;
    }

    #[tokio::test]
    async fn manual_room_edits_cannot_fake_occupancy() {
        let db = test_db().await;
        let rooms = SeaOrmRoomRepository::new(db.clone());
        let room = seed_room(&db, "A01").await;

        let err = rooms
            .update(
                room,
                crate::domain::room::RoomPatch {
                    status: Some(RoomStatus::Isi),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // Maintenance is fine while the room is empty.
        let detail = rooms
            .update(
                room,
                crate::domain::room::RoomPatch {
                    status: Some(RoomStatus::Maintenance),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(detail.room.status, RoomStatus::Maintenance);
    }

    #[tokio::test]
    async fn occupied_room_rejects_manual_status_change() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let rooms = SeaOrmRoomRepository::new(db.clone());
        let room = seed_room(&db, "A01").await;
        service.check_in(budi(Some(room))).await.unwrap();

        let err = rooms
            .update(
                room,
                crate::domain::room::RoomPatch {
                    status: Some(RoomStatus::Kosong),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(room_status(&db, room).await, kamar::StatusKamar::Isi);
    }

    #[tokio::test]
    async fn checked_in_rooms_can_be_checked_in_again_after_checkout() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let room = seed_room(&db, "A01").await;

        let t1 = service.check_in(budi(Some(room))).await.unwrap();
        service.check_out(t1.id).await.unwrap();
        let t2 = service.check_in(budi(Some(room))).await.unwrap();

        assert_eq!(t2.kamar_id, Some(room));
        assert_eq!(room_status(&db, room).await, kamar::StatusKamar::Isi);
        assert_occupancy_invariant(&db).await;
    }

    #[tokio::test]
    async fn filtered_room_listing_reflects_occupancy() {
        let db = test_db().await;
        let service = TenancyService::new(db.clone());
        let rooms = SeaOrmRoomRepository::new(db.clone());
        let room_a = seed_room(&db, "A01").await;
        let _room_b = seed_room(&db, "B02").await;
        service.check_in(budi(Some(room_a))).await.unwrap();

        let occupied = rooms
            .find_filtered(&RoomFilter {
                status: Some(RoomStatus::Isi),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(occupied.len(), 1);
        assert_eq!(occupied[0].room.nomor_kamar, "A01");

        let vacant = rooms
            .find_filtered(&RoomFilter {
                status: Some(RoomStatus::Kosong),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(vacant.len(), 1);
        assert_eq!(vacant[0].room.nomor_kamar, "B02");
    }

    #[tokio::test]
    async fn new_rooms_can_be_created_and_searched() {
        let db = test_db().await;
        let rooms = SeaOrmRoomRepository::new(db.clone());
        let tipe = {
            seed_room(&db, "A01").await;
            tipe_kamar_row(&db).await.unwrap()
        };

        rooms
            .save(NewRoom {
                nomor_kamar: "A02".to_owned(),
                tipe_id: tipe,
                lantai: 2,
                status: RoomStatus::Kosong,
            })
            .await
            .unwrap();

        let hits = rooms
            .find_filtered(&RoomFilter {
                search: Some("A0".to_owned()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].room.nomor_kamar, "A01");
        assert_eq!(hits[1].room.nomor_kamar, "A02");
    }
}
