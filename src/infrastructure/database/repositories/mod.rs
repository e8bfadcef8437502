//! SeaORM repository implementations

mod payment_repository;
mod repository_provider;
mod room_repository;
mod room_type_repository;
mod tenant_repository;

pub use payment_repository::SeaOrmPaymentRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use room_repository::SeaOrmRoomRepository;
pub use room_type_repository::SeaOrmRoomTypeRepository;
pub use tenant_repository::SeaOrmTenantRepository;

pub(crate) use tenant_repository::tenant_to_domain;

use crate::domain::{DomainError, Room, RoomDetail, RoomStatus, RoomType};
use crate::infrastructure::database::entities::{kamar, tipe_kamar};

// ── Shared conversion helpers ───────────────────────────────────

pub(crate) fn status_to_domain(s: kamar::StatusKamar) -> RoomStatus {
    match s {
        kamar::StatusKamar::Kosong => RoomStatus::Kosong,
        kamar::StatusKamar::Isi => RoomStatus::Isi,
        kamar::StatusKamar::Maintenance => RoomStatus::Maintenance,
    }
}

pub(crate) fn status_to_entity(s: RoomStatus) -> kamar::StatusKamar {
    match s {
        RoomStatus::Kosong => kamar::StatusKamar::Kosong,
        RoomStatus::Isi => kamar::StatusKamar::Isi,
        RoomStatus::Maintenance => kamar::StatusKamar::Maintenance,
    }
}

pub(crate) fn tipe_to_domain(m: tipe_kamar::Model) -> RoomType {
    RoomType {
        id: m.id,
        nama_tipe: m.nama_tipe,
        harga_per_bulan: m.harga_per_bulan,
        fasilitas: m.fasilitas,
    }
}

pub(crate) fn room_to_domain(m: kamar::Model) -> Room {
    Room {
        id: m.id,
        nomor_kamar: m.nomor_kamar,
        tipe_id: m.tipe_id,
        lantai: m.lantai,
        status: status_to_domain(m.status),
    }
}

/// Pair a room row with its type row. The FK makes the type row mandatory;
/// a missing one means the schema was tampered with.
pub(crate) fn room_detail(
    room: kamar::Model,
    tipe: Option<tipe_kamar::Model>,
) -> Result<RoomDetail, DomainError> {
    let tipe = tipe.ok_or_else(|| {
        DomainError::Storage(format!("kamar {} has no tipe_kamar row", room.id))
    })?;
    Ok(RoomDetail {
        room: room_to_domain(room),
        tipe: tipe_to_domain(tipe),
    })
}
