//! Room type DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::room_type::{NewRoomType, RoomType, RoomTypePatch};

#[derive(Debug, Serialize, Deserialize)]
pub struct TipeKamarResponse {
    pub id: i32,
    pub nama_tipe: String,
    pub harga_per_bulan: i64,
    pub fasilitas: String,
}

impl From<RoomType> for TipeKamarResponse {
    fn from(t: RoomType) -> Self {
        Self {
            id: t.id,
            nama_tipe: t.nama_tipe,
            harga_per_bulan: t.harga_per_bulan,
            fasilitas: t.fasilitas,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTipeKamarRequest {
    #[validate(length(min = 1, max = 100, message = "nama_tipe is required"))]
    pub nama_tipe: String,
    #[validate(range(min = 0, message = "harga_per_bulan must be non-negative"))]
    pub harga_per_bulan: i64,
    #[serde(default)]
    pub fasilitas: String,
}

impl From<CreateTipeKamarRequest> for NewRoomType {
    fn from(req: CreateTipeKamarRequest) -> Self {
        Self {
            nama_tipe: req.nama_tipe,
            harga_per_bulan: req.harga_per_bulan,
            fasilitas: req.fasilitas,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTipeKamarRequest {
    #[validate(length(min = 1, max = 100, message = "nama_tipe must not be empty"))]
    pub nama_tipe: Option<String>,
    #[validate(range(min = 0, message = "harga_per_bulan must be non-negative"))]
    pub harga_per_bulan: Option<i64>,
    pub fasilitas: Option<String>,
}

impl From<UpdateTipeKamarRequest> for RoomTypePatch {
    fn from(req: UpdateTipeKamarRequest) -> Self {
        Self {
            nama_tipe: req.nama_tipe,
            harga_per_bulan: req.harga_per_bulan,
            fasilitas: req.fasilitas,
        }
    }
}
