//! Room DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::room::{RoomDetail, RoomStatus};
use crate::domain::DomainError;
use crate::interfaces::http::modules::room_types::dto::TipeKamarResponse;

#[derive(Debug, Serialize, Deserialize)]
pub struct KamarResponse {
    pub id: i32,
    pub nomor_kamar: String,
    /// Room type id (the write-side field)
    pub tipe: i32,
    /// Resolved room type (read-only)
    pub tipe_detail: TipeKamarResponse,
    pub lantai: i32,
    pub status: String,
}

impl From<RoomDetail> for KamarResponse {
    fn from(d: RoomDetail) -> Self {
        Self {
            id: d.room.id,
            nomor_kamar: d.room.nomor_kamar,
            tipe: d.room.tipe_id,
            tipe_detail: d.tipe.into(),
            lantai: d.room.lantai,
            status: d.room.status.to_string(),
        }
    }
}

/// Parse a wire status string, rejecting unknown values as a validation error.
pub fn parse_status(s: &str) -> Result<RoomStatus, DomainError> {
    s.parse().map_err(DomainError::Validation)
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateKamarRequest {
    #[validate(length(min = 1, max = 10, message = "nomor_kamar is required"))]
    pub nomor_kamar: String,
    pub tipe: i32,
    #[serde(default = "default_lantai")]
    #[validate(range(min = 1, message = "lantai must be positive"))]
    pub lantai: i32,
    /// Optional initial status; defaults to KOSONG. ISI is rejected.
    pub status: Option<String>,
}

fn default_lantai() -> i32 {
    1
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateKamarRequest {
    #[validate(length(min = 1, max = 10, message = "nomor_kamar must not be empty"))]
    pub nomor_kamar: Option<String>,
    pub tipe: Option<i32>,
    #[validate(range(min = 1, message = "lantai must be positive"))]
    pub lantai: Option<i32>,
    pub status: Option<String>,
}

/// List filter query parameters
#[derive(Debug, Deserialize)]
pub struct KamarListParams {
    pub status: Option<String>,
    pub lantai: Option<i32>,
    pub tipe: Option<i32>,
    pub search: Option<String>,
}
