//! Tenant DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::tenant::TenantDetail;
use crate::interfaces::http::modules::rooms::dto::KamarResponse;

#[derive(Debug, Serialize, Deserialize)]
pub struct PenyewaResponse {
    pub id: i32,
    pub nama_lengkap: String,
    pub nomor_hp: String,
    pub ktp_foto: Option<String>,
    /// Room id (the write-side field)
    pub kamar: Option<i32>,
    /// Resolved room, with its type nested (read-only)
    pub kamar_detail: Option<KamarResponse>,
    pub tanggal_masuk: NaiveDate,
    pub durasi_sewa_bulan: i32,
}

impl From<TenantDetail> for PenyewaResponse {
    fn from(d: TenantDetail) -> Self {
        Self {
            id: d.tenant.id,
            nama_lengkap: d.tenant.nama_lengkap,
            nomor_hp: d.tenant.nomor_hp,
            ktp_foto: d.tenant.ktp_foto,
            kamar: d.tenant.kamar_id,
            kamar_detail: d.kamar.map(Into::into),
            tanggal_masuk: d.tenant.tanggal_masuk,
            durasi_sewa_bulan: d.tenant.durasi_sewa_bulan,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePenyewaRequest {
    #[validate(length(min = 1, max = 200, message = "nama_lengkap is required"))]
    pub nama_lengkap: String,
    #[validate(length(min = 1, max = 20, message = "nomor_hp is required"))]
    pub nomor_hp: String,
    pub ktp_foto: Option<String>,
    /// Room to check into. Absent or null means no room yet.
    pub kamar: Option<i32>,
    /// Defaults to today when absent.
    pub tanggal_masuk: Option<NaiveDate>,
    #[serde(default = "default_durasi")]
    #[validate(range(min = 1, message = "durasi_sewa_bulan must be positive"))]
    pub durasi_sewa_bulan: i32,
}

fn default_durasi() -> i32 {
    1
}

/// Distinguishes an absent field from an explicit `null`: absent stays
/// `None`, `"kamar": null` becomes `Some(None)` (clear the link).
fn double_option<'de, D>(de: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePenyewaRequest {
    #[validate(length(min = 1, max = 200, message = "nama_lengkap must not be empty"))]
    pub nama_lengkap: Option<String>,
    #[validate(length(min = 1, max = 20, message = "nomor_hp must not be empty"))]
    pub nomor_hp: Option<String>,
    pub ktp_foto: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub kamar: Option<Option<i32>>,
    pub tanggal_masuk: Option<NaiveDate>,
    #[validate(range(min = 1, message = "durasi_sewa_bulan must be positive"))]
    pub durasi_sewa_bulan: Option<i32>,
}

/// List filter query parameters
#[derive(Debug, Deserialize)]
pub struct PenyewaListParams {
    pub kamar: Option<i32>,
    pub search: Option<String>,
}
