//! Payment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::payment::{NewPayment, PaymentDetail, PaymentPatch};

#[derive(Debug, Serialize, Deserialize)]
pub struct RiwayatBayarResponse {
    pub id: i32,
    /// Tenant id (the write-side field)
    pub penyewa: i32,
    /// Tenant name (read-only)
    pub penyewa_nama: String,
    /// Server-assigned; never accepted from the client
    pub tanggal_bayar: DateTime<Utc>,
    pub jumlah: i64,
    pub keterangan: String,
    pub bukti_transfer: Option<String>,
}

impl From<PaymentDetail> for RiwayatBayarResponse {
    fn from(d: PaymentDetail) -> Self {
        Self {
            id: d.payment.id,
            penyewa: d.payment.penyewa_id,
            penyewa_nama: d.penyewa_nama,
            tanggal_bayar: d.payment.tanggal_bayar,
            jumlah: d.payment.jumlah,
            keterangan: d.payment.keterangan,
            bukti_transfer: d.payment.bukti_transfer,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRiwayatBayarRequest {
    pub penyewa: i32,
    #[validate(range(min = 0, message = "jumlah must be non-negative"))]
    pub jumlah: i64,
    #[serde(default)]
    pub keterangan: String,
    pub bukti_transfer: Option<String>,
}

impl From<CreateRiwayatBayarRequest> for NewPayment {
    fn from(req: CreateRiwayatBayarRequest) -> Self {
        Self {
            penyewa_id: req.penyewa,
            jumlah: req.jumlah,
            keterangan: req.keterangan,
            bukti_transfer: req.bukti_transfer,
        }
    }
}

/// Partial update. The timestamp and owning tenant stay fixed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRiwayatBayarRequest {
    #[validate(range(min = 0, message = "jumlah must be non-negative"))]
    pub jumlah: Option<i64>,
    pub keterangan: Option<String>,
    pub bukti_transfer: Option<String>,
}

impl From<UpdateRiwayatBayarRequest> for PaymentPatch {
    fn from(req: UpdateRiwayatBayarRequest) -> Self {
        Self {
            jumlah: req.jumlah,
            keterangan: req.keterangan,
            bukti_transfer: req.bukti_transfer,
        }
    }
}

/// List filter query parameters
#[derive(Debug, Deserialize)]
pub struct RiwayatBayarListParams {
    pub penyewa: Option<i32>,
}
