//! Payment (riwayat pembayaran) domain entity

use chrono::{DateTime, Utc};

/// A recorded amount paid by a tenant at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: i32,
    pub penyewa_id: i32,
    /// Stamped by the server at creation; never updated afterwards.
    pub tanggal_bayar: DateTime<Utc>,
    /// Amount in whole rupiah
    pub jumlah: i64,
    /// Free-text note (e.g. "Bayar kost Maret 2025")
    pub keterangan: String,
    /// Stored reference to the transfer receipt, if one was uploaded
    pub bukti_transfer: Option<String>,
}

/// A payment with the paying tenant's name resolved for display.
#[derive(Debug, Clone)]
pub struct PaymentDetail {
    pub payment: Payment,
    pub penyewa_nama: String,
}

/// Payload for recording a payment. The timestamp is assigned server-side.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub penyewa_id: i32,
    pub jumlah: i64,
    pub keterangan: String,
    pub bukti_transfer: Option<String>,
}

/// Partial update for a payment. The timestamp and owning tenant are fixed;
/// a misposted payment is deleted and re-recorded instead.
#[derive(Debug, Clone, Default)]
pub struct PaymentPatch {
    pub jumlah: Option<i64>,
    pub keterangan: Option<String>,
    pub bukti_transfer: Option<String>,
}

/// Listing filter for payments
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub penyewa_id: Option<i32>,
}

/// One page of payments, with the total count across all pages.
#[derive(Debug, Clone)]
pub struct PaymentPage {
    pub items: Vec<PaymentDetail>,
    pub total: u64,
}
