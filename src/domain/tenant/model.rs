//! Tenant (penyewa) domain entity

use chrono::NaiveDate;

use crate::domain::room::RoomDetail;

/// A person currently renting (or registered against) a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: i32,
    pub nama_lengkap: String,
    /// Active WhatsApp/phone number
    pub nomor_hp: String,
    /// Stored reference to the ID-card photo, if one was uploaded
    pub ktp_foto: Option<String>,
    /// The room this tenant holds. A room backs at most one tenant.
    pub kamar_id: Option<i32>,
    pub tanggal_masuk: NaiveDate,
    /// Initial lease duration in months
    pub durasi_sewa_bulan: i32,
}

/// A tenant together with the resolved room (and its type), as listings
/// expose it.
#[derive(Debug, Clone)]
pub struct TenantDetail {
    pub tenant: Tenant,
    pub kamar: Option<RoomDetail>,
}

/// Payload for checking a tenant in
#[derive(Debug, Clone)]
pub struct NewTenant {
    pub nama_lengkap: String,
    pub nomor_hp: String,
    pub ktp_foto: Option<String>,
    pub kamar_id: Option<i32>,
    pub tanggal_masuk: NaiveDate,
    pub durasi_sewa_bulan: i32,
}

/// Full-replacement update for a tenant.
///
/// `kamar_id` here is the *resulting* link: `None` clears the link,
/// `Some(id)` moves the tenant into that room.
#[derive(Debug, Clone)]
pub struct TenantUpdate {
    pub nama_lengkap: String,
    pub nomor_hp: String,
    pub ktp_foto: Option<String>,
    pub kamar_id: Option<i32>,
    pub tanggal_masuk: NaiveDate,
    pub durasi_sewa_bulan: i32,
}

/// Listing filter for tenants
#[derive(Debug, Clone, Default)]
pub struct TenantFilter {
    pub kamar_id: Option<i32>,
    /// Substring match on `nama_lengkap` or `nomor_hp`
    pub search: Option<String>,
}
