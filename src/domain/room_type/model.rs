//! Room type (tipe kamar) domain entity

/// A priced category of accommodation with shared amenities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomType {
    pub id: i32,
    /// Display name, unique across all types (e.g. "Standard", "VIP AC")
    pub nama_tipe: String,
    /// Monthly rate in whole rupiah
    pub harga_per_bulan: i64,
    /// Free-text amenities description
    pub fasilitas: String,
}

/// Payload for creating a room type
#[derive(Debug, Clone)]
pub struct NewRoomType {
    pub nama_tipe: String,
    pub harga_per_bulan: i64,
    pub fasilitas: String,
}

/// Partial update for a room type
#[derive(Debug, Clone, Default)]
pub struct RoomTypePatch {
    pub nama_tipe: Option<String>,
    pub harga_per_bulan: Option<i64>,
    pub fasilitas: Option<String>,
}
