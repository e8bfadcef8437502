//! Room (kamar) domain entity

use crate::domain::room_type::RoomType;

/// Occupancy status of a room.
///
/// `Isi` is a derived state: it is set and cleared exclusively by the
/// tenancy operations, never by direct user edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    /// Vacant
    Kosong,
    /// Occupied by a tenant
    Isi,
    /// Out of service for repairs
    Maintenance,
}

impl Default for RoomStatus {
    fn default() -> Self {
        Self::Kosong
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kosong => write!(f, "KOSONG"),
            Self::Isi => write!(f, "ISI"),
            Self::Maintenance => write!(f, "MAINTENANCE"),
        }
    }
}

impl std::str::FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KOSONG" => Ok(Self::Kosong),
            "ISI" => Ok(Self::Isi),
            "MAINTENANCE" => Ok(Self::Maintenance),
            other => Err(format!("unknown room status: {}", other)),
        }
    }
}

/// A physical, uniquely numbered unit belonging to one room type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i32,
    /// Door number, unique across the property (e.g. "A01")
    pub nomor_kamar: String,
    pub tipe_id: i32,
    pub lantai: i32,
    pub status: RoomStatus,
}

/// A room together with its resolved room type, as listings expose it.
#[derive(Debug, Clone)]
pub struct RoomDetail {
    pub room: Room,
    pub tipe: RoomType,
}

/// Payload for creating a room
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub nomor_kamar: String,
    pub tipe_id: i32,
    pub lantai: i32,
    pub status: RoomStatus,
}

/// Partial update for a room
#[derive(Debug, Clone, Default)]
pub struct RoomPatch {
    pub nomor_kamar: Option<String>,
    pub tipe_id: Option<i32>,
    pub lantai: Option<i32>,
    pub status: Option<RoomStatus>,
}

/// Listing filter for rooms
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
    pub lantai: Option<i32>,
    pub tipe_id: Option<i32>,
    /// Substring match on `nomor_kamar`
    pub search: Option<String>,
}
