//! Room (kamar) aggregate

pub mod model;
pub mod repository;

pub use model::{NewRoom, Room, RoomDetail, RoomFilter, RoomPatch, RoomStatus};
pub use repository::RoomRepository;
