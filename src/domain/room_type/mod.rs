//! Room type (tipe kamar) aggregate

pub mod model;
pub mod repository;

pub use model::{NewRoomType, RoomType, RoomTypePatch};
pub use repository::RoomTypeRepository;
