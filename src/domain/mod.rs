//! Core business entities, repository interfaces and errors

pub mod error;
pub mod payment;
pub mod repositories;
pub mod room;
pub mod room_type;
pub mod tenant;

pub use error::{DomainError, DomainResult};
pub use payment::{NewPayment, Payment, PaymentDetail, PaymentFilter, PaymentPage, PaymentPatch};
pub use repositories::RepositoryProvider;
pub use room::{NewRoom, Room, RoomDetail, RoomFilter, RoomPatch, RoomStatus};
pub use room_type::{NewRoomType, RoomType, RoomTypePatch};
pub use tenant::{NewTenant, Tenant, TenantDetail, TenantFilter, TenantUpdate};
