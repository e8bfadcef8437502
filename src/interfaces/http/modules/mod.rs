//! HTTP modules, one per resource

pub mod finance;
pub mod health;
pub mod payments;
pub mod room_types;
pub mod rooms;
pub mod tenants;
