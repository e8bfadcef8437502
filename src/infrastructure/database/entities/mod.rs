//! Database entities module

pub mod kamar;
pub mod penyewa;
pub mod riwayat_pembayaran;
pub mod tipe_kamar;

pub use kamar::Entity as Kamar;
pub use penyewa::Entity as Penyewa;
pub use riwayat_pembayaran::Entity as RiwayatPembayaran;
pub use tipe_kamar::Entity as TipeKamar;
