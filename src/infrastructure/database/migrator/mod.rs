//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_tipe_kamar;
mod m20250101_000002_create_kamar;
mod m20250101_000003_create_penyewa;
mod m20250101_000004_create_riwayat_pembayaran;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_tipe_kamar::Migration),
            Box::new(m20250101_000002_create_kamar::Migration),
            Box::new(m20250101_000003_create_penyewa::Migration),
            Box::new(m20250101_000004_create_riwayat_pembayaran::Migration),
        ]
    }
}
