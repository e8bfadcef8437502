//! Create riwayat_pembayaran table

use sea_orm_migration::prelude::*;

use super::m20250101_000003_create_penyewa::Penyewa;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RiwayatPembayaran::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RiwayatPembayaran::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RiwayatPembayaran::PenyewaId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RiwayatPembayaran::TanggalBayar)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RiwayatPembayaran::Jumlah)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RiwayatPembayaran::Keterangan)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(RiwayatPembayaran::BuktiTransfer).string())
                    // Payments die with their tenant (cascade)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_riwayat_penyewa")
                            .from(RiwayatPembayaran::Table, RiwayatPembayaran::PenyewaId)
                            .to(Penyewa::Table, Penyewa::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_riwayat_penyewa")
                    .table(RiwayatPembayaran::Table)
                    .col(RiwayatPembayaran::PenyewaId)
                    .to_owned(),
            )
            .await?;

        // History lists and the financial summary both order by timestamp
        manager
            .create_index(
                Index::create()
                    .name("idx_riwayat_tanggal")
                    .table(RiwayatPembayaran::Table)
                    .col(RiwayatPembayaran::TanggalBayar)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RiwayatPembayaran::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RiwayatPembayaran {
    Table,
    Id,
    PenyewaId,
    TanggalBayar,
    Jumlah,
    Keterangan,
    BuktiTransfer,
}
