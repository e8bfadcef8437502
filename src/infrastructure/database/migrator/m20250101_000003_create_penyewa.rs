//! Create penyewa table

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_kamar::Kamar;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Penyewa::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Penyewa::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Penyewa::NamaLengkap)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Penyewa::NomorHp).string().not_null())
                    .col(ColumnDef::new(Penyewa::KtpFoto).string())
                    .col(ColumnDef::new(Penyewa::KamarId).integer())
                    .col(ColumnDef::new(Penyewa::TanggalMasuk).date().not_null())
                    .col(
                        ColumnDef::new(Penyewa::DurasiSewaBulan)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    // Deleting a room unlinks its tenant (set-null)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_penyewa_kamar")
                            .from(Penyewa::Table, Penyewa::KamarId)
                            .to(Kamar::Table, Kamar::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // A room backs at most one tenant. NULLs compare distinct, so any
        // number of unlinked tenants can coexist; two concurrent check-ins
        // against the same room cannot both commit.
        manager
            .create_index(
                Index::create()
                    .name("idx_penyewa_kamar")
                    .table(Penyewa::Table)
                    .col(Penyewa::KamarId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Penyewa::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Penyewa {
    Table,
    Id,
    NamaLengkap,
    NomorHp,
    KtpFoto,
    KamarId,
    TanggalMasuk,
    DurasiSewaBulan,
}
