//! Create kamar table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_tipe_kamar::TipeKamar;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Kamar::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Kamar::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Kamar::NomorKamar)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Kamar::TipeId).integer().not_null())
                    .col(
                        ColumnDef::new(Kamar::Lantai)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Kamar::Status)
                            .string()
                            .not_null()
                            .default("KOSONG"),
                    )
                    // Deleting a referenced type is blocked (protect)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kamar_tipe")
                            .from(Kamar::Table, Kamar::TipeId)
                            .to(TipeKamar::Table, TipeKamar::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Door numbers are unique
        manager
            .create_index(
                Index::create()
                    .name("idx_kamar_nomor")
                    .table(Kamar::Table)
                    .col(Kamar::NomorKamar)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Kamar::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Kamar {
    Table,
    Id,
    NomorKamar,
    TipeId,
    Lantai,
    Status,
}
