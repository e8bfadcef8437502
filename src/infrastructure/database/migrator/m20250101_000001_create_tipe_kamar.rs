//! Create tipe_kamar table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TipeKamar::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TipeKamar::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TipeKamar::NamaTipe)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TipeKamar::HargaPerBulan)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TipeKamar::Fasilitas)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // Type names are unique
        manager
            .create_index(
                Index::create()
                    .name("idx_tipe_kamar_nama")
                    .table(TipeKamar::Table)
                    .col(TipeKamar::NamaTipe)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TipeKamar::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TipeKamar {
    Table,
    Id,
    NamaTipe,
    HargaPerBulan,
    Fasilitas,
}
