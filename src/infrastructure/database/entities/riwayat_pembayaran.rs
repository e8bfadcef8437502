//! Payment entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "riwayat_pembayaran")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub penyewa_id: i32,

    /// Stamped by the server at creation; immutable afterwards.
    pub tanggal_bayar: DateTimeUtc,

    /// Amount in whole rupiah
    pub jumlah: i64,

    /// Free-text note (e.g. "Bayar kost Maret 2025")
    pub keterangan: String,

    /// Stored reference to the transfer receipt
    #[sea_orm(nullable)]
    pub bukti_transfer: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::penyewa::Entity",
        from = "Column::PenyewaId",
        to = "super::penyewa::Column::Id"
    )]
    Penyewa,
}

impl Related<super::penyewa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Penyewa.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
