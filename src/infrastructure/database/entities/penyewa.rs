//! Tenant entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "penyewa")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nama_lengkap: String,

    /// Active WhatsApp/phone number
    pub nomor_hp: String,

    /// Stored reference to the ID-card photo
    #[sea_orm(nullable)]
    pub ktp_foto: Option<String>,

    /// Room held by this tenant. UNIQUE at the storage layer: a room backs
    /// at most one tenant, even under concurrent check-ins.
    #[sea_orm(nullable)]
    pub kamar_id: Option<i32>,

    pub tanggal_masuk: Date,

    /// Initial lease duration in months
    pub durasi_sewa_bulan: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kamar::Entity",
        from = "Column::KamarId",
        to = "super::kamar::Column::Id"
    )]
    Kamar,
    #[sea_orm(has_many = "super::riwayat_pembayaran::Entity")]
    RiwayatPembayaran,
}

impl Related<super::kamar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kamar.def()
    }
}

impl Related<super::riwayat_pembayaran::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RiwayatPembayaran.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
