//! Room type entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tipe_kamar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name, unique (e.g. "Standard", "VIP AC")
    pub nama_tipe: String,

    /// Monthly rate in whole rupiah
    pub harga_per_bulan: i64,

    /// Free-text amenities description
    pub fasilitas: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kamar::Entity")]
    Kamar,
}

impl Related<super::kamar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kamar.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
