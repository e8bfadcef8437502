//! Room entity

use sea_orm::entity::prelude::*;

/// Occupancy status, stored as the wire strings the frontend already knows.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum StatusKamar {
    #[sea_orm(string_value = "KOSONG")]
    Kosong,
    #[sea_orm(string_value = "ISI")]
    Isi,
    #[sea_orm(string_value = "MAINTENANCE")]
    Maintenance,
}

impl Default for StatusKamar {
    fn default() -> Self {
        Self::Kosong
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kamar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Door number, unique across the property (e.g. "A01")
    pub nomor_kamar: String,

    pub tipe_id: i32,

    pub lantai: i32,

    pub status: StatusKamar,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tipe_kamar::Entity",
        from = "Column::TipeId",
        to = "super::tipe_kamar::Column::Id"
    )]
    TipeKamar,
    #[sea_orm(has_many = "super::penyewa::Entity")]
    Penyewa,
}

impl Related<super::tipe_kamar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TipeKamar.def()
    }
}

impl Related<super::penyewa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Penyewa.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
