use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ventures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub venture_type: String, // 'LOGISTICS', 'HOTELS', 'BPO', 'SALES'
    pub is_active: bool,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hotel_properties::Entity")]
    HotelProperties,
    #[sea_orm(has_many = "super::loads::Entity")]
    Loads,
}

impl Related<super::hotel_properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HotelProperties.def()
    }
}

impl Related<super::loads::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loads.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
