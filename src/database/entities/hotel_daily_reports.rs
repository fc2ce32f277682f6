use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Front-desk daily close sheet. Unique on (hotel_id, date).
/// adr_net, occupancy derivations and the high-loss flag are computed
/// at import time, not stored as raw columns from the sheet.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotel_daily_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub date: ChronoDate,
    pub total_room: Option<i32>,
    pub room_sold: Option<i32>,
    pub cash: Option<f64>,
    pub credit: Option<f64>,
    pub online: Option<f64>,
    pub refund: Option<f64>,
    pub total: Option<f64>,
    pub dues: Option<f64>,
    pub lost_dues: Option<f64>,
    pub occupancy: Option<f64>,
    pub adr: Option<f64>,
    pub revpar: Option<f64>,
    pub high_loss_flag: bool,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel_properties::Entity",
        from = "Column::HotelId",
        to = "super::hotel_properties::Column::Id"
    )]
    HotelProperties,
}

impl Related<super::hotel_properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HotelProperties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
