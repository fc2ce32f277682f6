use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per hotel per calendar day. Unique on (hotel_id, date).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotel_kpi_daily")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub venture_id: Option<i32>,
    pub date: ChronoDate,
    pub occupancy_pct: Option<f64>,
    pub adr: Option<f64>,
    pub revpar: Option<f64>,
    pub room_revenue: Option<f64>,
    pub rooms_sold: Option<i32>,
    pub rooms_available: Option<i32>,
    pub total_revenue: Option<f64>,
    pub other_revenue: Option<f64>,
    pub gross_operating_profit: Option<f64>,
    pub goppar: Option<f64>,
    pub cancellations: Option<i32>,
    pub no_shows: Option<i32>,
    pub walkins: Option<i32>,
    pub complaints: Option<i32>,
    pub rooms_out_of_order: Option<i32>,
    pub review_score: Option<f64>,
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
