use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotel_disputes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub dispute_type: String, // 'CHARGEBACK' or 'OTA_DISPUTE'
    pub channel: Option<String>,
    pub status: String,
    pub disputed_amount: Option<f64>,
    pub original_amount: Option<f64>,
    pub reservation_id: Option<String>,
    pub folio_number: Option<String>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub posted_date: Option<ChronoDate>,
    pub stay_from: Option<ChronoDate>,
    pub stay_to: Option<ChronoDate>,
    pub evidence_due_date: Option<ChronoDate>,
    pub reason: Option<String>,
    pub created_by_id: Option<i32>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel_properties::Entity",
        from = "Column::PropertyId",
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
