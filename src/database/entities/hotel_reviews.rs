use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotel_reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub rating: Option<f64>,
    pub source: Option<String>,
    pub reviewer_name: Option<String>,
    pub review_date: Option<ChronoDate>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub response_text: Option<String>,
    pub created_at: ChronoDateTimeUtc,
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
