use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "loads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub venture_id: i32,
    pub reference: String,
    pub load_status: String, // 'OPEN', 'COVERED', 'DELIVERED', 'CANCELLED'
    pub pickup_date: Option<ChronoDate>,
    pub drop_date: Option<ChronoDate>,
    pub shipper_name: Option<String>,
    pub customer_name: Option<String>,
    pub pickup_city: Option<String>,
    pub pickup_state: Option<String>,
    pub pickup_zip: Option<String>,
    pub drop_city: Option<String>,
    pub drop_state: Option<String>,
    pub drop_zip: Option<String>,
    pub equipment_type: Option<String>,
    pub weight_lbs: Option<f64>,
    pub rate: Option<f64>,
    pub created_by_id: Option<i32>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ventures::Entity",
        from = "Column::VentureId",
        to = "super::ventures::Column::Id"
    )]
    Ventures,
}

impl Related<super::ventures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ventures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
