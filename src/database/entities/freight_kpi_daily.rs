use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per logistics venture per day. Unique on (venture_id, date).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "freight_kpi_daily")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub venture_id: i32,
    pub date: ChronoDate,
    pub loads_inbound: Option<i32>,
    pub loads_quoted: Option<i32>,
    pub loads_covered: Option<i32>,
    pub loads_lost: Option<i32>,
    pub total_revenue: Option<f64>,
    pub total_cost: Option<f64>,
    pub total_profit: Option<f64>,
    pub avg_margin_pct: Option<f64>,
    pub active_shippers: Option<i32>,
    pub new_shippers: Option<i32>,
    pub churned_shippers: Option<i32>,
    pub reactivated_shippers: Option<i32>,
    pub at_risk_shippers: Option<i32>,
    pub active_carriers: Option<i32>,
    pub new_carriers: Option<i32>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
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
