use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Call-center production metrics. Unique on (campaign_id, date).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bpo_daily_metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub campaign_id: i32,
    pub date: ChronoDate,
    pub outbound_calls: Option<i32>,
    pub handled_calls: Option<i32>,
    pub talk_time_min: Option<f64>,
    pub leads_created: Option<i32>,
    pub demos_booked: Option<i32>,
    pub sales_closed: Option<i32>,
    pub fte_count: Option<f64>,
    pub revenue: Option<f64>,
    pub cost: Option<f64>,
    pub avg_qa_score: Option<f64>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
