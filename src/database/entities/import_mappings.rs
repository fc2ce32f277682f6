use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::import::MappingConfig;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "import_mappings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub job_type: String,
    /// Fingerprint of the column set the mapping was created from; null
    /// for hand-built templates that should match any file of the type.
    pub source_hash: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub config_json: String, // MappingConfig as JSON
    pub created_by_id: Option<i32>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::import_jobs::Entity")]
    ImportJobs,
}

impl Related<super::import_jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImportJobs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn config(&self) -> Result<MappingConfig, serde_json::Error> {
        serde_json::from_str(&self.config_json)
    }
}
