use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::import::ImportType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "import_jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_type: String, // ImportType as string
    pub file_name: String,
    pub file_path: String,
    pub mime_type: Option<String>,
    pub status: String, // ImportStatus as string
    pub row_count: i32,
    pub success_count: i32,
    pub error_count: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub error_rows: Option<String>, // JSON array of {row, column?, message}
    pub error_message: Option<String>,
    pub mapping_id: Option<i32>,
    pub created_by_id: Option<i32>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::import_mappings::Entity",
        from = "Column::MappingId",
        to = "super::import_mappings::Column::Id"
    )]
    ImportMappings,
}

impl Related<super::import_mappings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImportMappings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Lifecycle state of an import job. Transitions are strictly ordered:
/// UPLOADED -> MAPPED -> VALIDATED -> IMPORTING -> IMPORTED | FAILED.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportStatus {
    Uploaded,
    Mapped,
    Validated,
    Importing,
    Imported,
    Failed,
}

impl ImportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStatus::Uploaded => "UPLOADED",
            ImportStatus::Mapped => "MAPPED",
            ImportStatus::Validated => "VALIDATED",
            ImportStatus::Importing => "IMPORTING",
            ImportStatus::Imported => "IMPORTED",
            ImportStatus::Failed => "FAILED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "UPLOADED" => Some(ImportStatus::Uploaded),
            "MAPPED" => Some(ImportStatus::Mapped),
            "VALIDATED" => Some(ImportStatus::Validated),
            "IMPORTING" => Some(ImportStatus::Importing),
            "IMPORTED" => Some(ImportStatus::Imported),
            "FAILED" => Some(ImportStatus::Failed),
            _ => None,
        }
    }

    /// Terminal states: the job row persists as an audit record only.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ImportStatus::Imported | ImportStatus::Failed)
    }
}

impl Model {
    pub fn import_type(&self) -> Option<ImportType> {
        ImportType::parse(&self.job_type)
    }

    pub fn import_status(&self) -> Option<ImportStatus> {
        ImportStatus::parse(&self.status)
    }
}

impl ActiveModel {
    pub fn set_updated_at(mut self) -> Self {
        self.updated_at = Set(chrono::Utc::now());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ImportStatus::Uploaded,
            ImportStatus::Mapped,
            ImportStatus::Validated,
            ImportStatus::Importing,
            ImportStatus::Imported,
            ImportStatus::Failed,
        ] {
            assert_eq!(ImportStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ImportStatus::parse("BOGUS"), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(ImportStatus::Imported.is_terminal());
        assert!(ImportStatus::Failed.is_terminal());
        assert!(!ImportStatus::Importing.is_terminal());
        assert!(!ImportStatus::Uploaded.is_terminal());
    }
}
