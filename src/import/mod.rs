//! Core import pipeline building blocks: file parsing, field typing, and
//! the shared cell coercion used by both validation and commit.

pub mod coerce;
pub mod parser;
pub mod schema;

pub use coerce::{coerce_row, parse_date, parse_number, CellError, Record, Value};
pub use parser::{parse_file, source_hash, ParseOptions, ParseResult};
pub use schema::{field_kind, required_fields, template_for, FieldKind, ImportType};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Persisted column-mapping configuration for an import job.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingConfig {
    pub column_to_field: HashMap<String, String>,
    #[serde(default)]
    pub options: MappingOptions,
}

/// Global options applied to every record of a job.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venture_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<i32>,
}

impl MappingOptions {
    /// Inject the global venture/property ids into a coerced record.
    pub fn apply(&self, record: &mut Record) {
        if let Some(venture_id) = self.venture_id {
            record.set("ventureId", Value::Int(venture_id as i64));
        }
        if let Some(property_id) = self.property_id {
            record.set("propertyId", Value::Int(property_id as i64));
        }
    }
}

/// A stored row-level error, truncated to the first 100 per job.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based row number in the source file, counting the header row.
    pub row: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_config_json_round_trip() {
        let json = r#"{"columnToField":{"Date":"date"},"options":{"ventureId":3}}"#;
        let config: MappingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.column_to_field["Date"], "date");
        assert_eq!(config.options.venture_id, Some(3));
        assert_eq!(config.options.property_id, None);

        let back = serde_json::to_string(&config).unwrap();
        assert!(back.contains("columnToField"));
        assert!(!back.contains("propertyId"));
    }

    #[test]
    fn test_options_apply_injects_ids() {
        let options = MappingOptions {
            venture_id: Some(7),
            property_id: Some(2),
            date_format: None,
        };
        let mut record = Record::default();
        options.apply(&mut record);
        assert_eq!(record.int("ventureId"), Some(7));
        assert_eq!(record.int("propertyId"), Some(2));
    }
}
