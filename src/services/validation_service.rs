//! Row validation against the job's mapping and requirement table.
//!
//! Validation is a pure read plus a recompute: it re-parses the stored
//! file, coerces every row, and records the outcome on the job. Running
//! it again while the state machine permits produces the same result.

use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::Serialize;
use tracing::info;

use crate::database::entities::{import_jobs, import_mappings};
use crate::errors::{ImportError, ImportResult};
use crate::import::{coerce_row, parse_file, required_fields, ParseOptions, RowError};

/// Row errors persisted on the job record.
const STORED_ERROR_LIMIT: usize = 100;
/// Row errors returned in the validation response.
const RETURNED_ERROR_LIMIT: usize = 50;
/// Coerced records echoed back as a preview.
const PREVIEW_RECORD_LIMIT: usize = 10;

#[derive(Clone)]
pub struct ValidationService {
    db: DatabaseConnection,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub job_id: i32,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub errors: Vec<ValidationIssue>,
    pub preview: Vec<serde_json::Value>,
}

/// One cell- or field-level problem, with the raw mapped cells of the row
/// so the caller can show context.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub row: usize,
    pub column: String,
    pub message: String,
    pub data: HashMap<String, String>,
}

impl ValidationService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn validate(&self, job_id: i32) -> ImportResult<ValidationReport> {
        let job = import_jobs::Entity::find_by_id(job_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ImportError::NotFound(format!("Import job {}", job_id)))?;

        // Validation is a pure recompute, so re-running it on an already
        // VALIDATED job is allowed; earlier or later stages are not.
        match job.import_status() {
            Some(import_jobs::ImportStatus::Mapped)
            | Some(import_jobs::ImportStatus::Validated) => {}
            _ => {
                return Err(ImportError::InvalidState(
                    "Job must be mapped before validation".to_string(),
                ));
            }
        }

        if !std::path::Path::new(&job.file_path).exists() {
            return Err(ImportError::FileMissing(job.file_path.clone()));
        }

        let content = tokio::fs::read(&job.file_path).await?;
        let parsed = parse_file(
            &content,
            job.mime_type.as_deref().unwrap_or(""),
            &job.file_name,
            ParseOptions::default(),
        )?;

        let mapping_id = job
            .mapping_id
            .ok_or_else(|| ImportError::InvalidRequest("No column mapping found".to_string()))?;
        let config = import_mappings::Entity::find_by_id(mapping_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ImportError::NotFound(format!("Mapping {}", mapping_id)))?
            .config()?;

        let import_type = job.import_type().ok_or_else(|| {
            ImportError::InvalidRequest(format!("Unknown import type: {}", job.job_type))
        })?;
        let required = required_fields(import_type);

        let mut issues: Vec<ValidationIssue> = Vec::new();
        let mut preview: Vec<serde_json::Value> = Vec::new();
        let mut valid_rows = 0usize;

        for (index, row) in parsed.rows.iter().enumerate() {
            let row_number = index + 2;
            let data = mapped_cells(&parsed.columns, row, &config.column_to_field);
            let (mut record, cell_errors) = coerce_row(&parsed.columns, row, &config.column_to_field);

            let mut row_has_error = !cell_errors.is_empty();
            for err in cell_errors {
                issues.push(ValidationIssue {
                    row: row_number,
                    column: err.column,
                    message: err.message,
                    data: data.clone(),
                });
            }

            // Requirement check runs before the global options inject
            // ventureId/propertyId, so a missing id column is still caught.
            for group in required {
                if group.iter().any(|name| record.satisfies_required(name)) {
                    continue;
                }
                let canonical = group[0];
                let column = config
                    .column_to_field
                    .iter()
                    .find(|(_, field)| group.contains(&field.as_str()))
                    .map(|(col, _)| col.clone())
                    .unwrap_or_else(|| canonical.to_string());
                issues.push(ValidationIssue {
                    row: row_number,
                    column,
                    message: format!("Missing required field: {}", canonical),
                    data: data.clone(),
                });
                row_has_error = true;
            }

            config.options.apply(&mut record);

            if !row_has_error {
                valid_rows += 1;
                if preview.len() < PREVIEW_RECORD_LIMIT {
                    preview.push(record.to_json());
                }
            }
        }

        let invalid_rows = parsed.rows.len() - valid_rows;

        let stored: Vec<RowError> = issues
            .iter()
            .take(STORED_ERROR_LIMIT)
            .map(|issue| RowError {
                row: issue.row,
                column: Some(issue.column.clone()),
                message: issue.message.clone(),
            })
            .collect();

        let mut active: import_jobs::ActiveModel = job.into();
        active.status = Set(import_jobs::ImportStatus::Validated.as_str().to_string());
        active.row_count = Set(parsed.total_rows as i32);
        active.success_count = Set(valid_rows as i32);
        active.error_count = Set(invalid_rows as i32);
        active.error_rows = Set(if stored.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&stored)?)
        });
        active.set_updated_at().update(&self.db).await?;

        info!(
            job_id,
            total = parsed.total_rows,
            valid = valid_rows,
            invalid = invalid_rows,
            "import job validated"
        );

        issues.truncate(RETURNED_ERROR_LIMIT);
        Ok(ValidationReport {
            job_id,
            total_rows: parsed.total_rows,
            valid_rows,
            invalid_rows,
            errors: issues,
            preview,
        })
    }
}

/// Raw cell values of the mapped columns, keyed by source column name.
fn mapped_cells(
    columns: &[String],
    row: &[String],
    column_to_field: &HashMap<String, String>,
) -> HashMap<String, String> {
    column_to_field
        .iter()
        .filter(|(_, field)| field.as_str() != "__ignore__" && !field.is_empty())
        .filter_map(|(col, _)| {
            let index = columns.iter().position(|c| c == col)?;
            Some((col.clone(), row.get(index).cloned().unwrap_or_default()))
        })
        .collect()
}
