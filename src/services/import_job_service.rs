//! Upload intake and column-mapping management.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::database::entities::{import_jobs, import_mappings};
use crate::errors::{ImportError, ImportResult};
use crate::import::{parse_file, source_hash, ImportType, MappingConfig, MappingOptions, ParseOptions};

/// Most saved mappings offered as suggestions after an upload.
const SUGGESTION_LIMIT: usize = 5;

#[derive(Clone)]
pub struct ImportJobService {
    db: DatabaseConnection,
    upload_dir: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReport {
    pub job_id: i32,
    pub file_name: String,
    pub columns: Vec<String>,
    pub sample_rows: Vec<Vec<String>>,
    pub total_rows: usize,
    pub source_hash: String,
    pub suggested_mappings: Vec<MappingSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSummary {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub config: MappingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMappingRequest {
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub column_to_field: Option<HashMap<String, String>>,
    #[serde(default)]
    pub options: MappingOptions,
    #[serde(default)]
    pub save_as_template: bool,
    pub name: Option<String>,
}

impl ImportJobService {
    pub fn new(db: DatabaseConnection, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            upload_dir: upload_dir.into(),
        }
    }

    /// Intake an uploaded file: parse a preview, persist the raw bytes
    /// under the upload dir, and create the job in UPLOADED state.
    pub async fn create_job(
        &self,
        import_type: ImportType,
        file_name: &str,
        mime_type: Option<String>,
        content: &[u8],
        created_by_id: Option<i32>,
    ) -> ImportResult<UploadReport> {
        let preview = parse_file(
            content,
            mime_type.as_deref().unwrap_or(""),
            file_name,
            ParseOptions::preview(),
        )?;

        if preview.columns.is_empty() {
            return Err(ImportError::InvalidRequest(
                "No columns detected in file".to_string(),
            ));
        }

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(file_name));
        let file_path = self.upload_dir.join(stored_name);
        tokio::fs::write(&file_path, content).await?;

        let now = Utc::now();
        let job = import_jobs::ActiveModel {
            job_type: Set(import_type.as_str().to_string()),
            file_name: Set(file_name.to_string()),
            file_path: Set(file_path.to_string_lossy().to_string()),
            mime_type: Set(mime_type),
            status: Set(import_jobs::ImportStatus::Uploaded.as_str().to_string()),
            row_count: Set(preview.total_rows as i32),
            created_by_id: Set(created_by_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let hash = source_hash(&preview.columns);
        let suggestions = self.suggest_mappings(import_type, &hash).await?;

        info!(
            job_id = job.id,
            job_type = %job.job_type,
            rows = preview.total_rows,
            "import job created"
        );

        Ok(UploadReport {
            job_id: job.id,
            file_name: job.file_name,
            columns: preview.columns,
            sample_rows: preview.rows,
            total_rows: preview.total_rows,
            source_hash: hash,
            suggested_mappings: suggestions,
        })
    }

    pub async fn get_job(&self, job_id: i32) -> ImportResult<import_jobs::Model> {
        import_jobs::Entity::find_by_id(job_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ImportError::NotFound(format!("Import job {}", job_id)))
    }

    /// The mapping currently attached to a job, if any.
    pub async fn get_mapping(
        &self,
        job_id: i32,
    ) -> ImportResult<Option<import_mappings::Model>> {
        let job = self.get_job(job_id).await?;
        let Some(mapping_id) = job.mapping_id else {
            return Ok(None);
        };
        Ok(import_mappings::Entity::find_by_id(mapping_id)
            .one(&self.db)
            .await?)
    }

    /// Attach a column mapping to a job and advance it to MAPPED.
    /// Re-mapping a MAPPED job is allowed; later stages are not.
    pub async fn set_mapping(
        &self,
        job_id: i32,
        request: SetMappingRequest,
    ) -> ImportResult<import_jobs::Model> {
        let job = self.get_job(job_id).await?;

        let (Some(job_type), Some(column_to_field)) = (request.job_type, request.column_to_field)
        else {
            return Err(ImportError::InvalidRequest(
                "type and columnToField are required".to_string(),
            ));
        };
        let import_type = ImportType::parse(&job_type)
            .ok_or_else(|| ImportError::InvalidRequest(format!("Unknown import type: {}", job_type)))?;

        match job.import_status() {
            Some(import_jobs::ImportStatus::Uploaded) | Some(import_jobs::ImportStatus::Mapped) => {}
            _ => {
                return Err(ImportError::InvalidState(
                    "Job must be uploaded before mapping".to_string(),
                ))
            }
        }

        let config = MappingConfig {
            column_to_field,
            options: request.options,
        };
        let config_json = serde_json::to_string(&config)?;
        let hash = self.file_source_hash(&job).await;

        let now = Utc::now();
        let mapping = if request.save_as_template {
            let name = request
                .name
                .clone()
                .ok_or_else(|| ImportError::InvalidRequest("name is required to save a template".to_string()))?;
            self.upsert_template(&name, import_type, &config_json, hash, job.created_by_id)
                .await?
        } else {
            let name = request
                .name
                .unwrap_or_else(|| format!("{} mapping", job.file_name));
            import_mappings::ActiveModel {
                name: Set(name),
                job_type: Set(import_type.as_str().to_string()),
                source_hash: Set(hash),
                config_json: Set(config_json),
                created_by_id: Set(job.created_by_id),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&self.db)
            .await?
        };

        let mut active: import_jobs::ActiveModel = job.into();
        active.job_type = Set(import_type.as_str().to_string());
        active.mapping_id = Set(Some(mapping.id));
        active.status = Set(import_jobs::ImportStatus::Mapped.as_str().to_string());
        let updated = active.set_updated_at().update(&self.db).await?;

        info!(job_id = updated.id, mapping_id = mapping.id, "import job mapped");
        Ok(updated)
    }

    pub async fn list_mappings(
        &self,
        job_type: Option<&str>,
    ) -> ImportResult<Vec<import_mappings::Model>> {
        let mut query = import_mappings::Entity::find()
            .order_by_desc(import_mappings::Column::UpdatedAt);
        if let Some(ty) = job_type {
            query = query.filter(import_mappings::Column::JobType.eq(ty));
        }
        Ok(query.all(&self.db).await?)
    }

    pub async fn delete_mapping(&self, mapping_id: i32) -> ImportResult<()> {
        let mapping = import_mappings::Entity::find_by_id(mapping_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ImportError::NotFound(format!("Mapping {}", mapping_id)))?;
        import_mappings::Entity::delete_by_id(mapping.id)
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// Saved mappings worth offering for a fresh upload: same type, and a
    /// source hash equal to the file's or absent. Hash matches outrank
    /// hashless templates; recency breaks ties.
    async fn suggest_mappings(
        &self,
        import_type: ImportType,
        hash: &str,
    ) -> ImportResult<Vec<MappingSummary>> {
        let candidates = import_mappings::Entity::find()
            .filter(import_mappings::Column::JobType.eq(import_type.as_str()))
            .filter(
                import_mappings::Column::SourceHash
                    .eq(hash)
                    .or(import_mappings::Column::SourceHash.is_null()),
            )
            .order_by_desc(import_mappings::Column::UpdatedAt)
            .all(&self.db)
            .await?;

        let mut ranked: Vec<&import_mappings::Model> = Vec::new();
        ranked.extend(candidates.iter().filter(|m| m.source_hash.as_deref() == Some(hash)));
        ranked.extend(candidates.iter().filter(|m| m.source_hash.is_none()));

        Ok(ranked
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .filter_map(|m| {
                let config = m.config().ok()?;
                Some(MappingSummary {
                    id: m.id,
                    name: m.name.clone(),
                    job_type: m.job_type.clone(),
                    config,
                })
            })
            .collect())
    }

    async fn upsert_template(
        &self,
        name: &str,
        import_type: ImportType,
        config_json: &str,
        hash: Option<String>,
        created_by_id: Option<i32>,
    ) -> ImportResult<import_mappings::Model> {
        let now = Utc::now();
        let existing = import_mappings::Entity::find()
            .filter(import_mappings::Column::Name.eq(name))
            .filter(import_mappings::Column::JobType.eq(import_type.as_str()))
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(model) => {
                let mut active: import_mappings::ActiveModel = model.into();
                active.config_json = Set(config_json.to_string());
                active.source_hash = Set(hash);
                active.updated_at = Set(now);
                active.update(&self.db).await?
            }
            None => {
                import_mappings::ActiveModel {
                    name: Set(name.to_string()),
                    job_type: Set(import_type.as_str().to_string()),
                    source_hash: Set(hash),
                    config_json: Set(config_json.to_string()),
                    created_by_id: Set(created_by_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?
            }
        };
        Ok(model)
    }

    /// Column fingerprint of the job's stored file. Absent or unreadable
    /// files leave the mapping hashless rather than failing the request.
    async fn file_source_hash(&self, job: &import_jobs::Model) -> Option<String> {
        let content = tokio::fs::read(&job.file_path).await.ok()?;
        let preview = parse_file(
            &content,
            job.mime_type.as_deref().unwrap_or(""),
            &job.file_name,
            ParseOptions::preview(),
        )
        .ok()?;
        if preview.columns.is_empty() {
            return None;
        }
        Some(source_hash(&preview.columns))
    }
}

fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| name.to_string());
    base.chars()
        .map(|c| if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name_strips_paths() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("q1 report.csv"), "q1_report.csv");
        assert_eq!(sanitize_file_name("plain.xlsx"), "plain.xlsx");
    }
}
