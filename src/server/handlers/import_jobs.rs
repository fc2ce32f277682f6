use axum::{
    extract::{Multipart, Path, State},
    response::Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::database::entities::import_jobs;
use crate::errors::ImportError;
use crate::import::ImportType;
use crate::server::app::AppState;
use crate::services::{
    CommitReport, CommitService, ImportJobService, SetMappingRequest, UploadReport,
    ValidationReport, ValidationService,
};

use super::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub job_type: String,
    pub file_name: String,
    pub status: String,
    pub row_count: i32,
    pub success_count: i32,
    pub error_count: i32,
    pub error_rows: Option<Value>,
    pub error_message: Option<String>,
    pub mapping_id: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<import_jobs::Model> for JobResponse {
    fn from(job: import_jobs::Model) -> Self {
        let error_rows = job
            .error_rows
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok());
        Self {
            id: job.id,
            job_type: job.job_type,
            file_name: job.file_name,
            status: job.status,
            row_count: job.row_count,
            success_count: job.success_count,
            error_count: job.error_count,
            error_rows,
            error_message: job.error_message,
            mapping_id: job.mapping_id,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// POST /api/v1/import/upload: multipart form with a "file" part and a
/// "type" part naming the import type.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadReport>, ApiError> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut type_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ImportError::InvalidRequest(format!("Invalid multipart body: {}", e)))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .unwrap_or("upload.csv")
                    .to_string();
                let content_type = field.content_type().map(|c| c.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ImportError::InvalidRequest(format!("Failed to read file: {}", e)))?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            Some("type") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ImportError::InvalidRequest(format!("Invalid type field: {}", e)))?;
                type_name = Some(value);
            }
            _ => {}
        }
    }

    let (file_name, content_type, bytes) = file
        .ok_or_else(|| ImportError::InvalidRequest("file field is required".to_string()))?;
    let type_name = type_name
        .ok_or_else(|| ImportError::InvalidRequest("type field is required".to_string()))?;
    let import_type = ImportType::parse(&type_name)
        .ok_or_else(|| ImportError::InvalidRequest(format!("Unknown import type: {}", type_name)))?;

    let service = ImportJobService::new(state.db.clone(), state.upload_dir.clone());
    let report = service
        .create_job(import_type, &file_name, content_type, &bytes, None)
        .await?;
    Ok(Json(report))
}

pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<JobResponse>, ApiError> {
    let service = ImportJobService::new(state.db.clone(), state.upload_dir.clone());
    let job = service.get_job(id).await?;
    Ok(Json(job.into()))
}

pub async fn get_mapping(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let service = ImportJobService::new(state.db.clone(), state.upload_dir.clone());
    let mapping = service.get_mapping(id).await?;

    let body = match mapping {
        Some(mapping) => {
            let config = mapping.config().map_err(ImportError::from)?;
            json!({
                "id": mapping.id,
                "name": mapping.name,
                "type": mapping.job_type,
                "sourceHash": mapping.source_hash,
                "config": config,
            })
        }
        None => json!({ "mapping": null }),
    };
    Ok(Json(body))
}

pub async fn set_mapping(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<SetMappingRequest>,
) -> Result<Json<JobResponse>, ApiError> {
    let service = ImportJobService::new(state.db.clone(), state.upload_dir.clone());
    let job = service.set_mapping(id, request).await?;
    Ok(Json(job.into()))
}

pub async fn validate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ValidationReport>, ApiError> {
    let service = ValidationService::new(state.db.clone());
    let report = service.validate(id).await?;
    Ok(Json(report))
}

pub async fn commit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CommitReport>, ApiError> {
    let service = CommitService::new(state.db.clone());
    let report = service.commit(id).await?;
    Ok(Json(report))
}
