use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::server::app::AppState;
use crate::services::ImportJobService;

use super::ApiError;

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    pub id: i32,
}

pub async fn list_mappings(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let service = ImportJobService::new(state.db.clone(), state.upload_dir.clone());
    let mappings = service.list_mappings(query.job_type.as_deref()).await?;

    let body = mappings
        .into_iter()
        .filter_map(|m| {
            let config = m.config().ok()?;
            Some(json!({
                "id": m.id,
                "name": m.name,
                "type": m.job_type,
                "sourceHash": m.source_hash,
                "config": config,
                "updatedAt": m.updated_at,
            }))
        })
        .collect();
    Ok(Json(body))
}

pub async fn delete_mapping(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<Value>, ApiError> {
    let service = ImportJobService::new(state.db.clone(), state.upload_dir.clone());
    service.delete_mapping(query.id).await?;
    Ok(Json(json!({ "success": true })))
}
