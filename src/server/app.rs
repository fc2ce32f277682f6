use std::path::PathBuf;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{health, import_jobs, mappings, templates};

/// Uploads above this size are rejected before parsing.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub upload_dir: PathBuf,
}

pub async fn create_app(
    db: DatabaseConnection,
    upload_dir: &str,
    cors_origin: Option<&str>,
) -> Result<Router> {
    let state = AppState {
        db,
        upload_dir: PathBuf::from(upload_dir),
    };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1_routes())
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/import/upload",
            post(import_jobs::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/import/jobs/:id", get(import_jobs::get_job))
        .route("/import/jobs/:id/mapping", get(import_jobs::get_mapping))
        .route("/import/jobs/:id/mapping", post(import_jobs::set_mapping))
        .route("/import/jobs/:id/validate", post(import_jobs::validate))
        .route("/import/jobs/:id/commit", post(import_jobs::commit))
        .route("/import/mappings", get(mappings::list_mappings))
        .route("/import/mappings", delete(mappings::delete_mapping))
        .route("/import/template", get(templates::download_template))
}
