//! Commit stage: replay the file through the shared coercion and write
//! each record into its domain table.
//!
//! The VALIDATED -> IMPORTING transition is a conditional update on the
//! current status, so a second concurrent commit observes zero affected
//! rows and is rejected without touching the job.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Serialize;
use tracing::{error, info};

use crate::database::entities::{import_jobs, import_mappings};
use crate::errors::{ImportError, ImportResult};
use crate::import::{coerce_row, parse_file, ImportType, MappingConfig, ParseOptions, RowError};

use super::importers;
use super::venture_resolver::{DbVentureResolver, VentureResolver};

/// Row errors persisted on the job record.
const STORED_ERROR_LIMIT: usize = 100;
/// Row errors returned in the commit response.
const RETURNED_ERROR_LIMIT: usize = 20;

#[derive(Clone)]
pub struct CommitService {
    db: DatabaseConnection,
    resolver: Arc<dyn VentureResolver>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitReport {
    pub success: bool,
    pub job_id: i32,
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<RowError>,
}

impl CommitService {
    pub fn new(db: DatabaseConnection) -> Self {
        let resolver = Arc::new(DbVentureResolver::new(db.clone()));
        Self { db, resolver }
    }

    pub fn with_resolver(db: DatabaseConnection, resolver: Arc<dyn VentureResolver>) -> Self {
        Self { db, resolver }
    }

    pub async fn commit(&self, job_id: i32) -> ImportResult<CommitReport> {
        let job = import_jobs::Entity::find_by_id(job_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ImportError::NotFound(format!("Import job {}", job_id)))?;

        if job.import_status() != Some(import_jobs::ImportStatus::Validated) {
            return Err(ImportError::InvalidState(
                "Job must be validated before import".to_string(),
            ));
        }

        if !std::path::Path::new(&job.file_path).exists() {
            return Err(ImportError::FileMissing(job.file_path.clone()));
        }

        let guard = import_jobs::Entity::update_many()
            .col_expr(
                import_jobs::Column::Status,
                Expr::value(import_jobs::ImportStatus::Importing.as_str()),
            )
            .col_expr(import_jobs::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(import_jobs::Column::Id.eq(job_id))
            .filter(
                import_jobs::Column::Status
                    .eq(import_jobs::ImportStatus::Validated.as_str()),
            )
            .exec(&self.db)
            .await?;

        if guard.rows_affected == 0 {
            return Err(ImportError::InvalidState(
                "Job is already being imported".to_string(),
            ));
        }

        match self.run_import(&job).await {
            Ok(report) => Ok(report),
            Err(err) => {
                error!(job_id, error = %err, "import commit failed");
                self.mark_failed(job_id, &err.to_string()).await?;
                Err(err)
            }
        }
    }

    async fn run_import(&self, job: &import_jobs::Model) -> ImportResult<CommitReport> {
        let content = tokio::fs::read(&job.file_path).await?;
        let parsed = parse_file(
            &content,
            job.mime_type.as_deref().unwrap_or(""),
            &job.file_name,
            ParseOptions::default(),
        )?;

        let config = self.load_config(job).await?;
        let import_type = job.import_type().ok_or_else(|| {
            ImportError::CommitFailed(format!("Unsupported import type: {}", job.job_type))
        })?;

        let mut success_count = 0usize;
        let mut errors: Vec<RowError> = Vec::new();

        for (index, row) in parsed.rows.iter().enumerate() {
            let (mut record, _) = coerce_row(&parsed.columns, row, &config.column_to_field);
            config.options.apply(&mut record);

            let outcome = match import_type {
                ImportType::Loads => {
                    importers::import_load(
                        &self.db,
                        self.resolver.as_ref(),
                        &record,
                        job.created_by_id,
                    )
                    .await
                }
                ImportType::Shippers => {
                    importers::import_shipper(&self.db, self.resolver.as_ref(), &record).await
                }
                ImportType::Carriers => importers::import_carrier(&self.db, &record).await,
                ImportType::HotelKpis => importers::import_hotel_kpi(&self.db, &record).await,
                ImportType::HotelDaily => {
                    importers::import_hotel_daily_report(&self.db, &record).await
                }
                ImportType::FreightKpis => importers::import_freight_kpi(&self.db, &record).await,
                ImportType::HotelDisputes => {
                    importers::import_hotel_dispute(&self.db, &record, job.created_by_id).await
                }
                ImportType::HotelReviews => {
                    importers::import_hotel_review(&self.db, &record).await
                }
                ImportType::BpoMetrics => importers::import_bpo_metric(&self.db, &record).await,
                ImportType::Generic => Err(ImportError::CommitFailed(
                    "Unsupported import type: GENERIC".to_string(),
                )),
            };

            match outcome {
                Ok(()) => success_count += 1,
                Err(err) => {
                    let message = match err {
                        ImportError::CommitFailed(msg) => msg,
                        other => other.to_string(),
                    };
                    errors.push(RowError {
                        row: index + 2,
                        column: None,
                        message,
                    });
                }
            }
        }

        let error_count = errors.len();
        let stored: Vec<&RowError> = errors.iter().take(STORED_ERROR_LIMIT).collect();

        let mut active: import_jobs::ActiveModel = job.clone().into();
        active.status = Set(import_jobs::ImportStatus::Imported.as_str().to_string());
        active.success_count = Set(success_count as i32);
        active.error_count = Set(error_count as i32);
        active.error_rows = Set(if stored.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&stored)?)
        });
        active.set_updated_at().update(&self.db).await?;

        // The raw upload has served its purpose once the rows are in.
        if tokio::fs::remove_file(&job.file_path).await.is_err() {
            info!(job_id = job.id, path = %job.file_path, "upload file already gone");
        }

        info!(
            job_id = job.id,
            success = success_count,
            failed = error_count,
            "import job committed"
        );

        errors.truncate(RETURNED_ERROR_LIMIT);
        Ok(CommitReport {
            success: true,
            job_id: job.id,
            success_count,
            error_count,
            errors,
        })
    }

    async fn load_config(&self, job: &import_jobs::Model) -> ImportResult<MappingConfig> {
        let mapping_id = job
            .mapping_id
            .ok_or_else(|| ImportError::CommitFailed("No column mapping found".to_string()))?;
        let mapping = import_mappings::Entity::find_by_id(mapping_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ImportError::CommitFailed("No column mapping found".to_string()))?;
        Ok(mapping.config()?)
    }

    async fn mark_failed(&self, job_id: i32, message: &str) -> ImportResult<()> {
        import_jobs::Entity::update_many()
            .col_expr(
                import_jobs::Column::Status,
                Expr::value(import_jobs::ImportStatus::Failed.as_str()),
            )
            .col_expr(import_jobs::Column::ErrorMessage, Expr::value(message))
            .col_expr(import_jobs::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(import_jobs::Column::Id.eq(job_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
