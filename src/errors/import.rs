//! Structured error type for the import pipeline.
//!
//! The taxonomy distinguishes structural errors (nothing persisted), state
//! errors (job untouched), and commit failures (job now FAILED, file kept
//! on disk for inspection). Handlers map these onto HTTP status codes and
//! JSON bodies.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    /// Malformed or incomplete request payload
    #[error("{0}")]
    InvalidRequest(String),

    /// Referenced job, mapping, or file does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Stage called out of order; the job is left untouched
    #[error("{0}")]
    InvalidState(String),

    /// Uploaded file could not be parsed into columns and rows
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The job's stored file is missing from disk
    #[error("File not found: {0}")]
    FileMissing(String),

    /// Commit aborted; the job has been marked FAILED
    #[error("Import failed: {0}")]
    CommitFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImportError {
    /// Check if this is a client error (400-series)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ImportError::InvalidRequest(_)
                | ImportError::ParseError(_)
                | ImportError::FileMissing(_)
        )
    }

    /// Check if this is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ImportError::NotFound(_))
    }

    /// Check if this is a state-ordering conflict (409)
    pub fn is_conflict(&self) -> bool {
        matches!(self, ImportError::InvalidState(_))
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ImportError::InvalidRequest(_) => "INVALID_REQUEST",
            ImportError::NotFound(_) => "NOT_FOUND",
            ImportError::InvalidState(_) => "INVALID_STATE",
            ImportError::ParseError(_) => "PARSE_ERROR",
            ImportError::FileMissing(_) => "FILE_MISSING",
            ImportError::CommitFailed(_) => "IMPORT_FAILED",
            ImportError::Serialization(_) => "SERIALIZATION_ERROR",
            ImportError::Database(_) => "DATABASE_ERROR",
            ImportError::Io(_) => "IO_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_is_conflict() {
        let err = ImportError::InvalidState("Job must be mapped before validation".to_string());
        assert!(err.is_conflict());
        assert!(!err.is_client_error());
        assert_eq!(err.error_code(), "INVALID_STATE");
        assert_eq!(err.to_string(), "Job must be mapped before validation");
    }

    #[test]
    fn test_not_found() {
        let err = ImportError::NotFound("Import job 42".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Import job 42 not found");
    }

    #[test]
    fn test_parse_error_is_client_error() {
        let err = ImportError::ParseError("no columns detected".to_string());
        assert!(err.is_client_error());
        assert_eq!(err.error_code(), "PARSE_ERROR");
    }
}
