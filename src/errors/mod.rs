//! Domain error types for the import pipeline.

pub mod import;

pub use import::ImportError;

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
