pub mod commit_service;
pub mod import_job_service;
pub mod importers;
pub mod validation_service;
pub mod venture_resolver;

pub use commit_service::{CommitReport, CommitService};
pub use import_job_service::{ImportJobService, MappingSummary, SetMappingRequest, UploadReport};
pub use validation_service::{ValidationReport, ValidationService};
pub use venture_resolver::{DbVentureResolver, FixedVentureResolver, VentureResolver};
