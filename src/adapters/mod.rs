//! Adapters layer: Concrete implementations of ports.
//!
//! - `artifacts`: JSON scoring artifacts with SHA-256 manifest checks
//! - `csv_dataset`: CSV reader for the survey dataset
//! - `sanitize`: PII filtering for logs

pub mod artifacts;
pub mod csv_dataset;
pub mod sanitize;

pub use artifacts::{load_artifacts, ArtifactError, ScoringArtifacts};
pub use csv_dataset::CsvDataset;
