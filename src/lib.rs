//! # Wellbeing
//!
//! Work-life balance scoring and wellbeing dataset exploration.
//!
//! This crate provides:
//! - Survey encoding through fixed ordinal lookup tables
//! - Scoring with frozen, pre-fitted artifacts (power transform, scaler, regressor)
//! - Rule-based lifestyle recommendations
//! - Exploratory analysis over the wellbeing CSV dataset
//! - Terminal UI for local, single-user use
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (survey tables, feature vector, score, rules, statistic types)
//! - `ports`: Trait definitions for the frozen artifacts and the dataset source
//! - `adapters`: Concrete implementations (JSON artifacts, polars CSV reader, log sanitizer)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{FeatureVector, SurveyResponse, Verdict, WellbeingScore};

/// Result type for Wellbeing operations
pub type Result<T> = std::result::Result<T, WellbeingError>;

/// Main error type for Wellbeing
#[derive(Debug, thiserror::Error)]
pub enum WellbeingError {
    #[error("Prediction unavailable: {0}")]
    ArtifactMissing(String),

    #[error("Invalid survey answer: {0}")]
    Encoding(#[from] domain::EncodingError),

    #[error("Inference failed: {0}")]
    Inference(#[from] ports::InferenceError),

    #[error("Please fill in {0} before predicting")]
    MissingRequired(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] ports::DatasetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
