//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the core use cases of the application.

pub mod eda;
mod prediction;

pub use eda::{CleaningReport, EdaReport, EdaService};
pub use prediction::{
    ArtifactPredictionService, ArtifactScorer, Assessment, PredictionService, Scorer,
};
