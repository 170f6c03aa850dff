//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (artifact files, dataset).

mod artifacts;
mod dataset;

pub use artifacts::{FeatureTransform, InferenceError, Regressor};
pub use dataset::{DatasetError, DatasetSource};
