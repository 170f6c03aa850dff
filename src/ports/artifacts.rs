//! Artifact ports: Traits for the frozen, pre-fitted scoring artifacts.
//!
//! The scorer only ever sees these traits, so tests can swap in stubs and
//! the on-disk format stays an adapter concern.

/// Errors raised while running artifacts on a feature vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("{stage} expected {expected} values, got {found}")]
    Shape {
        stage: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{stage} produced a non-finite value")]
    NonFinite { stage: &'static str },

    #[error("{stage} failed: {reason}")]
    Failed { stage: &'static str, reason: String },
}

/// A fitted element-wise transform (power transform or scaler).
pub trait FeatureTransform: Send + Sync {
    /// Number of values this transform was fitted on.
    fn width(&self) -> usize;

    /// Transform one row.
    ///
    /// # Errors
    /// Returns `InferenceError` when the row has the wrong width or the
    /// transform is undefined for an input.
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError>;
}

/// A fitted single-output regression model.
pub trait Regressor: Send + Sync {
    /// Number of input features.
    fn width(&self) -> usize;

    /// Predict the raw target for one row.
    ///
    /// # Errors
    /// Returns `InferenceError` when the row has the wrong width.
    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError>;
}
