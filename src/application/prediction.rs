//! Prediction service: survey in, score and advice out.
//!
//! This service coordinates:
//! - Required-field checks (name, age)
//! - Encoding through the canonical label tables
//! - Scoring with the frozen artifacts
//! - Rule-based recommendations

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::adapters::artifacts::{
    load_artifacts, ArtifactError, Model, PowerTransformer, Scaler, ScoringArtifacts,
};
use crate::domain::{
    encode, recommend, Feature, FeatureVector, SurveyResponse, WellbeingScore, FEATURE_COUNT,
};
use crate::ports::{FeatureTransform, InferenceError, Regressor};
use crate::WellbeingError;

/// Scores an encoded feature vector with the frozen artifacts.
pub struct Scorer<M, P, S>
where
    M: Regressor,
    P: FeatureTransform,
    S: FeatureTransform,
{
    model: Arc<M>,
    power: Arc<P>,
    scaler: Arc<S>,
}

/// Scorer backed by the JSON artifacts on disk.
pub type ArtifactScorer = Scorer<Model, PowerTransformer, Scaler>;

impl ArtifactScorer {
    /// Wrap freshly loaded artifacts.
    ///
    /// # Errors
    /// Returns `InferenceError::Shape` if the artifact widths disagree.
    pub fn from_artifacts(artifacts: ScoringArtifacts) -> Result<Self, InferenceError> {
        Self::new(
            Arc::new(artifacts.model),
            Arc::new(artifacts.power),
            Arc::new(artifacts.scaler),
        )
    }
}

impl<M, P, S> Scorer<M, P, S>
where
    M: Regressor,
    P: FeatureTransform,
    S: FeatureTransform,
{
    /// Create a scorer, checking each artifact's width against the vector layout.
    ///
    /// # Errors
    /// Returns `InferenceError::Shape` naming the first mismatched artifact.
    pub fn new(model: Arc<M>, power: Arc<P>, scaler: Arc<S>) -> Result<Self, InferenceError> {
        let checks = [
            ("power transform", Feature::POWER_TRANSFORMED.len(), power.width()),
            ("scaler", FEATURE_COUNT, scaler.width()),
            ("model", FEATURE_COUNT, model.width()),
        ];
        for (stage, expected, found) in checks {
            if expected != found {
                return Err(InferenceError::Shape {
                    stage,
                    expected,
                    found,
                });
            }
        }
        Ok(Self {
            model,
            power,
            scaler,
        })
    }

    /// Score one encoded survey.
    ///
    /// The skewed subset is power-transformed and written back in place, the
    /// full vector is scaled, and the model output is rescaled to 1-100.
    ///
    /// # Errors
    /// Returns `InferenceError` if an artifact fails, returns the wrong
    /// number of values, or produces a non-finite value.
    pub fn score(&self, features: &FeatureVector) -> Result<WellbeingScore, InferenceError> {
        let mut row = features.to_vec();

        let subset: Vec<f64> = Feature::POWER_TRANSFORMED
            .iter()
            .map(|f| row[f.index()])
            .collect();
        let transformed = self.power.transform(&subset)?;
        check_output("power transform", subset.len(), &transformed)?;
        for (feature, value) in Feature::POWER_TRANSFORMED.iter().zip(transformed) {
            row[feature.index()] = value;
        }

        let scaled = self.scaler.transform(&row)?;
        check_output("scaler", FEATURE_COUNT, &scaled)?;

        let raw = self.model.predict(&scaled)?;
        if !raw.is_finite() {
            return Err(InferenceError::NonFinite { stage: "model" });
        }

        Ok(WellbeingScore::from_raw(raw))
    }
}

fn check_output(stage: &'static str, expected: usize, values: &[f64]) -> Result<(), InferenceError> {
    if values.len() != expected {
        return Err(InferenceError::Shape {
            stage,
            expected,
            found: values.len(),
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(InferenceError::NonFinite { stage });
    }
    Ok(())
}

/// Outcome of one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub features: FeatureVector,
    pub score: WellbeingScore,
    pub recommendations: Vec<String>,
}

/// Prediction service over the JSON artifacts.
pub type ArtifactPredictionService = PredictionService<Model, PowerTransformer, Scaler>;

impl ArtifactPredictionService {
    /// Load the artifacts in `dir`, or disable prediction with the reason.
    ///
    /// A missing file is expected on a fresh checkout and only warns; a file
    /// that is present but unusable is logged as an error.
    pub fn from_artifact_dir(dir: &Path) -> Self {
        let scorer = load_artifacts(dir).and_then(|artifacts| {
            ArtifactScorer::from_artifacts(artifacts).map_err(|e| ArtifactError::Invalid {
                file: dir.display().to_string(),
                reason: e.to_string(),
            })
        });

        match scorer {
            Ok(scorer) => Self::new(scorer),
            Err(e @ ArtifactError::Missing(_)) => {
                tracing::warn!("Prediction disabled: {e}");
                Self::unavailable(e.to_string())
            }
            Err(e) => {
                tracing::error!("Prediction disabled: {e}");
                Self::unavailable(e.to_string())
            }
        }
    }
}

/// Service for turning survey responses into assessments.
///
/// Holds no scorer when the artifacts could not be loaded; every
/// assessment then fails with `ArtifactMissing` and nothing else runs.
pub struct PredictionService<M, P, S>
where
    M: Regressor,
    P: FeatureTransform,
    S: FeatureTransform,
{
    scorer: Option<Scorer<M, P, S>>,
    unavailable_reason: String,
}

impl<M, P, S> PredictionService<M, P, S>
where
    M: Regressor,
    P: FeatureTransform,
    S: FeatureTransform,
{
    /// Create a service around a ready scorer.
    pub fn new(scorer: Scorer<M, P, S>) -> Self {
        Self {
            scorer: Some(scorer),
            unavailable_reason: String::new(),
        }
    }

    /// Create a service with prediction disabled.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            scorer: None,
            unavailable_reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.scorer.is_some()
    }

    /// Why prediction is disabled, if it is.
    #[must_use]
    pub fn unavailable_reason(&self) -> Option<&str> {
        if self.scorer.is_some() {
            None
        } else {
            Some(&self.unavailable_reason)
        }
    }

    /// Assess one survey response.
    ///
    /// # Errors
    /// - `MissingRequired` for an empty name or a zero age
    /// - `ArtifactMissing` when prediction is disabled
    /// - `Encoding` for answers outside their tables
    /// - `Inference` when scoring fails
    pub fn assess(&self, response: &SurveyResponse) -> Result<Assessment, WellbeingError> {
        if response.name.trim().is_empty() {
            return Err(WellbeingError::MissingRequired("your name".into()));
        }
        if response.age == 0 {
            return Err(WellbeingError::MissingRequired("your age".into()));
        }

        let scorer = self
            .scorer
            .as_ref()
            .ok_or_else(|| WellbeingError::ArtifactMissing(self.unavailable_reason.clone()))?;

        let features = encode(response)?;
        let score = scorer.score(&features).map_err(|e| {
            tracing::error!("Scoring failed: {e}");
            e
        })?;
        let recommendations: Vec<String> =
            recommend(&features).into_iter().map(str::to_string).collect();

        tracing::info!(
            "Assessment complete (verdict={}, recommendations={})",
            score.verdict,
            recommendations.len()
        );

        Ok(Assessment {
            features,
            score,
            recommendations,
        })
    }
}
