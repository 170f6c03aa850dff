//! Regression models exported as JSON: a plain linear model, or a stacking
//! ensemble of linear base estimators with a linear final estimator.

use serde::{Deserialize, Serialize};

use super::transform::check_width;
use crate::ports::{InferenceError, Regressor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearTerms {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearTerms {
    fn apply(&self, row: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(row)
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    Linear {
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    },
    Stacking {
        feature_names: Vec<String>,
        estimators: Vec<LinearTerms>,
        final_estimator: LinearTerms,
        /// Whether the final estimator also sees the original features.
        #[serde(default)]
        passthrough: bool,
    },
}

impl Model {
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        match self {
            Self::Linear { feature_names, .. } | Self::Stacking { feature_names, .. } => {
                feature_names
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::Stacking { .. } => "stacking",
        }
    }

    pub(super) fn validate(&self) -> Result<(), String> {
        let n = self.feature_names().len();
        match self {
            Self::Linear { coefficients, .. } => {
                if coefficients.len() != n {
                    return Err(format!(
                        "{} coefficients for {n} features",
                        coefficients.len()
                    ));
                }
            }
            Self::Stacking {
                estimators,
                final_estimator,
                passthrough,
                ..
            } => {
                if estimators.is_empty() {
                    return Err("stacking model has no base estimators".into());
                }
                if let Some(bad) = estimators.iter().position(|e| e.coefficients.len() != n) {
                    return Err(format!("base estimator {bad} does not match {n} features"));
                }
                let expected = estimators.len() + if *passthrough { n } else { 0 };
                if final_estimator.coefficients.len() != expected {
                    return Err(format!(
                        "final estimator has {} coefficients, expected {expected}",
                        final_estimator.coefficients.len()
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Regressor for Model {
    fn width(&self) -> usize {
        self.feature_names().len()
    }

    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError> {
        check_width("model", self.width(), row)?;
        let y = match self {
            Self::Linear {
                coefficients,
                intercept,
                ..
            } => {
                coefficients
                    .iter()
                    .zip(row)
                    .map(|(c, x)| c * x)
                    .sum::<f64>()
                    + intercept
            }
            Self::Stacking {
                estimators,
                final_estimator,
                passthrough,
                ..
            } => {
                let mut meta: Vec<f64> = estimators.iter().map(|e| e.apply(row)).collect();
                if *passthrough {
                    meta.extend_from_slice(row);
                }
                final_estimator.apply(&meta)
            }
        };
        Ok(y)
    }
}
