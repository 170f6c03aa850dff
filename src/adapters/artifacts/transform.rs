//! Fitted power transformer and scaler exported as JSON.

use serde::{Deserialize, Serialize};

use crate::ports::{FeatureTransform, InferenceError};

/// Lambdas closer to the pole than this take the log branch.
const LAMBDA_EPS: f64 = f64::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerMethod {
    YeoJohnson,
    BoxCox,
}

/// Per-column power transform with optional standardization afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerTransformer {
    pub method: PowerMethod,
    pub feature_names: Vec<String>,
    pub lambdas: Vec<f64>,
    #[serde(default)]
    pub standardize: bool,
    #[serde(default)]
    pub mean: Vec<f64>,
    #[serde(default)]
    pub scale: Vec<f64>,
}

impl PowerTransformer {
    /// Check internal lengths against `feature_names`.
    pub(super) fn validate(&self) -> Result<(), String> {
        let n = self.feature_names.len();
        if self.lambdas.len() != n {
            return Err(format!("lambdas has {} entries, expected {n}", self.lambdas.len()));
        }
        if self.standardize && (self.mean.len() != n || self.scale.len() != n) {
            return Err("standardize requires mean and scale for every feature".into());
        }
        if self.lambdas.iter().any(|l| !l.is_finite()) {
            return Err("lambdas must be finite".into());
        }
        Ok(())
    }
}

/// Yeo-Johnson transform of one value.
#[must_use]
pub fn yeo_johnson(x: f64, lambda: f64) -> f64 {
    if x >= 0.0 {
        if lambda.abs() < LAMBDA_EPS {
            x.ln_1p()
        } else {
            ((x + 1.0).powf(lambda) - 1.0) / lambda
        }
    } else if (lambda - 2.0).abs() < LAMBDA_EPS {
        -(-x).ln_1p()
    } else {
        -((1.0 - x).powf(2.0 - lambda) - 1.0) / (2.0 - lambda)
    }
}

/// Box-Cox transform of one value; undefined for `x <= 0`.
#[must_use]
pub fn box_cox(x: f64, lambda: f64) -> Option<f64> {
    if x <= 0.0 {
        return None;
    }
    Some(if lambda.abs() < LAMBDA_EPS {
        x.ln()
    } else {
        (x.powf(lambda) - 1.0) / lambda
    })
}

impl FeatureTransform for PowerTransformer {
    fn width(&self) -> usize {
        self.feature_names.len()
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError> {
        check_width("power transform", self.width(), row)?;
        row.iter()
            .enumerate()
            .map(|(i, &x)| {
                let lambda = self.lambdas[i];
                let y = match self.method {
                    PowerMethod::YeoJohnson => yeo_johnson(x, lambda),
                    PowerMethod::BoxCox => {
                        box_cox(x, lambda).ok_or_else(|| InferenceError::Failed {
                            stage: "power transform",
                            reason: format!(
                                "box-cox needs positive input, {} is {x}",
                                self.feature_names[i]
                            ),
                        })?
                    }
                };
                Ok(if self.standardize {
                    (y - self.mean[i]) / nonzero(self.scale[i])
                } else {
                    y
                })
            })
            .collect()
    }
}

/// Fitted feature scaler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - mean) / scale`
    Standard {
        feature_names: Vec<String>,
        mean: Vec<f64>,
        scale: Vec<f64>,
    },
    /// `x * scale + min`
    MinMax {
        feature_names: Vec<String>,
        scale: Vec<f64>,
        min: Vec<f64>,
    },
}

impl Scaler {
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        match self {
            Self::Standard { feature_names, .. } | Self::MinMax { feature_names, .. } => {
                feature_names
            }
        }
    }

    pub(super) fn validate(&self) -> Result<(), String> {
        let n = self.feature_names().len();
        let (a, b) = match self {
            Self::Standard { mean, scale, .. } => (mean.len(), scale.len()),
            Self::MinMax { scale, min, .. } => (scale.len(), min.len()),
        };
        if a != n || b != n {
            return Err(format!("scaler parameters do not match {n} feature names"));
        }
        Ok(())
    }
}

impl FeatureTransform for Scaler {
    fn width(&self) -> usize {
        self.feature_names().len()
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError> {
        check_width("scaler", self.width(), row)?;
        let out = match self {
            Self::Standard { mean, scale, .. } => row
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(x, (m, s))| (x - m) / nonzero(*s))
                .collect(),
            Self::MinMax { scale, min, .. } => row
                .iter()
                .zip(scale.iter().zip(min))
                .map(|(x, (s, m))| x * s + m)
                .collect(),
        };
        Ok(out)
    }
}

/// Constant features are fitted with zero scale; divide by one instead.
fn nonzero(scale: f64) -> f64 {
    if scale == 0.0 {
        1.0
    } else {
        scale
    }
}

pub(super) fn check_width(
    stage: &'static str,
    expected: usize,
    row: &[f64],
) -> Result<(), InferenceError> {
    if row.len() == expected {
        Ok(())
    } else {
        Err(InferenceError::Shape {
            stage,
            expected,
            found: row.len(),
        })
    }
}
