//! Work-life balance score and verdict bands.

use serde::{Deserialize, Serialize};

/// Raw model output range the display scale is anchored to.
pub const RAW_MIN: f64 = 480.0;
pub const RAW_MAX: f64 = 780.0;

/// Display scale.
pub const DISPLAY_MIN: f64 = 1.0;
pub const DISPLAY_MAX: f64 = 100.0;

/// Verdict thresholds on the display scale.
pub const GOOD_THRESHOLD: f64 = 50.0;
pub const EXCELLENT_THRESHOLD: f64 = 80.0;

/// Map a raw model prediction onto the 1-100 display scale.
///
/// Not clamped: predictions outside [480, 780] land outside [1, 100].
#[must_use]
pub fn rescale(raw: f64) -> f64 {
    (raw - RAW_MIN) / (RAW_MAX - RAW_MIN) * (DISPLAY_MAX - DISPLAY_MIN) + DISPLAY_MIN
}

/// Qualitative band for a display score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Below 50
    Poor,
    /// 50 to 80 inclusive
    Good,
    /// Above 80
    Excellent,
}

impl Verdict {
    /// Classify a display score. Both thresholds belong to `Good`.
    #[must_use]
    pub fn classify(display: f64) -> Self {
        if display < GOOD_THRESHOLD {
            Self::Poor
        } else if display <= EXCELLENT_THRESHOLD {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    /// Banner headline.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Poor => "Poor Quality of Life",
            Self::Good => "Good Quality of Life",
            Self::Excellent => "Excellent Quality of Life",
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Poor => "Your well-being score is low. Consider reviewing the recommendations below to improve your lifestyle.",
            Self::Good => "You're doing fairly well! But there's still room to grow. Check the suggestions to optimize your well-being.",
            Self::Excellent => "Great job! You're maintaining a very healthy and balanced lifestyle. Keep it up!",
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Poor => (244, 63, 94),       // Rose (#F43F5E)
            Self::Good => (251, 191, 36),      // Amber (#FBBF24)
            Self::Excellent => (16, 185, 129), // Emerald (#10B981)
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poor => write!(f, "POOR"),
            Self::Good => write!(f, "GOOD"),
            Self::Excellent => write!(f, "EXCELLENT"),
        }
    }
}

/// Scored survey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellbeingScore {
    /// Model output before rescaling
    pub raw: f64,
    /// Rescaled 1-100 score
    pub display: f64,
    pub verdict: Verdict,
}

impl WellbeingScore {
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        let display = rescale(raw);
        Self {
            raw,
            display,
            verdict: Verdict::classify(display),
        }
    }
}
