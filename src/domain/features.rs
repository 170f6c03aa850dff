//! Model feature identifiers and the encoded feature vector.
//!
//! The feature order below is the contract shared with the persisted power
//! transformer, scaler and regressor. It is not derivable from the artifacts'
//! serialized parameters, so artifact files carry `feature_names` and the
//! loader checks them against [`FEATURE_NAMES`].

use serde::{Deserialize, Serialize};

/// One model input, in model order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    FruitsVeggies,
    DailyStress,
    PlacesVisited,
    CoreCircle,
    SupportingOthers,
    SocialNetwork,
    Achievement,
    Donation,
    BmiRange,
    TodoCompleted,
    Flow,
    DailySteps,
    LiveVision,
    SleepHours,
    LostVacation,
    DailyShouting,
    SufficientIncome,
    PersonalAwards,
    TimeForPassion,
    WeeklyMeditation,
    Age,
    Gender,
}

/// Number of model inputs.
pub const FEATURE_COUNT: usize = 22;

impl Feature {
    /// All features in model order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::FruitsVeggies,
        Feature::DailyStress,
        Feature::PlacesVisited,
        Feature::CoreCircle,
        Feature::SupportingOthers,
        Feature::SocialNetwork,
        Feature::Achievement,
        Feature::Donation,
        Feature::BmiRange,
        Feature::TodoCompleted,
        Feature::Flow,
        Feature::DailySteps,
        Feature::LiveVision,
        Feature::SleepHours,
        Feature::LostVacation,
        Feature::DailyShouting,
        Feature::SufficientIncome,
        Feature::PersonalAwards,
        Feature::TimeForPassion,
        Feature::WeeklyMeditation,
        Feature::Age,
        Feature::Gender,
    ];

    /// The 20 survey questions answered from an ordinal label set.
    pub const ORDINAL: [Feature; 20] = [
        Feature::FruitsVeggies,
        Feature::DailyStress,
        Feature::PlacesVisited,
        Feature::CoreCircle,
        Feature::SupportingOthers,
        Feature::SocialNetwork,
        Feature::Achievement,
        Feature::Donation,
        Feature::BmiRange,
        Feature::TodoCompleted,
        Feature::Flow,
        Feature::DailySteps,
        Feature::LiveVision,
        Feature::SleepHours,
        Feature::LostVacation,
        Feature::DailyShouting,
        Feature::SufficientIncome,
        Feature::PersonalAwards,
        Feature::TimeForPassion,
        Feature::WeeklyMeditation,
    ];

    /// Skewed features passed through the power transform, in transformer order.
    pub const POWER_TRANSFORMED: [Feature; 7] = [
        Feature::Achievement,
        Feature::Flow,
        Feature::LiveVision,
        Feature::LostVacation,
        Feature::DailyShouting,
        Feature::SufficientIncome,
        Feature::TimeForPassion,
    ];

    /// Position in the model vector.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name used by the dataset and the artifact files.
    #[must_use]
    pub fn name(self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }

    /// Look a feature up by its column name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Self::ALL[i])
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Feature names in model order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "FRUITS_VEGGIES",
    "DAILY_STRESS",
    "PLACES_VISITED",
    "CORE_CIRCLE",
    "SUPPORTING_OTHERS",
    "SOCIAL_NETWORK",
    "ACHIEVEMENT",
    "DONATION",
    "BMI_RANGE",
    "TODO_COMPLETED",
    "FLOW",
    "DAILY_STEPS",
    "LIVE_VISION",
    "SLEEP_HOURS",
    "LOST_VACATION",
    "DAILY_SHOUTING",
    "SUFFICIENT_INCOME",
    "PERSONAL_AWARDS",
    "TIME_FOR_PASSION",
    "WEEKLY_MEDITATION",
    "AGE",
    "GENDER",
];

/// Encoded survey: one integer level per feature, in model order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [i64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Build a vector from raw levels in model order.
    #[must_use]
    pub fn from_levels(values: [i64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn get(&self, feature: Feature) -> i64 {
        self.values[feature.index()]
    }

    pub fn set(&mut self, feature: Feature, level: i64) {
        self.values[feature.index()] = level;
    }

    /// Levels in model order.
    #[must_use]
    pub fn levels(&self) -> &[i64; FEATURE_COUNT] {
        &self.values
    }

    /// Convert to floats for the numeric artifacts.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().map(|&v| v as f64).collect()
    }

    /// (name, level) pairs in model order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}
