//! Domain layer: Core survey, scoring and dataset types.
//!
//! Pure Rust types with no I/O. Lookup tables and rules are static data.

mod features;
mod recommend;
mod score;
pub mod stats;
mod survey;
mod tips;

pub use features::{Feature, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use recommend::{recommend, Rule, Threshold, RULES};
pub use score::{rescale, Verdict, WellbeingScore};
pub use survey::{
    age_bracket, encode, table_for, AgeBracket, EncodingError, LabelTable, SurveyResponse,
    GENDERS, QUESTIONS, QUESTION_COUNT,
};
pub use tips::{TipDeck, DAILY_REMINDERS, TIPS};
