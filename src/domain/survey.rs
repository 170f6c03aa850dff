//! Lifestyle survey: canonical label tables and the ordinal encoder.
//!
//! Every question has exactly one table. The survey form renders its choices
//! from these tables and the encoder looks answers up in the same tables, so
//! label order in the UI cannot drift from the codes the model was fitted on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::features::{Feature, FeatureVector, FEATURE_COUNT};

/// One survey question with its ordered (label, code) choices.
#[derive(Debug, Clone, Copy)]
pub struct LabelTable {
    pub feature: Feature,
    pub prompt: &'static str,
    pub help: Option<&'static str>,
    pub options: &'static [(&'static str, i64)],
}

impl LabelTable {
    /// Code for a label, if the label belongs to this table.
    #[must_use]
    pub fn code(&self, label: &str) -> Option<i64> {
        self.options
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, code)| *code)
    }

    /// Labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|(l, _)| *l)
    }
}

/// Errors raised while encoding a survey response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("{field}: '{value}' is not one of the allowed answers")]
    UnknownLabel { field: String, value: String },

    #[error("{field}: no answer given")]
    MissingAnswer { field: String },

    #[error("AGE: {value} is outside the supported range [0, 80]")]
    InvalidAge { value: i64 },
}

const FRUITS_VEGGIES: &[(&str, i64)] = &[
    ("never (0 servings)", 0),
    ("Almost never (1 servings)", 1),
    ("Rarely (2 serving)", 2),
    ("Occasionally (3 servings)", 3),
    ("Often (4 servings)", 4),
    ("Very often (5 or more servings)", 5),
];

const DAILY_STRESS: &[(&str, i64)] = &[
    ("Not at all stressful", 0),
    ("Slightly stressful", 1),
    ("Somewhat stressful", 2),
    ("Moderately stressful", 3),
    ("Very stressful", 4),
    ("Extremely stressful", 5),
];

const PLACES_VISITED: &[(&str, i64)] = &[
    ("never", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("More than 10", 10),
];

const CORE_CIRCLE: &[(&str, i64)] = &[
    ("No one", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("Large close circle", 10),
];

const SUPPORTING_OTHERS: &[(&str, i64)] = &[
    ("never", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("Many people (more than 10)", 10),
];

const SOCIAL_NETWORK: &[(&str, i64)] = &[
    ("No interactions at all", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("A Lot of interactions", 10),
];

const ACHIEVEMENT: &[(&str, i64)] = &[
    ("No achievements", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("Many achievements (more than 10)", 10),
];

const DONATION: &[(&str, i64)] = &[
    ("Never", 0),
    ("Almost never", 1),
    ("Rarely", 2),
    ("Often", 3),
    ("Very often", 4),
    ("Always", 5),
];

// Dataset codes for BMI and income start at 1.
const BMI_RANGE: &[(&str, i64)] = &[
    ("Underweight to normal weight (less than 18.5 until 24.9)", 1),
    ("Overweight to obesity (25 until 29.9 or more)", 2),
];

const TODO_COMPLETED: &[(&str, i64)] = &[
    ("never", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("Always (10)", 10),
];

const ZERO_TO_TEN_PLUS: &[(&str, i64)] = &[
    ("never", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("More than 10", 10),
];

const DAILY_STEPS: &[(&str, i64)] = &[
    ("None", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("More than 10", 10),
];

const LIVE_VISION: &[(&str, i64)] = &[
    ("No clarity beyond today", 0),
    ("few weeks", 1),
    ("1 months", 2),
    ("2-3 month", 3),
    ("6 months", 4),
    ("1 year", 5),
    ("2 years", 6),
    ("3–5 years", 7),
    ("6–9 years", 8),
    ("9–10 years", 9),
    ("More than 10 years", 10),
];

const SLEEP_HOURS: &[(&str, i64)] = &[
    ("Not sleeping at all", 0),
    ("1 hours", 1),
    ("2 hours", 2),
    ("3 hours", 3),
    ("4 hours", 4),
    ("5 hours", 5),
    ("6 hours", 6),
    ("7 hours", 7),
    ("8 hours", 8),
    ("9 hours", 9),
    ("More than 9 hours", 10),
];

const LOST_VACATION: &[(&str, i64)] = &[
    ("0 day", 0),
    ("1 day", 1),
    ("2 days", 2),
    ("3 days", 3),
    ("4-5 days", 4),
    ("6-7 days", 5),
    ("8-9 days", 6),
    ("10-12 days", 7),
    ("13-15 days", 8),
    ("14-16 days", 9),
    ("more than 16 days", 10),
];

const DAILY_SHOUTING: &[(&str, i64)] = &[
    ("Never", 0),
    ("Almost never shout or sulk", 1),
    ("Very rarely (a few times a year)", 2),
    ("Rarely (once a month or less)", 3),
    ("Occasionally (2–3 times a month)", 4),
    ("Sometimes (about once a week)", 5),
    ("Fairly often (2–3 times a week)", 6),
    ("Often (4–5 times a week)", 7),
    ("Very often (nearly every day)", 8),
    ("Almost always (multiple times daily)", 9),
    ("Constantly shout or sulk", 10),
];

const SUFFICIENT_INCOME: &[(&str, i64)] = &[("Sufficient", 1), ("Not sufficient", 2)];

const PERSONAL_AWARDS: &[(&str, i64)] = &[
    ("none", 0),
    ("1", 1),
    ("2", 2),
    ("3-5", 3),
    ("6-9", 4),
    ("10-14", 5),
    ("15-19", 6),
    ("20-24", 7),
    ("25-29", 8),
    ("30-35", 9),
    ("more than 35", 10),
];

/// Number of ordinal questions.
pub const QUESTION_COUNT: usize = 20;

/// The ordinal questions, in form order (which is also model order).
pub static QUESTIONS: [LabelTable; QUESTION_COUNT] = [
    LabelTable {
        feature: Feature::FruitsVeggies,
        prompt: "How many fruits or vegetables do you eat every day?",
        help: None,
        options: FRUITS_VEGGIES,
    },
    LabelTable {
        feature: Feature::DailyStress,
        prompt: "How much stress do you typically experience every day?",
        help: None,
        options: DAILY_STRESS,
    },
    LabelTable {
        feature: Feature::PlacesVisited,
        prompt: "How many new places do you visit in a month?",
        help: None,
        options: PLACES_VISITED,
    },
    LabelTable {
        feature: Feature::CoreCircle,
        prompt: "How many people are very close to you?",
        help: None,
        options: CORE_CIRCLE,
    },
    LabelTable {
        feature: Feature::SupportingOthers,
        prompt: "How many people do you help achieve a better life?",
        help: None,
        options: SUPPORTING_OTHERS,
    },
    LabelTable {
        feature: Feature::SocialNetwork,
        prompt: "With how many people do you interact during the day?",
        help: None,
        options: SOCIAL_NETWORK,
    },
    LabelTable {
        feature: Feature::Achievement,
        prompt: "How many remarkable achievements are you proud of?",
        help: None,
        options: ACHIEVEMENT,
    },
    LabelTable {
        feature: Feature::Donation,
        prompt: "How often do you donate your time or money to good causes?",
        help: None,
        options: DONATION,
    },
    LabelTable {
        feature: Feature::BmiRange,
        prompt: "What is your body mass index (BMI) range?",
        help: None,
        options: BMI_RANGE,
    },
    LabelTable {
        feature: Feature::TodoCompleted,
        prompt: "How well do you complete your weekly to-do lists?",
        help: None,
        options: TODO_COMPLETED,
    },
    LabelTable {
        feature: Feature::Flow,
        prompt: "In a typical day, how many hours do you experience 'flow'?",
        help: Some("Flow is a state of total immersion in an activity, often called being in the zone."),
        options: ZERO_TO_TEN_PLUS,
    },
    LabelTable {
        feature: Feature::DailySteps,
        prompt: "How many steps do you walk in a day?",
        help: Some("Measured in thousands of steps."),
        options: DAILY_STEPS,
    },
    LabelTable {
        feature: Feature::LiveVision,
        prompt: "How far ahead is your life vision very clear?",
        help: None,
        options: LIVE_VISION,
    },
    LabelTable {
        feature: Feature::SleepHours,
        prompt: "About how long do you typically sleep each night?",
        help: Some("Measured in hours."),
        options: SLEEP_HOURS,
    },
    LabelTable {
        feature: Feature::LostVacation,
        prompt: "How many vacation days do you typically lose every year?",
        help: Some("Measured in days."),
        options: LOST_VACATION,
    },
    LabelTable {
        feature: Feature::DailyShouting,
        prompt: "How often do you shout or sulk?",
        help: None,
        options: DAILY_SHOUTING,
    },
    LabelTable {
        feature: Feature::SufficientIncome,
        prompt: "Is your income sufficient to cover your basic life expenses?",
        help: None,
        options: SUFFICIENT_INCOME,
    },
    LabelTable {
        feature: Feature::PersonalAwards,
        prompt: "How many personal awards or recognitions have you received?",
        help: Some("Any formal or informal acknowledgement: awards, certificates, public praise."),
        options: PERSONAL_AWARDS,
    },
    LabelTable {
        feature: Feature::TimeForPassion,
        prompt: "How many hours do you spend every day on your passion?",
        help: Some("Measured in hours."),
        options: ZERO_TO_TEN_PLUS,
    },
    LabelTable {
        feature: Feature::WeeklyMeditation,
        prompt: "How many times do you meditate in a week?",
        help: None,
        options: ZERO_TO_TEN_PLUS,
    },
];

/// Gender choices and their codes.
pub const GENDERS: [(&str, i64); 3] = [("Male", 0), ("Female", 1), ("Other", 2)];

/// Table for an ordinal question.
#[must_use]
pub fn table_for(feature: Feature) -> Option<&'static LabelTable> {
    QUESTIONS.iter().find(|t| t.feature == feature)
}

/// Age range used by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    UpTo20,
    From21To35,
    From36To50,
    From51To80,
}

impl AgeBracket {
    /// Bucket an age in years. Ages outside [0, 80] have no bracket.
    #[must_use]
    pub fn classify(age: i64) -> Option<Self> {
        match age {
            0..=20 => Some(Self::UpTo20),
            21..=35 => Some(Self::From21To35),
            36..=50 => Some(Self::From36To50),
            51..=80 => Some(Self::From51To80),
            _ => None,
        }
    }

    #[must_use]
    pub fn level(self) -> i64 {
        match self {
            Self::UpTo20 => 0,
            Self::From21To35 => 1,
            Self::From36To50 => 2,
            Self::From51To80 => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo20 => "Less than 20",
            Self::From21To35 => "21 to 35",
            Self::From36To50 => "36 to 50",
            Self::From51To80 => "51 or more",
        }
    }
}

/// One user's survey answers.
///
/// `name` is display-only: it is not encoded and must never be logged.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub name: String,
    pub age: i64,
    pub gender: String,
    #[serde(default)]
    pub answers: BTreeMap<Feature, String>,
}

impl std::fmt::Debug for SurveyResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurveyResponse")
            .field("name", &"<redacted>")
            .field("age", &self.age)
            .field("gender", &self.gender)
            .field("answers", &self.answers)
            .finish()
    }
}

impl SurveyResponse {
    /// Set the answer for one question.
    pub fn answer(&mut self, feature: Feature, label: impl Into<String>) {
        self.answers.insert(feature, label.into());
    }
}

/// Age bracket for a raw age, or `InvalidAge` outside [0, 80].
pub fn age_bracket(age: i64) -> Result<AgeBracket, EncodingError> {
    AgeBracket::classify(age).ok_or(EncodingError::InvalidAge { value: age })
}

/// Encode a survey response into the model's feature vector.
///
/// # Errors
/// Returns `EncodingError` on the first answer that is missing or outside its
/// table, or when the age has no bracket.
pub fn encode(response: &SurveyResponse) -> Result<FeatureVector, EncodingError> {
    let mut levels = [0i64; FEATURE_COUNT];

    for table in QUESTIONS.iter() {
        let field = table.feature.name();
        let label = response
            .answers
            .get(&table.feature)
            .ok_or_else(|| EncodingError::MissingAnswer {
                field: field.to_string(),
            })?;
        levels[table.feature.index()] =
            table.code(label).ok_or_else(|| EncodingError::UnknownLabel {
                field: field.to_string(),
                value: label.clone(),
            })?;
    }

    let bracket = age_bracket(response.age)?;
    levels[Feature::Age.index()] = bracket.level();

    levels[Feature::Gender.index()] = GENDERS
        .iter()
        .find(|(label, _)| *label == response.gender)
        .map(|(_, code)| *code)
        .ok_or_else(|| EncodingError::UnknownLabel {
            field: Feature::Gender.name().to_string(),
            value: response.gender.clone(),
        })?;

    Ok(FeatureVector::from_levels(levels))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A response answering every question with its first label.
    fn baseline() -> SurveyResponse {
        let mut r = SurveyResponse {
            name: "Ada".into(),
            age: 30,
            gender: "Female".into(),
            answers: BTreeMap::new(),
        };
        for table in QUESTIONS.iter() {
            r.answer(table.feature, table.options[0].0);
        }
        r
    }

    /// `first`=0, "1".."9" = 1..9, `last`=10.
    fn zero_to_ten(first: &str, last: &str) -> Vec<(String, i64)> {
        let mut out = vec![(first.to_string(), 0)];
        out.extend((1..=9).map(|n| (n.to_string(), n)));
        out.push((last.to_string(), 10));
        out
    }

    fn owned(pairs: &[(&str, i64)]) -> Vec<(String, i64)> {
        pairs.iter().map(|(l, c)| ((*l).to_string(), *c)).collect()
    }

    /// Codes the model was fitted on, written out independently of the
    /// lookup tables.
    fn fitted_codes(feature: Feature) -> Vec<(String, i64)> {
        match feature {
            Feature::FruitsVeggies => owned(&[
                ("never (0 servings)", 0),
                ("Almost never (1 servings)", 1),
                ("Rarely (2 serving)", 2),
                ("Occasionally (3 servings)", 3),
                ("Often (4 servings)", 4),
                ("Very often (5 or more servings)", 5),
            ]),
            Feature::DailyStress => owned(&[
                ("Not at all stressful", 0),
                ("Slightly stressful", 1),
                ("Somewhat stressful", 2),
                ("Moderately stressful", 3),
                ("Very stressful", 4),
                ("Extremely stressful", 5),
            ]),
            Feature::PlacesVisited => zero_to_ten("never", "More than 10"),
            Feature::CoreCircle => zero_to_ten("No one", "Large close circle"),
            Feature::SupportingOthers => zero_to_ten("never", "Many people (more than 10)"),
            Feature::SocialNetwork => zero_to_ten("No interactions at all", "A Lot of interactions"),
            Feature::Achievement => zero_to_ten("No achievements", "Many achievements (more than 10)"),
            Feature::Donation => owned(&[
                ("Never", 0),
                ("Almost never", 1),
                ("Rarely", 2),
                ("Often", 3),
                ("Very often", 4),
                ("Always", 5),
            ]),
            Feature::BmiRange => owned(&[
                ("Underweight to normal weight (less than 18.5 until 24.9)", 1),
                ("Overweight to obesity (25 until 29.9 or more)", 2),
            ]),
            Feature::TodoCompleted => zero_to_ten("never", "Always (10)"),
            Feature::Flow => zero_to_ten("never", "More than 10"),
            Feature::DailySteps => zero_to_ten("None", "More than 10"),
            Feature::LiveVision => owned(&[
                ("No clarity beyond today", 0),
                ("few weeks", 1),
                ("1 months", 2),
                ("2-3 month", 3),
                ("6 months", 4),
                ("1 year", 5),
                ("2 years", 6),
                ("3–5 years", 7),
                ("6–9 years", 8),
                ("9–10 years", 9),
                ("More than 10 years", 10),
            ]),
            Feature::SleepHours => {
                let mut out = vec![("Not sleeping at all".to_string(), 0)];
                out.extend((1..=9).map(|n| (format!("{n} hours"), n)));
                out.push(("More than 9 hours".to_string(), 10));
                out
            }
            Feature::LostVacation => owned(&[
                ("0 day", 0),
                ("1 day", 1),
                ("2 days", 2),
                ("3 days", 3),
                ("4-5 days", 4),
                ("6-7 days", 5),
                ("8-9 days", 6),
                ("10-12 days", 7),
                ("13-15 days", 8),
                ("14-16 days", 9),
                ("more than 16 days", 10),
            ]),
            Feature::DailyShouting => owned(&[
                ("Never", 0),
                ("Almost never shout or sulk", 1),
                ("Very rarely (a few times a year)", 2),
                ("Rarely (once a month or less)", 3),
                ("Occasionally (2–3 times a month)", 4),
                ("Sometimes (about once a week)", 5),
                ("Fairly often (2–3 times a week)", 6),
                ("Often (4–5 times a week)", 7),
                ("Very often (nearly every day)", 8),
                ("Almost always (multiple times daily)", 9),
                ("Constantly shout or sulk", 10),
            ]),
            Feature::SufficientIncome => owned(&[("Sufficient", 1), ("Not sufficient", 2)]),
            Feature::PersonalAwards => owned(&[
                ("none", 0),
                ("1", 1),
                ("2", 2),
                ("3-5", 3),
                ("6-9", 4),
                ("10-14", 5),
                ("15-19", 6),
                ("20-24", 7),
                ("25-29", 8),
                ("30-35", 9),
                ("more than 35", 10),
            ]),
            Feature::TimeForPassion => zero_to_ten("never", "More than 10"),
            Feature::WeeklyMeditation => zero_to_ten("never", "More than 10"),
            Feature::Age | Feature::Gender => Vec::new(),
        }
    }

    #[test]
    fn test_every_label_encodes_to_its_fitted_code() {
        for feature in Feature::ORDINAL {
            let expected = fitted_codes(feature);
            let table = table_for(feature).expect("ordinal feature has a table");
            assert_eq!(
                table.labels().collect::<Vec<_>>(),
                expected.iter().map(|(l, _)| l.as_str()).collect::<Vec<_>>(),
                "{feature} labels"
            );
            for (label, code) in &expected {
                let mut r = baseline();
                r.answer(feature, label.as_str());
                let v = encode(&r).expect("fitted label must encode");
                assert_eq!(v.get(feature), *code, "{feature} / {label}");
            }
        }
    }

    #[test]
    fn test_tables_are_unique_and_ordered() {
        for table in QUESTIONS.iter() {
            let codes: Vec<i64> = table.options.iter().map(|(_, c)| *c).collect();
            assert!(codes.windows(2).all(|w| w[0] < w[1]), "{}", table.feature);
            let mut labels: Vec<&str> = table.labels().collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), table.options.len(), "{}", table.feature);
        }
        let features: Vec<Feature> = QUESTIONS.iter().map(|t| t.feature).collect();
        assert_eq!(features, Feature::ORDINAL.to_vec());
    }

    #[test]
    fn test_documented_codes() {
        let stress = table_for(Feature::DailyStress).expect("stress table");
        assert_eq!(stress.code("Not at all stressful"), Some(0));
        assert_eq!(stress.code("Extremely stressful"), Some(5));
        let bmi = table_for(Feature::BmiRange).expect("bmi table");
        assert_eq!(bmi.options.first().map(|o| o.1), Some(1));
        let income = table_for(Feature::SufficientIncome).expect("income table");
        assert_eq!(income.code("Not sufficient"), Some(2));
        let vacation = table_for(Feature::LostVacation).expect("vacation table");
        assert_eq!(vacation.code("6-7 days"), Some(5));
        assert_eq!(vacation.code("more than 16 days"), Some(10));
    }

    #[test]
    fn test_unknown_label_fails() {
        let mut r = baseline();
        r.answer(Feature::DailyStress, "Somewhat relaxed");
        assert_eq!(
            encode(&r),
            Err(EncodingError::UnknownLabel {
                field: "DAILY_STRESS".into(),
                value: "Somewhat relaxed".into(),
            })
        );
    }

    #[test]
    fn test_labels_do_not_leak_across_tables() {
        // "Always (10)" belongs to the to-do table only.
        let mut r = baseline();
        r.answer(Feature::Flow, "Always (10)");
        assert!(matches!(
            encode(&r),
            Err(EncodingError::UnknownLabel { ref field, .. }) if field == "FLOW"
        ));
    }

    #[test]
    fn test_missing_answer_fails() {
        let mut r = baseline();
        r.answers.remove(&Feature::WeeklyMeditation);
        assert_eq!(
            encode(&r),
            Err(EncodingError::MissingAnswer {
                field: "WEEKLY_MEDITATION".into()
            })
        );
    }

    #[test]
    fn test_gender_codes() {
        for (label, code) in GENDERS {
            let mut r = baseline();
            r.gender = label.into();
            assert_eq!(encode(&r).expect("encode").get(Feature::Gender), code);
        }
        let mut r = baseline();
        r.gender = "male".into();
        assert!(matches!(encode(&r), Err(EncodingError::UnknownLabel { .. })));
    }

    #[test]
    fn test_age_brackets_cover_zero_to_eighty() {
        for age in 0..=80 {
            let expected = if age <= 20 {
                0
            } else if age <= 35 {
                1
            } else if age <= 50 {
                2
            } else {
                3
            };
            let bracket = AgeBracket::classify(age).expect("age in range");
            assert_eq!(bracket.level(), expected, "age {age}");

            let mut r = baseline();
            r.age = age;
            assert_eq!(encode(&r).expect("encode").get(Feature::Age), expected);
        }
        assert_eq!(AgeBracket::classify(20).map(AgeBracket::label), Some("Less than 20"));
        assert_eq!(AgeBracket::classify(51).map(AgeBracket::label), Some("51 or more"));
    }

    #[test]
    fn test_age_out_of_range_fails() {
        for age in [-1, 81, 120, i64::MIN] {
            assert_eq!(AgeBracket::classify(age), None);
            let mut r = baseline();
            r.age = age;
            assert_eq!(encode(&r), Err(EncodingError::InvalidAge { value: age }));
        }
    }

    #[test]
    fn test_debug_redacts_name() {
        let r = baseline();
        let debug = format!("{r:?}");
        assert!(!debug.contains("Ada"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_response_from_json() {
        let json = r#"{
            "name": "Sam",
            "age": 42,
            "gender": "Other",
            "answers": { "DAILY_STRESS": "Very stressful" }
        }"#;
        let r: SurveyResponse = serde_json::from_str(json).expect("parse");
        assert_eq!(r.answers.get(&Feature::DailyStress).map(String::as_str), Some("Very stressful"));
        assert!(matches!(encode(&r), Err(EncodingError::MissingAnswer { .. })));
    }
}
