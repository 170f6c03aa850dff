//! Threshold rules turning an encoded survey into lifestyle advice.

use super::features::{Feature, FeatureVector};

/// Comparison a rule applies to one feature level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    AtLeast(i64),
    Below(i64),
    Above(i64),
    Equals(i64),
}

impl Threshold {
    #[must_use]
    pub fn matches(self, level: i64) -> bool {
        match self {
            Self::AtLeast(t) => level >= t,
            Self::Below(t) => level < t,
            Self::Above(t) => level > t,
            Self::Equals(t) => level == t,
        }
    }
}

/// One independent advisory rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub feature: Feature,
    pub threshold: Threshold,
    pub advice: &'static str,
}

/// Rules in display order.
pub static RULES: [Rule; 20] = [
    Rule {
        feature: Feature::DailyStress,
        threshold: Threshold::AtLeast(3),
        advice: "High stress level detected. Consider stress-reducing activities like deep breathing, journaling, or nature walks.",
    },
    Rule {
        feature: Feature::DailyStress,
        threshold: Threshold::AtLeast(5),
        advice: "Your stress level is very high. Seek support from a therapist or mental health professional.",
    },
    Rule {
        feature: Feature::SleepHours,
        threshold: Threshold::Below(4),
        advice: "You're likely sleep-deprived. Aim for at least 7-8 hours of quality sleep.",
    },
    Rule {
        feature: Feature::FruitsVeggies,
        threshold: Threshold::Below(2),
        advice: "Try to increase your intake of fruits and vegetables. They're vital for energy and mood.",
    },
    Rule {
        feature: Feature::DailySteps,
        threshold: Threshold::Below(3),
        advice: "You're not walking much. Try to reach 6,000-10,000 steps per day for better health.",
    },
    Rule {
        feature: Feature::WeeklyMeditation,
        threshold: Threshold::Below(2),
        advice: "Consider meditating a few times a week. It can boost focus and emotional well-being.",
    },
    Rule {
        feature: Feature::TimeForPassion,
        threshold: Threshold::Below(3),
        advice: "Try to spend more time on your hobbies or passions to enhance life satisfaction.",
    },
    Rule {
        feature: Feature::SocialNetwork,
        threshold: Threshold::Below(3),
        advice: "Low social interaction detected. Connecting with people can improve your happiness and health.",
    },
    Rule {
        feature: Feature::CoreCircle,
        threshold: Threshold::Below(2),
        advice: "Building deeper connections with people can increase your emotional support network.",
    },
    Rule {
        feature: Feature::SupportingOthers,
        threshold: Threshold::Below(2),
        advice: "Helping others can give you purpose and boost your self-esteem. Try small acts of kindness.",
    },
    Rule {
        feature: Feature::LiveVision,
        threshold: Threshold::Below(3),
        advice: "Consider clarifying your life goals. A clear vision can provide direction and motivation.",
    },
    Rule {
        feature: Feature::TodoCompleted,
        threshold: Threshold::Below(3),
        advice: "You might benefit from better planning or routine. Try setting smaller, achievable goals.",
    },
    Rule {
        feature: Feature::Achievement,
        threshold: Threshold::Below(2),
        advice: "Celebrate small wins and keep setting personal goals to build a sense of accomplishment.",
    },
    Rule {
        feature: Feature::Donation,
        threshold: Threshold::Below(2),
        advice: "Donating time or money to causes you care about can give a sense of purpose and fulfillment.",
    },
    Rule {
        feature: Feature::BmiRange,
        threshold: Threshold::Equals(2),
        advice: "You may be in an overweight category. A balanced diet and regular exercise can help.",
    },
    Rule {
        feature: Feature::LostVacation,
        threshold: Threshold::Above(5),
        advice: "You're losing too many vacation days. Taking time off helps restore energy and mental clarity.",
    },
    Rule {
        feature: Feature::DailyShouting,
        threshold: Threshold::Above(5),
        advice: "Frequent shouting might indicate unresolved tension. Consider talking to someone or journaling.",
    },
    Rule {
        feature: Feature::SufficientIncome,
        threshold: Threshold::Equals(2),
        advice: "Financial stress affects well-being. Look into budgeting or financial planning help.",
    },
    Rule {
        feature: Feature::PersonalAwards,
        threshold: Threshold::Below(2),
        advice: "You might benefit from setting goals that lead to recognition or feedback for your efforts.",
    },
    Rule {
        feature: Feature::Flow,
        threshold: Threshold::Below(3),
        advice: "Try finding activities where you lose track of time. 'Flow' moments are deeply fulfilling.",
    },
];

/// Advice triggered by a feature vector, in rule order. Empty when nothing fires.
#[must_use]
pub fn recommend(features: &FeatureVector) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| rule.threshold.matches(features.get(rule.feature)))
        .map(|rule| rule.advice)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::FEATURE_COUNT;

    /// A vector that triggers no rule.
    fn healthy() -> FeatureVector {
        let mut v = FeatureVector::from_levels([5; FEATURE_COUNT]);
        v.set(Feature::DailyStress, 1);
        v.set(Feature::BmiRange, 1);
        v.set(Feature::SufficientIncome, 1);
        v.set(Feature::LostVacation, 0);
        v.set(Feature::DailyShouting, 0);
        v
    }

    #[test]
    fn test_healthy_vector_gets_no_advice() {
        assert!(recommend(&healthy()).is_empty());
    }

    #[test]
    fn test_stress_three_triggers_only_high_stress() {
        let mut v = healthy();
        v.set(Feature::DailyStress, 3);
        assert_eq!(recommend(&v), vec![RULES[0].advice]);
    }

    #[test]
    fn test_stress_five_triggers_both_in_order() {
        let mut v = healthy();
        v.set(Feature::DailyStress, 5);
        let advice = recommend(&v);
        assert_eq!(advice, vec![RULES[0].advice, RULES[1].advice]);
        assert!(advice[1].contains("mental health professional"));
    }

    #[test]
    fn test_rules_are_independent_and_order_stable() {
        let mut v = healthy();
        v.set(Feature::Flow, 0);
        v.set(Feature::SleepHours, 2);
        v.set(Feature::SufficientIncome, 2);
        let advice = recommend(&v);
        assert_eq!(advice.len(), 3);
        assert!(advice[0].contains("sleep-deprived"));
        assert!(advice[1].contains("Financial stress"));
        assert!(advice[2].contains("'Flow'"));
    }

    #[test]
    fn test_threshold_edges() {
        assert!(Threshold::Below(3).matches(2));
        assert!(!Threshold::Below(3).matches(3));
        assert!(Threshold::Above(5).matches(6));
        assert!(!Threshold::Above(5).matches(5));
        assert!(Threshold::AtLeast(5).matches(5));
        assert!(Threshold::Equals(2).matches(2));
        assert!(!Threshold::Equals(2).matches(1));
    }

    #[test]
    fn test_everything_fires_on_worst_answers() {
        let mut v = FeatureVector::from_levels([0; FEATURE_COUNT]);
        v.set(Feature::DailyStress, 5);
        v.set(Feature::BmiRange, 2);
        v.set(Feature::SufficientIncome, 2);
        v.set(Feature::LostVacation, 10);
        v.set(Feature::DailyShouting, 10);
        assert_eq!(recommend(&v).len(), RULES.len());
    }
}
