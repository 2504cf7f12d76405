//! The fixed rule table.

use serde::{Deserialize, Serialize};

/// Identifier of a rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Sleep duration below the minimum.
    ShortSleep,
    /// Stress level above the maximum.
    HighStress,
    /// Physical activity below the low-activity cutoff.
    LowActivity,
    /// Daily steps below the minimum.
    LowSteps,
    /// BMI category is Obese.
    Obesity,
    /// Resting heart rate above the maximum.
    ElevatedHeartRate,
    /// Systolic or diastolic pressure above its maximum.
    HighBloodPressure,
    /// Sleep disorder is Insomnia.
    Insomnia,
    /// Sleep disorder is Sleep Apnea.
    SleepApnea,
    /// No other rule fired.
    Fallback,
}

impl RuleId {
    /// All rules in evaluation order. `Fallback` is always last.
    pub const TABLE: [RuleId; 10] = [
        RuleId::ShortSleep,
        RuleId::HighStress,
        RuleId::LowActivity,
        RuleId::LowSteps,
        RuleId::Obesity,
        RuleId::ElevatedHeartRate,
        RuleId::HighBloodPressure,
        RuleId::Insomnia,
        RuleId::SleepApnea,
        RuleId::Fallback,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RuleId::ShortSleep => "Short Sleep",
            RuleId::HighStress => "High Stress",
            RuleId::LowActivity => "Low Activity",
            RuleId::LowSteps => "Low Steps",
            RuleId::Obesity => "Obesity",
            RuleId::ElevatedHeartRate => "Elevated Heart Rate",
            RuleId::HighBloodPressure => "High Blood Pressure",
            RuleId::Insomnia => "Insomnia",
            RuleId::SleepApnea => "Sleep Apnea",
            RuleId::Fallback => "Healthy Habits",
        }
    }

    /// The suggestion text emitted when this rule fires.
    pub fn message(&self) -> &'static str {
        match self {
            RuleId::ShortSleep => "Increase your sleep time to at least 7–8 hours per night.",
            RuleId::HighStress => {
                "High stress detected. Try meditation, relaxation, or exercise before bed."
            }
            RuleId::LowActivity => "Increase daily physical activity for better sleep quality.",
            RuleId::LowSteps => "Try walking more during the day (aim for 8,000–10,000 steps).",
            RuleId::Obesity => "Obesity can affect sleep. Consider diet & lifestyle changes.",
            RuleId::ElevatedHeartRate => {
                "Elevated resting heart rate. Try light evening exercise & relaxation."
            }
            RuleId::HighBloodPressure => {
                "Monitor your blood pressure; consult a doctor if consistently high."
            }
            RuleId::Insomnia => {
                "Insomnia detected. Maintain a regular sleep schedule & avoid caffeine late."
            }
            RuleId::SleepApnea => {
                "Sleep apnea detected. Consult a specialist & avoid alcohol before sleep."
            }
            RuleId::Fallback => "Your sleep habits look good! Maintain consistency.",
        }
    }

    /// Position in the rule table.
    pub fn position(&self) -> usize {
        *self as usize
    }
}

/// A suggestion produced by a rule that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Rule that produced this suggestion.
    pub rule: RuleId,
    /// Human-readable suggestion text.
    pub message: String,
}

impl From<RuleId> for Suggestion {
    fn from(rule: RuleId) -> Self {
        Self {
            rule,
            message: rule.message().to_string(),
        }
    }
}
