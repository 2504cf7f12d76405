//! Categorical encodings for BMI category and sleep disorder.
//!
//! | Field            | Code | Category    | Accepted labels                 |
//! |------------------|------|-------------|---------------------------------|
//! | `BMI Category`   | 0    | Normal      | `Normal`, `Normal Weight`       |
//! |                  | 1    | Overweight  | `Overweight`                    |
//! |                  | 2    | Obese       | `Obese`, `Obesity`              |
//! | `Sleep Disorder` | 0    | None        | `None`, `No Disorder`           |
//! |                  | 1    | Insomnia    | `Insomnia`                      |
//! |                  | 2    | Sleep Apnea | `Sleep Apnea`, `Sleep_Apnea`    |
//!
//! Labels match case-insensitively. Codes outside the table and unknown
//! labels do not decode.

use serde::{Deserialize, Serialize};

use super::FieldValue;

/// A category stored either as a small integer code or as a label.
pub trait CategoricalCode: Sized {
    /// Decode an integer code.
    fn from_code(code: i64) -> Option<Self>;

    /// Decode a label.
    fn from_label(label: &str) -> Option<Self>;

    /// The integer code for this category.
    fn code(&self) -> u8;

    /// The canonical label for this category.
    fn label(&self) -> &'static str;

    /// Decode a field value. Numbers must be whole to count as codes.
    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Number(n) => whole_code(*n).and_then(Self::from_code),
            FieldValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) => whole_code(n).and_then(Self::from_code),
                Err(_) => Self::from_label(s),
            },
        }
    }
}

fn whole_code(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0).then_some(n as i64)
}

fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Normal,
    Overweight,
    Obese,
}

impl CategoricalCode for BmiCategory {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(BmiCategory::Normal),
            1 => Some(BmiCategory::Overweight),
            2 => Some(BmiCategory::Obese),
            _ => None,
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "normal" | "normal weight" => Some(BmiCategory::Normal),
            "overweight" => Some(BmiCategory::Overweight),
            "obese" | "obesity" => Some(BmiCategory::Obese),
            _ => None,
        }
    }

    fn code(&self) -> u8 {
        match self {
            BmiCategory::Normal => 0,
            BmiCategory::Overweight => 1,
            BmiCategory::Obese => 2,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Diagnosed sleep disorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepDisorder {
    None,
    Insomnia,
    SleepApnea,
}

impl CategoricalCode for SleepDisorder {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(SleepDisorder::None),
            1 => Some(SleepDisorder::Insomnia),
            2 => Some(SleepDisorder::SleepApnea),
            _ => None,
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "none" | "no disorder" => Some(SleepDisorder::None),
            "insomnia" => Some(SleepDisorder::Insomnia),
            "sleep apnea" => Some(SleepDisorder::SleepApnea),
            _ => None,
        }
    }

    fn code(&self) -> u8 {
        match self {
            SleepDisorder::None => 0,
            SleepDisorder::Insomnia => 1,
            SleepDisorder::SleepApnea => 2,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SleepDisorder::None => "None",
            SleepDisorder::Insomnia => "Insomnia",
            SleepDisorder::SleepApnea => "Sleep Apnea",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_codes_and_labels_agree() {
        for category in [BmiCategory::Normal, BmiCategory::Overweight, BmiCategory::Obese] {
            assert_eq!(BmiCategory::from_code(category.code() as i64), Some(category));
            assert_eq!(BmiCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(BmiCategory::from_label("Normal Weight"), Some(BmiCategory::Normal));
        assert_eq!(BmiCategory::from_label("OBESE"), Some(BmiCategory::Obese));
        assert_eq!(BmiCategory::from_code(3), None);
    }

    #[test]
    fn test_sleep_disorder_labels() {
        assert_eq!(SleepDisorder::from_label("None"), Some(SleepDisorder::None));
        assert_eq!(SleepDisorder::from_label("insomnia"), Some(SleepDisorder::Insomnia));
        assert_eq!(SleepDisorder::from_label("Sleep Apnea"), Some(SleepDisorder::SleepApnea));
        assert_eq!(SleepDisorder::from_label("sleep_apnea"), Some(SleepDisorder::SleepApnea));
        assert_eq!(SleepDisorder::from_label("narcolepsy"), None);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(
            SleepDisorder::from_value(&FieldValue::Number(1.0)),
            Some(SleepDisorder::Insomnia)
        );
        assert_eq!(
            SleepDisorder::from_value(&FieldValue::Text("2".to_string())),
            Some(SleepDisorder::SleepApnea)
        );
        assert_eq!(SleepDisorder::from_value(&FieldValue::Number(1.5)), None);
        assert_eq!(BmiCategory::from_value(&FieldValue::Number(-1.0)), None);
    }
}
