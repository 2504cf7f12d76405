//! Predictor trait and prediction outcomes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::record::Record;
use crate::record::fields;

/// What a predictor classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionTarget {
    /// Sleep disorder class.
    SleepDisorder,
    /// Sleep quality class.
    SleepQuality,
}

impl PredictionTarget {
    /// Fields withheld from the features so the model never sees its labels.
    pub fn excluded_fields(&self) -> &'static [&'static str] {
        match self {
            PredictionTarget::SleepDisorder => &[fields::SLEEP_DISORDER],
            PredictionTarget::SleepQuality => {
                &[fields::SLEEP_DISORDER, fields::SLEEP_QUALITY_CLASS]
            }
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PredictionTarget::SleepDisorder => "Sleep Disorder",
            PredictionTarget::SleepQuality => "Sleep Quality",
        }
    }

    /// Feature record for this target.
    pub fn features(&self, record: &Record) -> Record {
        record.without(self.excluded_fields())
    }
}

/// Trait for external classifiers.
///
/// Implementations must be thread-safe (Send + Sync) so one instance can be
/// shared across reports.
pub trait Predictor: Send + Sync {
    /// Predict a class label from a feature record.
    fn predict(&self, features: &Record) -> Result<String>;

    /// Get the name of this predictor (for logging/debugging).
    fn name(&self) -> &str;
}

/// Result of asking a predictor for a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredictionOutcome {
    /// The predictor returned a label.
    Predicted { label: String },
    /// The predictor failed; the message is kept for display.
    Failed { message: String },
}

impl PredictionOutcome {
    /// Run a predictor for a target, absorbing its failure.
    pub fn run(predictor: &dyn Predictor, target: PredictionTarget, record: &Record) -> Self {
        let features = target.features(record);
        match predictor.predict(&features) {
            Ok(label) => PredictionOutcome::Predicted { label },
            Err(e) => {
                warn!(
                    predictor = predictor.name(),
                    target = target.label(),
                    error = %e,
                    "prediction failed"
                );
                PredictionOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    /// The predicted label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            PredictionOutcome::Predicted { label } => Some(label),
            PredictionOutcome::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SleepwiseError;

    struct EchoFeatureCount;

    impl Predictor for EchoFeatureCount {
        fn predict(&self, features: &Record) -> Result<String> {
            Ok(features.len().to_string())
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    struct Broken;

    impl Predictor for Broken {
        fn predict(&self, _features: &Record) -> Result<String> {
            Err(SleepwiseError::Prediction {
                predictor: "broken".to_string(),
                message: "feature shape mismatch".to_string(),
            })
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn record() -> Record {
        Record::new()
            .with_field(fields::STRESS_LEVEL, 4)
            .with_field(fields::SLEEP_DISORDER, "None")
            .with_field(fields::SLEEP_QUALITY_CLASS, "Good")
    }

    #[test]
    fn test_label_fields_are_withheld() {
        let disorder =
            PredictionOutcome::run(&EchoFeatureCount, PredictionTarget::SleepDisorder, &record());
        assert_eq!(disorder.label(), Some("2"));

        let quality =
            PredictionOutcome::run(&EchoFeatureCount, PredictionTarget::SleepQuality, &record());
        assert_eq!(quality.label(), Some("1"));
    }

    #[test]
    fn test_failure_is_absorbed() {
        let outcome = PredictionOutcome::run(&Broken, PredictionTarget::SleepDisorder, &record());
        match outcome {
            PredictionOutcome::Failed { message } => {
                assert!(message.contains("feature shape mismatch"))
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }
}
