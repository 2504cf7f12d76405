//! Per-user report: predictions alongside suggestions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::predict::PredictionOutcome;
use crate::suggestion::Suggestion;

/// Everything shown for one selected user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReport {
    /// Row index of the user in the source table.
    pub row: usize,
    /// Sleep disorder prediction, when a predictor is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_disorder: Option<PredictionOutcome>,
    /// Sleep quality prediction, when a predictor is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<PredictionOutcome>,
    /// Suggestions in rule-table order. Never empty.
    pub suggestions: Vec<Suggestion>,
}

impl UserReport {
    /// Suggestion texts in order.
    pub fn messages(&self) -> Vec<&str> {
        self.suggestions.iter().map(|s| s.message.as_str()).collect()
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::{RuleId, Suggestion};

    #[test]
    fn test_to_json_omits_missing_predictions() {
        let report = UserReport {
            row: 2,
            sleep_disorder: Some(PredictionOutcome::Failed {
                message: "no model".to_string(),
            }),
            sleep_quality: None,
            suggestions: vec![Suggestion::from(RuleId::LowSteps)],
        };

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["row"], 2);
        assert_eq!(value["sleep_disorder"]["status"], "failed");
        assert!(value.get("sleep_quality").is_none());
        assert_eq!(value["suggestions"][0]["rule"], "low_steps");
        assert!(json.contains('\n'));
    }
}
