//! Predictor that always returns the same label.

use crate::error::Result;
use crate::record::Record;

use super::Predictor;

/// Returns a fixed label regardless of the features.
///
/// Used in tests and when a label is supplied from outside, e.g. by a model
/// served elsewhere.
pub struct FixedPredictor {
    name: String,
    label: String,
}

impl FixedPredictor {
    /// Create a predictor that always answers `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            name: "fixed".to_string(),
            label: label.into(),
        }
    }

    /// Set the predictor name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Predictor for FixedPredictor {
    fn predict(&self, _features: &Record) -> Result<String> {
        Ok(self.label.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
