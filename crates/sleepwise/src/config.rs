//! Suggestion thresholds and their TOML representation.
//!
//! Every business threshold the rule table compares against lives here,
//! with its unit. Missing keys in a TOML file fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SleepwiseError};

/// Unit of the `Physical Activity Level` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityUnit {
    /// Activity score on a 0-10 scale.
    #[default]
    Score,
    /// Minutes of physical activity per day.
    Minutes,
}

impl ActivityUnit {
    /// Low-activity cutoff used when none is configured.
    pub fn default_minimum(&self) -> f64 {
        match self {
            ActivityUnit::Score => 3.0,
            ActivityUnit::Minutes => 30.0,
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityUnit::Score => "score (0-10)",
            ActivityUnit::Minutes => "minutes/day",
        }
    }
}

/// Low-activity cutoff together with the unit it is expressed in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityThreshold {
    /// Unit of the activity field. Default: score.
    pub unit: ActivityUnit,
    /// Values strictly below this fire the low-activity rule.
    /// Default: 3 for scores, 30 for minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
}

impl ActivityThreshold {
    /// Activity measured as a 0-10 score.
    pub fn score(minimum: f64) -> Self {
        Self {
            unit: ActivityUnit::Score,
            minimum: Some(minimum),
        }
    }

    /// Activity measured in minutes per day.
    pub fn minutes(minimum: f64) -> Self {
        Self {
            unit: ActivityUnit::Minutes,
            minimum: Some(minimum),
        }
    }

    /// Returns the effective cutoff, defaulting per unit.
    pub fn effective_minimum(&self) -> f64 {
        self.minimum.unwrap_or_else(|| self.unit.default_minimum())
    }
}

/// Numeric thresholds for the rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Sleep below this many hours suggests more sleep.
    pub min_sleep_hours: f64,
    /// Stress above this level (1-10 scale) suggests relaxation.
    pub max_stress_level: f64,
    /// Fewer daily steps than this suggests walking more.
    pub min_daily_steps: f64,
    /// Resting heart rate above this (bpm) suggests light exercise.
    pub max_resting_heart_rate: f64,
    /// Systolic pressure above this (mmHg) suggests monitoring.
    pub max_systolic_bp: f64,
    /// Diastolic pressure above this (mmHg) suggests monitoring.
    pub max_diastolic_bp: f64,
    /// Low-activity cutoff and unit.
    pub physical_activity: ActivityThreshold,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_sleep_hours: 6.0,
            max_stress_level: 7.0,
            min_daily_steps: 5000.0,
            max_resting_heart_rate: 85.0,
            max_systolic_bp: 130.0,
            max_diastolic_bp: 85.0,
            physical_activity: ActivityThreshold::default(),
        }
    }
}

/// Configuration for the suggestion evaluator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    pub thresholds: Thresholds,
}

impl SuggestionConfig {
    /// Set the activity threshold.
    pub fn with_activity(mut self, activity: ActivityThreshold) -> Self {
        self.thresholds.physical_activity = activity;
        self
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SleepwiseError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&content, &path.display().to_string())?;
        tracing::info!(path = %path.display(), "loaded suggestion config");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Self::parse(toml_str, "<string>")
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self> {
        let config: SuggestionConfig =
            toml::from_str(toml_str).map_err(|e| SleepwiseError::ConfigParse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML, with the activity cutoff resolved.
    pub fn to_toml(&self) -> Result<String> {
        let mut resolved = self.clone();
        let activity = &mut resolved.thresholds.physical_activity;
        activity.minimum = Some(activity.effective_minimum());

        toml::to_string_pretty(&resolved).map_err(|e| SleepwiseError::Config {
            field: "thresholds".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the threshold values.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        let checks = [
            ("thresholds.min_sleep_hours", t.min_sleep_hours),
            ("thresholds.max_stress_level", t.max_stress_level),
            ("thresholds.min_daily_steps", t.min_daily_steps),
            ("thresholds.max_resting_heart_rate", t.max_resting_heart_rate),
            ("thresholds.max_systolic_bp", t.max_systolic_bp),
            ("thresholds.max_diastolic_bp", t.max_diastolic_bp),
            (
                "thresholds.physical_activity.minimum",
                t.physical_activity.effective_minimum(),
            ),
        ];

        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(SleepwiseError::Config {
                    field: field.to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }

        if t.min_sleep_hours > 24.0 {
            return Err(SleepwiseError::Config {
                field: "thresholds.min_sleep_hours".to_string(),
                message: "must not exceed 24 hours".to_string(),
            });
        }

        if t.physical_activity.unit == ActivityUnit::Score
            && t.physical_activity.effective_minimum() > 10.0
        {
            return Err(SleepwiseError::Config {
                field: "thresholds.physical_activity.minimum".to_string(),
                message: "activity scores range from 0 to 10".to_string(),
            });
        }

        Ok(())
    }
}
