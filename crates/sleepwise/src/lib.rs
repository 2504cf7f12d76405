//! Sleepwise: rule-based sleep and lifestyle suggestions.
//!
//! Sleepwise maps one user's health record to a short, ordered list of
//! suggestions by walking a fixed rule table. Thresholds live in
//! [`SuggestionConfig`]; categorical fields are decoded through the code
//! tables in [`BmiCategory`] and [`SleepDisorder`].
//!
//! # Core Principles
//!
//! - **Never empty**: a fallback suggestion fires when no other rule does
//! - **Fault-tolerant**: a missing or malformed field skips only its own rule
//! - **Read-only**: records are never modified
//!
//! # Example
//!
//! ```
//! use sleepwise::{Record, SuggestionEvaluator};
//!
//! let record = Record::new()
//!     .with_field("Sleep Duration", 5.0)
//!     .with_field("Stress Level", 3);
//!
//! let suggestions = SuggestionEvaluator::new().evaluate(&record);
//! assert_eq!(suggestions.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod predict;
pub mod record;
pub mod report;
pub mod suggestion;
pub mod summary;

mod sleepwise;

pub use crate::sleepwise::{Sleepwise, SleepwiseConfig};
pub use config::{ActivityThreshold, ActivityUnit, SuggestionConfig, Thresholds};
pub use error::{Result, SleepwiseError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use predict::{FixedPredictor, PredictionOutcome, PredictionTarget, Predictor};
pub use record::{
    BmiCategory, CategoricalCode, FieldFault, FieldLookup, FieldValue, Record, SleepDisorder,
};
pub use report::UserReport;
pub use suggestion::{RuleId, Suggestion, SuggestionEvaluator};
pub use summary::DatasetSummary;
