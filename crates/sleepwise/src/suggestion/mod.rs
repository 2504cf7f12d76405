//! Rule-based suggestions for a single health record.
//!
//! This module defines the fixed rule table and the evaluator that walks it.

mod evaluator;
mod rules;

pub use evaluator::SuggestionEvaluator;
pub use rules::{RuleId, Suggestion};
