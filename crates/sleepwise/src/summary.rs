//! Dataset-wide rule statistics and label distributions.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::record::fields;
use crate::record::{CategoricalCode, FieldLookup, SleepDisorder};
use crate::suggestion::{RuleId, SuggestionEvaluator};

/// Label used for rows whose sleep disorder is absent or undecodable.
pub const UNRECORDED: &str = "Unrecorded";

/// Summary of evaluating every row of a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of rows evaluated.
    pub rows: usize,
    /// Rows each rule fired for, in rule-table order.
    pub rule_counts: IndexMap<RuleId, usize>,
    /// Mean number of suggestions per row.
    pub mean_suggestions: f64,
    /// Row counts per `Quality of Sleep` value, rounded to whole points.
    pub sleep_quality: BTreeMap<i64, usize>,
    /// Row counts per decoded `Sleep Disorder` label.
    pub sleep_disorders: IndexMap<String, usize>,
}

impl DatasetSummary {
    /// Evaluate every row of `table` and tally the results.
    pub fn compute(table: &DataTable, evaluator: &SuggestionEvaluator) -> Self {
        let mut rule_counts: IndexMap<RuleId, usize> =
            RuleId::TABLE.iter().map(|&rule| (rule, 0)).collect();
        let mut sleep_disorders: IndexMap<String, usize> = [
            SleepDisorder::None,
            SleepDisorder::Insomnia,
            SleepDisorder::SleepApnea,
        ]
        .iter()
        .map(|d| (d.label().to_string(), 0))
        .chain(std::iter::once((UNRECORDED.to_string(), 0)))
        .collect();
        let mut sleep_quality = BTreeMap::new();
        let mut total_suggestions = 0usize;
        let mut rows = 0usize;

        for record in table.records() {
            rows += 1;

            let fired = evaluator.fired_rules(&record);
            total_suggestions += fired.len();
            for rule in fired {
                *rule_counts.entry(rule).or_insert(0) += 1;
            }

            if let Ok(quality) = record.number(fields::QUALITY_OF_SLEEP) {
                *sleep_quality.entry(quality.round() as i64).or_insert(0) += 1;
            }

            let disorder = record
                .category::<SleepDisorder>(fields::SLEEP_DISORDER)
                .map(|d| d.label())
                .unwrap_or(UNRECORDED);
            *sleep_disorders.entry(disorder.to_string()).or_insert(0) += 1;
        }

        let mean_suggestions = if rows == 0 {
            0.0
        } else {
            total_suggestions as f64 / rows as f64
        };

        tracing::debug!(rows, mean_suggestions, "summarized dataset");

        Self {
            rows,
            rule_counts,
            mean_suggestions,
            sleep_quality,
            sleep_disorders,
        }
    }

    /// Rows for which a rule fired.
    pub fn count(&self, rule: RuleId) -> usize {
        self.rule_counts.get(&rule).copied().unwrap_or(0)
    }
}
