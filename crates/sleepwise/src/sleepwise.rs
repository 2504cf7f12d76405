//! Main Sleepwise struct and public API.

use std::path::Path;
use std::sync::Arc;

use crate::config::SuggestionConfig;
use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::predict::{PredictionOutcome, PredictionTarget, Predictor};
use crate::record::{FieldLookup, Record};
use crate::report::UserReport;
use crate::suggestion::SuggestionEvaluator;
use crate::summary::DatasetSummary;

/// Configuration for Sleepwise.
#[derive(Debug, Clone, Default)]
pub struct SleepwiseConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Suggestion thresholds.
    pub suggestions: SuggestionConfig,
}

/// Loads health tables and produces suggestions and reports for their rows.
pub struct Sleepwise {
    parser: Parser,
    evaluator: SuggestionEvaluator,
    disorder_predictor: Option<Arc<dyn Predictor>>,
    quality_predictor: Option<Arc<dyn Predictor>>,
}

impl Sleepwise {
    /// Create a Sleepwise instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SleepwiseConfig::default())
    }

    /// Create a Sleepwise instance with custom configuration.
    pub fn with_config(config: SleepwiseConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            evaluator: SuggestionEvaluator::with_config(config.suggestions),
            disorder_predictor: None,
            quality_predictor: None,
        }
    }

    /// Add a sleep disorder classifier. It never sees the `Sleep Disorder` field.
    pub fn with_disorder_predictor(mut self, predictor: impl Predictor + 'static) -> Self {
        self.disorder_predictor = Some(Arc::new(predictor));
        self
    }

    /// Add a sleep quality classifier. It never sees `Sleep Disorder` or
    /// `SleepQuality_Class`.
    pub fn with_quality_predictor(mut self, predictor: impl Predictor + 'static) -> Self {
        self.quality_predictor = Some(Arc::new(predictor));
        self
    }

    /// The evaluator in use.
    pub fn evaluator(&self) -> &SuggestionEvaluator {
        &self.evaluator
    }

    /// Load a delimited health dataset.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();
        let (table, source) = self.parser.parse_file(path)?;
        tracing::info!(
            path = %path.display(),
            rows = source.row_count,
            columns = source.column_count,
            "loaded dataset"
        );
        Ok((table, source))
    }

    /// Suggestion messages for a single record.
    pub fn suggest<R: FieldLookup>(&self, record: &R) -> Vec<String> {
        self.evaluator.evaluate(record)
    }

    /// Report for one row of a table.
    pub fn report(&self, table: &DataTable, row: usize) -> Result<UserReport> {
        let record = table.record(row)?;
        Ok(self.report_record(row, &record))
    }

    /// Report for a record that came from somewhere other than a table.
    pub fn report_record(&self, row: usize, record: &Record) -> UserReport {
        let sleep_disorder = self
            .disorder_predictor
            .as_deref()
            .map(|p| PredictionOutcome::run(p, PredictionTarget::SleepDisorder, record));
        let sleep_quality = self
            .quality_predictor
            .as_deref()
            .map(|p| PredictionOutcome::run(p, PredictionTarget::SleepQuality, record));

        UserReport {
            row,
            sleep_disorder,
            sleep_quality,
            suggestions: self.evaluator.evaluate_detailed(record),
        }
    }

    /// Evaluate every row of a table.
    pub fn summarize(&self, table: &DataTable) -> DatasetSummary {
        DatasetSummary::compute(table, &self.evaluator)
    }
}

impl Default for Sleepwise {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::FixedPredictor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_report() {
        let content = "Person ID,Sleep Duration,Stress Level\n1,5.5,3\n2,8.0,9\n";
        let file = create_test_file(content);

        let sleepwise = Sleepwise::new();
        let (table, source) = sleepwise.load(file.path()).unwrap();
        assert_eq!(source.row_count, 2);
        assert_eq!(source.format, "csv");
        assert!(source.hash.starts_with("sha256:"));

        let report = sleepwise.report(&table, 1).unwrap();
        assert_eq!(report.row, 1);
        assert!(report.sleep_disorder.is_none());
        assert_eq!(report.messages().len(), 1);
        assert!(report.messages()[0].starts_with("High stress"));
    }

    #[test]
    fn test_report_with_predictors() {
        let sleepwise = Sleepwise::new()
            .with_disorder_predictor(FixedPredictor::new("Insomnia"))
            .with_quality_predictor(FixedPredictor::new("Poor"));

        let report = sleepwise.report_record(0, &Record::new());
        assert_eq!(
            report.sleep_disorder.as_ref().and_then(|p| p.label()),
            Some("Insomnia")
        );
        assert_eq!(
            report.sleep_quality.as_ref().and_then(|p| p.label()),
            Some("Poor")
        );
        assert_eq!(report.suggestions.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let result = Sleepwise::new().load("/nonexistent/sleep.csv");
        assert!(matches!(result, Err(crate::SleepwiseError::Io { .. })));
    }
}
