//! Suggest command - show predictions and suggestions for one user.

use std::path::PathBuf;

use colored::Colorize;
use sleepwise::{FixedPredictor, PredictionOutcome, Sleepwise, SleepwiseConfig};

pub fn run(
    file: PathBuf,
    row: usize,
    json: bool,
    predict_disorder: Option<String>,
    predict_quality: Option<String>,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = SleepwiseConfig {
        suggestions: super::load_config(config)?,
        ..SleepwiseConfig::default()
    };

    let mut sleepwise = Sleepwise::with_config(config);
    if let Some(label) = predict_disorder {
        sleepwise = sleepwise.with_disorder_predictor(FixedPredictor::new(label).with_name("cli"));
    }
    if let Some(label) = predict_quality {
        sleepwise = sleepwise.with_quality_predictor(FixedPredictor::new(label).with_name("cli"));
    }

    let (table, source) = sleepwise.load(&file)?;
    let report = sleepwise.report(&table, row)?;
    tracing::debug!(row, suggestions = report.suggestions.len(), "built report");

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!(
        "{} {} (row {}, {} rows)",
        "Suggestions for".cyan().bold(),
        source.file.white(),
        row.to_string().white().bold(),
        source.row_count
    );

    if report.sleep_disorder.is_some() || report.sleep_quality.is_some() {
        println!();
        println!("{}", "Predictions:".yellow().bold());
        print_prediction("Sleep Disorder", report.sleep_disorder.as_ref());
        print_prediction("Sleep Quality", report.sleep_quality.as_ref());
    }

    println!();
    for suggestion in &report.suggestions {
        println!("  - {}", suggestion.message);
    }

    Ok(())
}

fn print_prediction(name: &str, outcome: Option<&PredictionOutcome>) {
    match outcome {
        Some(PredictionOutcome::Predicted { label }) => {
            println!("  {:15} {}", name, label.white().bold())
        }
        Some(PredictionOutcome::Failed { message }) => {
            println!("  {:15} {}", name, format!("failed: {}", message).red())
        }
        None => {}
    }
}
