//! Summary command - rule statistics across a whole dataset.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;
use sleepwise::{DatasetSummary, RuleId, Sleepwise, SleepwiseConfig};

/// Width of the longest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

/// JSON envelope for `summary --json`.
#[derive(Debug, Serialize)]
struct SummaryOutput<'a> {
    file: &'a str,
    hash: &'a str,
    summary: &'a DatasetSummary,
}

pub fn run(
    file: PathBuf,
    json: bool,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = SleepwiseConfig {
        suggestions: super::load_config(config)?,
        ..SleepwiseConfig::default()
    };
    let sleepwise = Sleepwise::with_config(config);

    let (table, source) = sleepwise.load(&file)?;
    let summary = sleepwise.summarize(&table);

    if json {
        let out = SummaryOutput {
            file: &source.file,
            hash: &source.hash,
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows)",
        "Summary for".cyan().bold(),
        source.file.white(),
        summary.rows.to_string().white().bold()
    );
    println!();

    println!("{}", "Rules fired:".yellow().bold());
    for (rule, count) in &summary.rule_counts {
        let pct = if summary.rows == 0 {
            0.0
        } else {
            *count as f64 / summary.rows as f64 * 100.0
        };
        let count = if *rule == RuleId::Fallback {
            count.to_string().green()
        } else {
            count.to_string().white()
        };
        println!("  {:22} {:>6} ({:.0}%)", rule.label(), count, pct);
    }
    println!(
        "  Mean suggestions per user: {:.2}",
        summary.mean_suggestions
    );
    println!();

    println!("{}", "Sleep disorders:".yellow().bold());
    for (label, count) in &summary.sleep_disorders {
        println!("  {:22} {:>6}", label, count);
    }

    if !summary.sleep_quality.is_empty() {
        println!();
        println!("{}", "Quality of sleep:".yellow().bold());
        let largest = summary.sleep_quality.values().copied().max().unwrap_or(0);
        for (score, count) in &summary.sleep_quality {
            let bar = "█".repeat(bar_length(*count, largest));
            println!("  {:>3} {} {}", score, bar.cyan(), count);
        }
    }

    Ok(())
}

/// Bar length for `count`, scaled so `largest` fills `BAR_WIDTH`.
fn bar_length(count: usize, largest: usize) -> usize {
    if largest == 0 || count == 0 {
        return 0;
    }
    (count * BAR_WIDTH).div_ceil(largest)
}
