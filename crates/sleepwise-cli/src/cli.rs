//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sleepwise: rule-based sleep and lifestyle suggestions
#[derive(Parser)]
#[command(name = "sleepwise")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Threshold configuration file (TOML)
    #[arg(short, long, global = true, value_name = "TOML")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show suggestions for one user of a dataset
    Suggest {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Row index of the user
        #[arg(short, long, default_value = "0")]
        row: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Sleep disorder label from an external classifier
        #[arg(long, value_name = "LABEL")]
        predict_disorder: Option<String>,

        /// Sleep quality label from an external classifier
        #[arg(long, value_name = "LABEL")]
        predict_quality: Option<String>,
    },

    /// Evaluate every row and show how often each rule fires
    Summary {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective thresholds as TOML
    Thresholds,
}
