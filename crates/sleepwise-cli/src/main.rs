//! Sleepwise CLI - rule-based sleep and lifestyle suggestions.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Suggest {
            file,
            row,
            json,
            predict_disorder,
            predict_quality,
        } => commands::suggest::run(
            file,
            row,
            json,
            predict_disorder,
            predict_quality,
            cli.config,
        ),

        Commands::Summary { file, json } => commands::summary::run(file, json, cli.config),

        Commands::Thresholds => commands::thresholds::run(cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
