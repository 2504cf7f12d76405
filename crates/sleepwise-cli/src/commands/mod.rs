//! CLI command implementations.

pub mod suggest;
pub mod summary;
pub mod thresholds;

use std::path::PathBuf;

use sleepwise::SuggestionConfig;

/// Load thresholds from `--config`, or the defaults when none was given.
pub fn load_config(path: Option<PathBuf>) -> sleepwise::Result<SuggestionConfig> {
    match path {
        Some(path) => SuggestionConfig::load(path),
        None => Ok(SuggestionConfig::default()),
    }
}
