//! Thresholds command - print the effective configuration.

use std::path::PathBuf;

pub fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config)?;
    let activity = &config.thresholds.physical_activity;

    println!(
        "# physical activity: {} below {}",
        activity.unit.label(),
        activity.effective_minimum()
    );
    print!("{}", config.to_toml()?);

    Ok(())
}
