//! The `geocity validate` command.

use std::path::PathBuf;

use anyhow::Result;

use geocity_core::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    // Loading validates; any problem surfaces as an error here.
    let config = load_config_from(config_path.as_deref())?;

    println!("tolerance_deg   = {}", config.tolerance_deg);
    println!("guard_deg       = {}", config.guard_deg);
    println!("score_increment = {}", config.score_increment);
    println!(
        "intersecting    = [{}, {})",
        config.angle_min,
        config.angle_max()
    );
    println!("max_attempts    = {}", config.max_attempts);
    println!("Config valid.");

    Ok(())
}
