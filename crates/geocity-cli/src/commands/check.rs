//! The `geocity check` and `geocity classify` commands.

use std::path::PathBuf;

use anyhow::Result;

use geocity_core::config::load_config_from;
use geocity_core::evaluator::Evaluator;
use geocity_core::explorer::Explorer;
use geocity_core::model::{Mode, Relationship};

pub fn execute(mode: String, angle: f64, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mode: Mode = mode.parse().map_err(anyhow::Error::msg)?;

    let mut explorer = Explorer::with_evaluator(mode, Evaluator::new(config.tolerance_deg))?;
    let stored = explorer.set_angle(angle);
    if stored != angle {
        let (min, max) = explorer.slider_range();
        println!("Angle clamped to {stored}° (range {min}° to {max}°)");
    }

    let result = explorer.check();
    let target_angle = match result.relationship {
        Relationship::Perpendicular => 90,
        _ => 0,
    };

    if result.matched {
        println!("Success: {stored}° is {}.", result.relationship);
    } else {
        println!(
            "Error: {stored}° is not {} (aim for {target_angle}° ± {}°).",
            result.relationship, config.tolerance_deg
        );
    }

    Ok(())
}

pub fn classify(angle: f64, config_path: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(angle.is_finite(), "angle must be a finite number");
    let config = load_config_from(config_path.as_deref())?;
    let relationship = Evaluator::new(config.tolerance_deg).classify(angle);
    println!("{angle}°: {relationship}");
    Ok(())
}
