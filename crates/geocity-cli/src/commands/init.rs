//! The `geocity init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = Path::new("geocity.toml");
    if path.exists() {
        println!("geocity.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created geocity.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust the constants in geocity.toml if needed");
    println!("  2. Run: geocity validate");
    println!("  3. Run: geocity play --rounds 5");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# geocity configuration

# A checked angle matches when it is within this many degrees of 0° or 90°.
tolerance_deg = 2.0

# Generated "intersecting" questions stay this far away from 0° and ±90°.
guard_deg = 10.0

# Points per answered round.
score_increment = 10

# Intersecting angles are drawn from [angle_min, angle_min + angle_span).
angle_min = -80
angle_span = 160

# Rejected draws before falling back to the first valid angle.
max_attempts = 64
"#;
