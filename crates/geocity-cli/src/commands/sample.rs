//! The `geocity sample` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use geocity_core::config::load_config_from;
use geocity_core::model::{Relationship, Theme};
use geocity_core::quiz::{QuizEngine, QuizRound};
use geocity_core::statistics::type_distribution;

pub fn execute(count: u32, seed: Option<u64>, config_path: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(count >= 1, "count must be at least 1");
    let config = load_config_from(config_path.as_deref())?;

    let mut engine = match seed {
        Some(seed) => QuizEngine::seeded(config.clone(), seed)?,
        None => QuizEngine::from_entropy(config.clone())?,
    };

    let rounds: Vec<QuizRound> = (0..count).map(|_| engine.generate_new_question()).collect();
    let distribution = type_distribution(&rounds);

    let mut table = Table::new();
    table.set_header(vec!["Question type", "Count", "Share"]);
    for relationship in Relationship::ALL {
        let n = distribution.get(&relationship).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(relationship),
            Cell::new(n),
            Cell::new(format!("{:.1}%", n as f64 * 100.0 / f64::from(count))),
        ]);
    }
    println!("Generated {count} question(s)");
    println!("{table}");

    let rail = rounds.iter().filter(|r| r.theme == Theme::Rail).count();
    println!("Themes: {rail} rail, {} road", rounds.len() - rail);

    let violations = rounds
        .iter()
        .filter(|r| {
            r.question_type == Relationship::Intersecting && config.is_degenerate(r.display_angle)
        })
        .count();
    println!("Guard violations: {violations}");
    if violations > 0 {
        tracing::warn!(violations, "generated intersecting angles inside the guard");
    }

    Ok(())
}
