//! The `geocity play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use geocity_core::config::load_config_from;
use geocity_core::model::{Relationship, Theme};
use geocity_core::quiz::{QuizEngine, QuizRound};
use geocity_core::report::SessionReport;
use geocity_core::source::RandomSource;
use geocity_core::statistics::SessionStats;

pub fn execute(
    rounds: u32,
    seed: Option<u64>,
    report_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(rounds >= 1, "rounds must be at least 1");
    let config = load_config_from(config_path.as_deref())?;
    tracing::debug!(rounds, ?seed, "starting quiz session");

    let mut engine = match seed {
        Some(seed) => QuizEngine::seeded(config, seed)?,
        None => QuizEngine::from_entropy(config)?,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let played = run_rounds(&mut engine, rounds, &mut input, &mut out)?;
    if played < rounds {
        writeln!(out, "Input ended after {played} of {rounds} round(s).")?;
    }

    print_summary(&mut out, &engine.stats())?;
    let score = engine.score();
    writeln!(out, "Final score: {}/{}", score.score, score.total_possible)?;

    if let Some(path) = report_path {
        let report = SessionReport::from_engine(&engine, seed);
        report.save_json(&path)?;
        writeln!(out, "Report saved to: {}", path.display())?;
    }

    Ok(())
}

/// Play up to `rounds` rounds, returning how many were answered.
fn run_rounds<S, R, W>(
    engine: &mut QuizEngine<S>,
    rounds: u32,
    input: &mut R,
    out: &mut W,
) -> Result<u32>
where
    S: RandomSource,
    R: BufRead,
    W: Write,
{
    for number in 1..=rounds {
        let round = if number == 1 {
            *engine.round()
        } else {
            engine.generate_new_question()
        };
        writeln!(out, "Round {number}/{rounds}: {}", describe(&round))?;

        let Some(choice) = read_choice(input, out)? else {
            return Ok(number - 1);
        };

        let scored = engine.submit_answer(choice);
        let increment = engine.config().score_increment;
        if scored.is_correct == Some(true) {
            writeln!(out, "Correct! +{increment}")?;
        } else {
            writeln!(out, "Not quite: the lines are {}.", scored.question_type)?;
        }
        let score = engine.score();
        writeln!(out, "Score: {}/{}", score.score, score.total_possible)?;
    }
    Ok(rounds)
}

/// Read answers until one parses. `None` on end of input.
fn read_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Relationship>> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read answer")?;
        if read == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        match line.parse::<Relationship>() {
            Ok(choice) => return Ok(Some(choice)),
            Err(_) => writeln!(
                out,
                "Please answer parallel, perpendicular or intersecting."
            )?,
        }
    }
}

fn describe(round: &QuizRound) -> String {
    let subject = match round.theme {
        Theme::Rail => "Two rail tracks",
        Theme::Road => "Two roads",
    };
    format!(
        "{subject}, the second turned {}° from the first. Parallel, perpendicular or intersecting?",
        round.display_angle
    )
}

fn print_summary<W: Write>(out: &mut W, stats: &SessionStats) -> Result<()> {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Relationship", "Asked", "Correct", "Accuracy"]);

    for (relationship, tally) in &stats.per_relationship {
        table.add_row(vec![
            Cell::new(relationship),
            Cell::new(tally.asked),
            Cell::new(tally.correct),
            Cell::new(format!("{:.1}%", tally.accuracy() * 100.0)),
        ]);
    }
    table.add_row(vec![
        Cell::new("total"),
        Cell::new(stats.answered),
        Cell::new(stats.correct),
        Cell::new(format!("{:.1}%", stats.accuracy() * 100.0)),
    ]);

    writeln!(out, "\n{table}")?;
    Ok(())
}
