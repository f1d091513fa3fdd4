//! geocity CLI — check angles between lines and play the relationship quiz.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "geocity",
    version,
    about = "Parallel, perpendicular and intersecting lines: explorer and quiz"
)]
struct Cli {
    /// Config file path (defaults to ./geocity.toml, then ~/.config/geocity/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an angle against an interactive mode's target
    Check {
        /// Interactive mode: parallel or perpendicular
        #[arg(long)]
        mode: String,

        /// Angle of the moving line in degrees (clamped to the mode's slider range)
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
    },

    /// Name the relationship an angle falls into
    Classify {
        /// Angle in degrees
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
    },

    /// Play the practice quiz, reading one answer per line from stdin
    Play {
        /// Number of rounds
        #[arg(long, default_value = "5")]
        rounds: u32,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,

        /// Write a JSON session report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Generate questions without answering and show their distribution
    Sample {
        /// Number of questions to generate
        #[arg(long, default_value = "1000")]
        count: u32,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate the config file
    Validate,

    /// Create a starter geocity.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("geocity=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Check { mode, angle } => commands::check::execute(mode, angle, config),
        Commands::Classify { angle } => commands::check::classify(angle, config),
        Commands::Play {
            rounds,
            seed,
            report,
        } => commands::play::execute(rounds, seed, report, config),
        Commands::Sample { count, seed } => commands::sample::execute(count, seed, config),
        Commands::Validate => commands::validate::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
