//! Session report with JSON export.
//!
//! A report is a snapshot of one quiz session. It is written for the learner
//! or teacher to look at; nothing reads it back into an engine.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::GeoConfig;
use crate::quiz::{AnswerRecord, QuizEngine, ScoreState};
use crate::source::RandomSource;
use crate::statistics::SessionStats;

/// A complete session report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Seed the session was generated from, if it was seeded.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Constants in effect for the session.
    pub config: GeoConfig,
    /// Final score.
    pub score: ScoreState,
    /// Tallies over the answered rounds.
    pub stats: SessionStats,
    /// Every scored answer, in order.
    pub history: Vec<AnswerRecord>,
}

impl SessionReport {
    /// Snapshot the current state of `engine`.
    pub fn from_engine<S: RandomSource>(engine: &QuizEngine<S>, seed: Option<u64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            seed,
            config: engine.config().clone(),
            score: engine.score(),
            stats: engine.stats(),
            history: engine.history().to_vec(),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Score as a percentage of the possible total.
    pub fn percentage(&self) -> f64 {
        if self.score.total_possible == 0 {
            0.0
        } else {
            f64::from(self.score.score) * 100.0 / f64::from(self.score.total_possible)
        }
    }
}
