//! geocity-core — Angle relationship evaluator and quiz state machine.
//!
//! This crate holds the pure logic behind the geocity teaching tool:
//! classifying the angle between two lines against a tolerance band, and
//! running the practice quiz (question generation, answer scoring).

pub mod config;
pub mod error;
pub mod evaluator;
pub mod explorer;
pub mod model;
pub mod quiz;
pub mod report;
pub mod source;
pub mod statistics;

pub use config::{load_config, load_config_from, GeoConfig};
pub use error::{ConfigError, ExplorerError};
pub use evaluator::{classify, evaluate, EvaluationResult, Evaluator, TOLERANCE_DEG};
pub use explorer::{Explorer, Feedback};
pub use model::{Mode, Relationship, Theme};
pub use quiz::{AnswerRecord, QuizEngine, QuizPhase, QuizRound, ScoreState};
pub use source::{RandomSource, RngSource, ScriptedSource};
