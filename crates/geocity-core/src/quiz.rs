//! Practice quiz state machine.
//!
//! The engine owns the current round and the running score. A round is
//! generated in the `AwaitingAnswer` phase, scored exactly once by
//! [`QuizEngine::submit_answer`], and then replaced wholesale by the next
//! call to [`QuizEngine::generate_new_question`].
//!
//! Every random choice goes through a [`RandomSource`], in this order:
//! question type (`below(3)`), theme (`below(2)`), then for intersecting
//! questions one `below(angle_span)` draw per sampling attempt.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::GeoConfig;
use crate::error::ConfigError;
use crate::model::{Relationship, Theme};
use crate::source::{RandomSource, RngSource};
use crate::statistics::SessionStats;

/// One practice question and its answer state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizRound {
    /// Ground truth the learner must identify.
    pub question_type: Relationship,
    /// Angle of the moving line relative to the horizontal base line.
    pub display_angle: i32,
    /// Cosmetic theme.
    pub theme: Theme,
    /// Whether an answer has been scored for this round.
    pub answered: bool,
    /// `None` until answered.
    pub is_correct: Option<bool>,
}

impl QuizRound {
    fn open(question_type: Relationship, display_angle: i32, theme: Theme) -> Self {
        Self {
            question_type,
            display_angle,
            theme,
            answered: false,
            is_correct: None,
        }
    }
}

/// Cumulative score for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u32,
    pub total_possible: u32,
}

impl ScoreState {
    fn record(&mut self, correct: bool, increment: u32) {
        self.total_possible = self.total_possible.saturating_add(increment);
        if correct {
            self.score = self.score.saturating_add(increment);
        }
    }
}

/// Where the engine is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    AwaitingAnswer,
    Answered,
}

/// A scored answer, kept in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_type: Relationship,
    pub display_angle: i32,
    pub theme: Theme,
    pub choice: Relationship,
    pub correct: bool,
}

/// Draw an intersecting angle that clears the degeneracy guard.
///
/// Gives up after `config.max_attempts` rejected draws and returns the
/// smallest valid angle in the range instead.
pub fn draw_intersecting_angle<S: RandomSource>(config: &GeoConfig, source: &mut S) -> i32 {
    for _ in 0..config.max_attempts {
        let candidate = config
            .angle_min
            .saturating_add_unsigned(source.below(config.angle_span));
        if !config.is_degenerate(candidate) {
            return candidate;
        }
    }

    let fallback = config.first_valid_angle().unwrap_or(config.angle_min);
    tracing::warn!(
        attempts = config.max_attempts,
        fallback,
        "rejection sampling exhausted, using fallback angle"
    );
    fallback
}

/// Build a fresh, unanswered round.
///
/// With `forced` set, the question type is taken from it and no type draw is
/// made; theme and angle follow the usual rules.
pub fn generate_round<S: RandomSource>(
    config: &GeoConfig,
    source: &mut S,
    forced: Option<Relationship>,
) -> QuizRound {
    let question_type = forced
        .unwrap_or_else(|| Relationship::ALL[source.below(Relationship::ALL.len() as u32) as usize]);
    let theme = Theme::ALL[source.below(Theme::ALL.len() as u32) as usize];

    let display_angle = match question_type {
        Relationship::Parallel => 0,
        Relationship::Perpendicular => 90,
        Relationship::Intersecting => draw_intersecting_angle(config, source),
    };

    QuizRound::open(question_type, display_angle, theme)
}

/// The practice quiz engine.
#[derive(Debug)]
pub struct QuizEngine<S = RngSource<StdRng>> {
    config: GeoConfig,
    source: S,
    round: QuizRound,
    score: ScoreState,
    history: Vec<AnswerRecord>,
    forced: Option<Relationship>,
}

impl QuizEngine<RngSource<StdRng>> {
    /// An engine whose rounds are reproducible from `seed`.
    pub fn seeded(config: GeoConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, RngSource::seeded(seed))
    }

    /// An engine seeded from operating-system entropy.
    pub fn from_entropy(config: GeoConfig) -> Result<Self, ConfigError> {
        Self::new(config, RngSource::from_entropy())
    }
}

impl<S: RandomSource> QuizEngine<S> {
    /// Validate `config` and open the first round.
    pub fn new(config: GeoConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let round = generate_round(&config, &mut source, None);
        tracing::debug!(?round, "opened first round");

        Ok(Self {
            config,
            source,
            round,
            score: ScoreState::default(),
            history: Vec::new(),
            forced: None,
        })
    }

    /// Discard the current round (answered or not) and open a new one.
    pub fn generate_new_question(&mut self) -> QuizRound {
        let forced = self.forced.take();
        self.round = generate_round(&self.config, &mut self.source, forced);
        tracing::debug!(round = ?self.round, "generated question");
        self.round
    }

    /// Fix the question type of the next generated round.
    pub fn force_next_question(&mut self, question_type: Relationship) {
        self.forced = Some(question_type);
    }

    /// Score `choice` against the open round.
    ///
    /// A round that was already answered is returned unchanged and the score
    /// is left alone.
    pub fn submit_answer(&mut self, choice: Relationship) -> QuizRound {
        if self.round.answered {
            tracing::debug!(%choice, "ignoring answer to an already answered round");
            return self.round;
        }

        let correct = choice == self.round.question_type;
        self.score.record(correct, self.config.score_increment);
        self.round.answered = true;
        self.round.is_correct = Some(correct);

        self.history.push(AnswerRecord {
            question_type: self.round.question_type,
            display_angle: self.round.display_angle,
            theme: self.round.theme,
            choice,
            correct,
        });

        tracing::debug!(
            %choice,
            expected = %self.round.question_type,
            correct,
            score = self.score.score,
            total = self.score.total_possible,
            "answer scored"
        );
        self.round
    }

    pub fn phase(&self) -> QuizPhase {
        if self.round.answered {
            QuizPhase::Answered
        } else {
            QuizPhase::AwaitingAnswer
        }
    }

    pub fn round(&self) -> &QuizRound {
        &self.round
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn config(&self) -> &GeoConfig {
        &self.config
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::from_history(&self.history)
    }

    /// Consume the engine and hand back its random source.
    pub fn into_source(self) -> S {
        self.source
    }
}
