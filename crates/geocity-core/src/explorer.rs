//! Interactive angle explorer.
//!
//! Holds the state of the two hands-on modes: the learner drags the moving
//! line within the mode's slider range and asks for a check against the
//! mode's target relationship.

use serde::{Deserialize, Serialize};

use crate::error::ExplorerError;
use crate::evaluator::{EvaluationResult, Evaluator};
use crate::model::{Mode, Relationship};

/// Kind of message the host should show after the last explorer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Neutral hint, shown after entering a mode or moving the line.
    Info,
    /// The last check matched the target.
    Success,
    /// The last check missed the target.
    Error,
}

/// State of an interactive mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Explorer {
    mode: Mode,
    angle: f64,
    feedback: Feedback,
    evaluator: Evaluator,
}

impl Explorer {
    /// Enter `mode` with its default starting angle.
    pub fn new(mode: Mode) -> Result<Self, ExplorerError> {
        Self::with_evaluator(mode, Evaluator::default())
    }

    pub fn with_evaluator(mode: Mode, evaluator: Evaluator) -> Result<Self, ExplorerError> {
        let angle = default_angle(mode)?;
        Ok(Self {
            mode,
            angle,
            feedback: Feedback::Info,
            evaluator,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// The relationship this mode asks the learner to build.
    pub fn target(&self) -> Relationship {
        match self.mode {
            Mode::Perpendicular => Relationship::Perpendicular,
            _ => Relationship::Parallel,
        }
    }

    /// Inclusive bounds the angle is clamped to.
    pub fn slider_range(&self) -> (f64, f64) {
        match self.mode {
            Mode::Perpendicular => (0.0, 180.0),
            _ => (-45.0, 45.0),
        }
    }

    /// Move the line. Out-of-range values are clamped; NaN is ignored.
    pub fn set_angle(&mut self, value: f64) -> f64 {
        if !value.is_nan() {
            let (min, max) = self.slider_range();
            self.angle = value.clamp(min, max);
        }
        self.feedback = Feedback::Info;
        self.angle
    }

    /// Jump straight to the exact target angle (0° or 90°).
    pub fn snap_to_answer(&mut self) -> f64 {
        self.angle = match self.target() {
            Relationship::Perpendicular => 90.0,
            _ => 0.0,
        };
        self.feedback = Feedback::Info;
        self.angle
    }

    /// Change mode, resetting the angle to the new mode's default.
    pub fn switch_mode(&mut self, mode: Mode) -> Result<(), ExplorerError> {
        self.angle = default_angle(mode)?;
        self.mode = mode;
        self.feedback = Feedback::Info;
        tracing::debug!(%mode, angle = self.angle, "switched explorer mode");
        Ok(())
    }

    /// Evaluate the current angle against the mode's target.
    pub fn check(&mut self) -> EvaluationResult {
        let result = self.evaluator.evaluate(self.angle, self.target());
        self.feedback = if result.matched {
            Feedback::Success
        } else {
            Feedback::Error
        };
        result
    }
}

/// Starting angle of an interactive mode: deliberately off-target.
pub fn default_angle(mode: Mode) -> Result<f64, ExplorerError> {
    match mode {
        Mode::Parallel => Ok(15.0),
        Mode::Perpendicular => Ok(75.0),
        Mode::Practice => Err(ExplorerError::NotInteractive(mode)),
    }
}
