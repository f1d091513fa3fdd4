//! Core data model types for geocity.
//!
//! These enumerations are shared by the evaluator, the explorer and the quiz
//! engine, and are what a host renders and sends back as answer choices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The geometric relationship between two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// Lines never cross (angle difference ≈ 0°).
    Parallel,
    /// Lines cross at ≈ 90°.
    Perpendicular,
    /// Lines cross at an angle distinctly different from 0° and 90°.
    Intersecting,
}

impl Relationship {
    /// All relationships, in question-selection order.
    pub const ALL: [Relationship; 3] = [
        Relationship::Parallel,
        Relationship::Perpendicular,
        Relationship::Intersecting,
    ];
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relationship::Parallel => write!(f, "parallel"),
            Relationship::Perpendicular => write!(f, "perpendicular"),
            Relationship::Intersecting => write!(f, "intersecting"),
        }
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parallel" | "par" => Ok(Relationship::Parallel),
            "perpendicular" | "perp" => Ok(Relationship::Perpendicular),
            "intersecting" | "int" => Ok(Relationship::Intersecting),
            other => Err(format!("unknown relationship: {other}")),
        }
    }
}

/// Cosmetic theme of a quiz round. Has no effect on correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Rail,
    Road,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Rail, Theme::Road];
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Rail => write!(f, "rail"),
            Theme::Road => write!(f, "road"),
        }
    }
}

/// The screens of the tool: two interactive modes and the practice quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Parallel,
    Perpendicular,
    Practice,
}

impl Mode {
    /// Whether the learner adjusts an angle directly in this mode.
    pub fn is_interactive(self) -> bool {
        !matches!(self, Mode::Practice)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Parallel => write!(f, "parallel"),
            Mode::Perpendicular => write!(f, "perpendicular"),
            Mode::Practice => write!(f, "practice"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parallel" | "par" => Ok(Mode::Parallel),
            "perpendicular" | "perp" => Ok(Mode::Perpendicular),
            "practice" | "quiz" => Ok(Mode::Practice),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}
