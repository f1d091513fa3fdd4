//! Library error types.
//!
//! The evaluator and the quiz engine have no failure modes; these errors only
//! cover building them from bad configuration or asking for an interactive
//! mode that doesn't exist.

use thiserror::Error;

use crate::model::Mode;

/// Reasons a [`GeoConfig`](crate::config::GeoConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The tolerance band must be a positive, finite number of degrees.
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    /// The degeneracy guard must be non-negative and finite.
    #[error("guard width must be non-negative and finite, got {0}")]
    InvalidGuard(f64),

    /// A zero increment would make every answer worthless.
    #[error("score increment must be at least 1")]
    ZeroIncrement,

    /// The intersecting-angle range holds no values.
    #[error("intersecting angle span must be at least 1")]
    EmptySpan,

    /// Every integer in the range falls inside the guard, so rejection
    /// sampling could never produce an intersecting question.
    #[error("no angle in [{min}, {max}) clears the {guard}° guard")]
    NoValidIntersectingAngle { min: i32, max: i32, guard: f64 },

    /// Rejection sampling needs at least one draw.
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}

/// Errors raised by the interactive explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExplorerError {
    /// The practice quiz has no adjustable angle.
    #[error("mode '{0}' is not an interactive mode")]
    NotInteractive(Mode),
}
