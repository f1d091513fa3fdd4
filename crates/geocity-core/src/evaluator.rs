//! Relationship evaluator.
//!
//! Decides whether a signed angle (degrees) between two lines satisfies a
//! target relationship, using a symmetric tolerance band around 0° or 90°.

use serde::{Deserialize, Serialize};

use crate::model::Relationship;

/// Half-width of the tolerance band around the target angle, in degrees.
pub const TOLERANCE_DEG: f64 = 2.0;

/// Outcome of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Whether the angle lies inside the target's band.
    pub matched: bool,
    /// The relationship that was tested.
    pub relationship: Relationship,
    /// The angle that was tested.
    pub angle: f64,
}

/// Evaluate `angle` against `target` with the default tolerance.
pub fn evaluate(angle: f64, target: Relationship) -> EvaluationResult {
    evaluate_with_tolerance(angle, target, TOLERANCE_DEG)
}

/// Evaluate `angle` against `target` with an explicit tolerance.
///
/// `Intersecting` matches exactly when neither the parallel nor the
/// perpendicular band does.
pub fn evaluate_with_tolerance(angle: f64, target: Relationship, tolerance: f64) -> EvaluationResult {
    let matched = match target {
        Relationship::Parallel => is_parallel(angle, tolerance),
        Relationship::Perpendicular => is_perpendicular(angle, tolerance),
        Relationship::Intersecting => {
            !is_parallel(angle, tolerance) && !is_perpendicular(angle, tolerance)
        }
    };

    EvaluationResult {
        matched,
        relationship: target,
        angle,
    }
}

/// The relationship an angle falls into with the default tolerance.
pub fn classify(angle: f64) -> Relationship {
    Evaluator::default().classify(angle)
}

fn is_parallel(angle: f64, tolerance: f64) -> bool {
    angle.abs() < tolerance
}

fn is_perpendicular(angle: f64, tolerance: f64) -> bool {
    (angle - 90.0).abs() < tolerance
}

/// An evaluator bound to a configured tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    tolerance: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE_DEG,
        }
    }
}

impl Evaluator {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn evaluate(&self, angle: f64, target: Relationship) -> EvaluationResult {
        evaluate_with_tolerance(angle, target, self.tolerance)
    }

    /// Parallel wins over perpendicular; anything outside both bands is
    /// intersecting.
    pub fn classify(&self, angle: f64) -> Relationship {
        if is_parallel(angle, self.tolerance) {
            Relationship::Parallel
        } else if is_perpendicular(angle, self.tolerance) {
            Relationship::Perpendicular
        } else {
            Relationship::Intersecting
        }
    }
}
