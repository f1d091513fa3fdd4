//! Session tallies and question-type distribution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Relationship;
use crate::quiz::{AnswerRecord, QuizRound};

/// Answered/correct counts for one relationship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipStats {
    /// Rounds of this type that were answered.
    pub asked: u32,
    /// Of those, how many were answered correctly.
    pub correct: u32,
}

impl RelationshipStats {
    pub fn accuracy(&self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.asked)
        }
    }
}

/// Summary of every answer scored in a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub answered: u32,
    pub correct: u32,
    /// Keyed by the question's ground truth.
    pub per_relationship: BTreeMap<Relationship, RelationshipStats>,
}

impl SessionStats {
    pub fn from_history(history: &[AnswerRecord]) -> Self {
        let mut stats = SessionStats::default();
        for record in history {
            let entry = stats
                .per_relationship
                .entry(record.question_type)
                .or_default();
            entry.asked += 1;
            stats.answered += 1;
            if record.correct {
                entry.correct += 1;
                stats.correct += 1;
            }
        }
        stats
    }

    /// Fraction of answers that were correct; 0.0 for an empty session.
    pub fn accuracy(&self) -> f64 {
        if self.answered == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.answered)
        }
    }

    /// The relationship with the lowest accuracy, if any was asked.
    pub fn weakest(&self) -> Option<Relationship> {
        self.per_relationship
            .iter()
            .min_by(|(_, a), (_, b)| a.accuracy().total_cmp(&b.accuracy()))
            .map(|(r, _)| *r)
    }
}

/// How many rounds of each question type were generated.
pub fn type_distribution(rounds: &[QuizRound]) -> BTreeMap<Relationship, usize> {
    let mut counts = BTreeMap::new();
    for round in rounds {
        *counts.entry(round.question_type).or_insert(0) += 1;
    }
    counts
}
