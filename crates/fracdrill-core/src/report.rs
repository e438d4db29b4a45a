//! End-of-session summary with JSON export.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grade::{percentage, Grade};
use crate::model::QuizKind;
use crate::session::Attempt;

/// A finished quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Unique session identifier.
    pub id: Uuid,
    pub quiz: QuizKind,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub score: usize,
    pub total: usize,
    /// Score as a percentage of `total`.
    pub percentage: f64,
    pub grade: Grade,
    /// Grade message shown with the final score.
    pub message: String,
    /// Every answered question, in order.
    pub attempts: Vec<Attempt>,
}

impl SessionSummary {
    pub fn new(
        quiz: QuizKind,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        score: usize,
        total: usize,
        attempts: Vec<Attempt>,
    ) -> Self {
        let grade = Grade::from_score(score, total);
        Self {
            id: Uuid::new_v4(),
            quiz,
            started_at,
            finished_at,
            score,
            total,
            percentage: percentage(score, total),
            grade,
            message: grade.message(quiz).to_string(),
            attempts,
        }
    }

    /// Wall-clock length of the session in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        (self.finished_at - self.started_at)
            .num_milliseconds()
            .try_into()
            .unwrap_or(0)
    }

    /// Attempts that were answered incorrectly.
    pub fn missed(&self) -> impl Iterator<Item = &Attempt> {
        self.attempts.iter().filter(|a| !a.correct)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize session summary")
    }
}
