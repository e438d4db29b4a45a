//! End-of-session feedback tiers.

use serde::{Deserialize, Serialize};

use crate::model::QuizKind;

/// Feedback tier for a finished session, from the share of correct answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// At least 90%.
    Excellent,
    /// At least 70%.
    Great,
    /// At least 50%.
    Good,
    KeepPracticing,
}

impl Grade {
    /// Grade `score` out of `total`. An empty session grades as `KeepPracticing`.
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return Grade::KeepPracticing;
        }
        // Integer comparison keeps 9/10 and 18/20 exactly on the boundary.
        let at_least = |percent: u64| (score as u64) * 100 >= percent * total as u64;
        if at_least(90) {
            Grade::Excellent
        } else if at_least(70) {
            Grade::Great
        } else if at_least(50) {
            Grade::Good
        } else {
            Grade::KeepPracticing
        }
    }

    /// The message shown with the final score.
    pub fn message(&self, kind: QuizKind) -> &'static str {
        match (kind, self) {
            (QuizKind::Benchmark, Grade::Excellent) => {
                "Excellent! You've mastered benchmark fractions!"
            }
            (QuizKind::Benchmark, Grade::Great) => {
                "Great job! You understand benchmark fractions well!"
            }
            (QuizKind::Benchmark, Grade::Good) => {
                "Good effort! Review benchmark fractions to improve."
            }
            (QuizKind::Benchmark, Grade::KeepPracticing) => {
                "Keep practicing! Benchmark fractions are essential for math success."
            }
            (QuizKind::Arithmetic, Grade::Excellent) => {
                "Outstanding! You add and subtract fractions like a pro!"
            }
            (QuizKind::Arithmetic, Grade::Great) => {
                "Great work! Your fraction arithmetic is strong."
            }
            (QuizKind::Arithmetic, Grade::Good) => {
                "Good effort! Review common denominators and simplifying."
            }
            (QuizKind::Arithmetic, Grade::KeepPracticing) => {
                "Keep practicing! Find a common denominator first, then simplify."
            }
        }
    }
}

/// Score as a percentage of `total`, `0.0` for an empty session.
pub fn percentage(score: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    score as f64 * 100.0 / total as f64
}
