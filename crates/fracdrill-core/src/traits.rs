//! Presentation ports.
//!
//! The game drivers never draw anything themselves. They hand questions,
//! feedback and the final score to a `Renderer`, and answer sounds to a
//! `CueSink`. The terminal front end implements both; tests record them.

use serde::{Deserialize, Serialize};

use crate::error::CueError;
use crate::model::QuizKind;

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Output surface for a quiz.
pub trait Renderer {
    /// Show a new question or problem.
    fn render_question(&mut self, question: &QuestionView);

    /// Show whether the last answer was right, with a short message.
    fn render_feedback(&mut self, correct: bool, message: &str);

    /// Show the end-of-session score and grade message.
    fn render_final_score(&mut self, score: usize, total: usize, message: &str);
}

/// Everything a renderer needs to show one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub kind: QuizKind,
    /// 1-based question number.
    pub number: usize,
    /// Number of questions in the session.
    pub total: usize,
    /// Question text, or the expression for arithmetic problems.
    pub prompt: String,
    /// Answer options; empty for free-text problems.
    #[serde(default)]
    pub options: Vec<String>,
}

// ---------------------------------------------------------------------------
// Audio cues
// ---------------------------------------------------------------------------

/// Sound played after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Correct,
    Incorrect,
}

impl Cue {
    pub fn for_answer(correct: bool) -> Self {
        if correct {
            Cue::Correct
        } else {
            Cue::Incorrect
        }
    }
}

/// Plays answer cues. Failures are reported but never affect the game.
pub trait CueSink {
    fn play(&mut self, cue: Cue) -> Result<(), CueError>;
}

/// A sink that plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCues;

impl CueSink for SilentCues {
    fn play(&mut self, _: Cue) -> Result<(), CueError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_follows_correctness() {
        assert_eq!(Cue::for_answer(true), Cue::Correct);
        assert_eq!(Cue::for_answer(false), Cue::Incorrect);
    }

    #[test]
    fn silent_cues_never_fail() {
        let mut sink = SilentCues;
        assert!(sink.play(Cue::Correct).is_ok());
        assert!(sink.play(Cue::Incorrect).is_ok());
    }
}
