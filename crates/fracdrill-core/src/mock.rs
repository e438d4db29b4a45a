//! Recording renderer and cue sinks for testing game drivers without a
//! display surface.

use crate::error::CueError;
use crate::traits::{Cue, CueSink, QuestionView, Renderer};

/// One call made to a `RecordingRenderer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Question(QuestionView),
    Feedback { correct: bool, message: String },
    FinalScore {
        score: usize,
        total: usize,
        message: String,
    },
}

/// A renderer that keeps every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    calls: Vec<Rendered>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[Rendered] {
        &self.calls
    }

    pub fn last(&self) -> Option<&Rendered> {
        self.calls.last()
    }

    /// Questions rendered so far.
    pub fn questions(&self) -> Vec<&QuestionView> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Rendered::Question(q) => Some(q),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render_question(&mut self, question: &QuestionView) {
        self.calls.push(Rendered::Question(question.clone()));
    }

    fn render_feedback(&mut self, correct: bool, message: &str) {
        self.calls.push(Rendered::Feedback {
            correct,
            message: message.to_string(),
        });
    }

    fn render_final_score(&mut self, score: usize, total: usize, message: &str) {
        self.calls.push(Rendered::FinalScore {
            score,
            total,
            message: message.to_string(),
        });
    }
}

/// A cue sink that records cues and optionally refuses to play them.
#[derive(Debug, Default, Clone)]
pub struct RecordingCues {
    played: Vec<Cue>,
    refuse: bool,
}

impl RecordingCues {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every `play` fails, like a blocked autoplay.
    pub fn refusing() -> Self {
        Self {
            played: Vec::new(),
            refuse: true,
        }
    }

    pub fn played(&self) -> &[Cue] {
        &self.played
    }
}

impl CueSink for RecordingCues {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        self.played.push(cue);
        if self.refuse {
            return Err(CueError::Playback("autoplay blocked".into()));
        }
        Ok(())
    }
}
