//! Error types for the fracdrill core.
//!
//! Wrong answers are outcomes, not errors. These types cover invalid input to
//! the arithmetic engine, malformed bank items, out-of-phase session calls,
//! and audio cue failures that callers are expected to swallow.

use thiserror::Error;

use crate::session::Phase;

/// Errors raised by the fraction arithmetic engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A mixed number was built with a zero denominator.
    #[error("denominator must be non-zero")]
    ZeroDenominator,

    /// `simplify` was called with a denominator that is zero or negative.
    #[error("denominator must be positive, got {0}")]
    NonPositiveDenominator(i64),

    /// An intermediate product did not fit in 64 bits.
    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    /// Text could not be read as a mixed number or operator.
    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: &'static str },
}

/// Errors raised while building a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// The correct-option index does not address one of the four options.
    #[error("correct option index {index} is out of range for '{text}'")]
    CorrectIndexOutOfRange { text: String, index: usize },

    /// A bank must contain at least one item.
    #[error("question bank is empty")]
    Empty,

    /// A problem's answer cannot be computed.
    #[error("cannot solve '{expression}'")]
    Unsolvable {
        expression: String,
        #[source]
        source: FractionError,
    },
}

/// Errors raised by session transitions called out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The operation is not valid in the current phase.
    #[error("cannot {action} while {phase}")]
    InvalidPhase { action: &'static str, phase: Phase },

    /// `advance` was called before the current question was answered.
    #[error("question {number} has not been answered yet")]
    NotAnswered { number: usize },

    /// The selected option does not exist.
    #[error("option {index} is out of range (0-3)")]
    OptionOutOfRange { index: usize },
}

/// Errors raised by an audio cue sink.
#[derive(Debug, Error)]
pub enum CueError {
    /// The output device refused to play the cue.
    #[error("cue playback prevented: {0}")]
    Playback(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_names_phase() {
        let err = SessionError::InvalidPhase {
            action: "select an answer",
            phase: Phase::Finished,
        };
        assert_eq!(err.to_string(), "cannot select an answer while finished");
    }

    #[test]
    fn parse_error_quotes_input() {
        let err = FractionError::Parse {
            input: "1//2".into(),
            reason: "expected one '/'",
        };
        assert!(err.to_string().contains("'1//2'"));
    }
}
