//! Core data model types for fracdrill.
//!
//! Quiz items for the multiple-choice benchmark quiz, problem templates for
//! the free-text arithmetic quiz, and the quiz kind that tags summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BankError, FractionError};
use crate::fraction::{compute, MixedNumber, Operator};

/// Number of options every multiple-choice item carries.
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question with exactly four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuizItem")]
pub struct QuizItem {
    /// The question shown to the player.
    pub text: String,
    /// The four answer options, in display order.
    pub options: [String; OPTION_COUNT],
    /// Index into `options` of the correct answer.
    pub correct_index: usize,
}

impl QuizItem {
    /// Build an item, checking that `correct_index` addresses an option.
    pub fn new(
        text: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_index: usize,
    ) -> Result<Self, BankError> {
        let text = text.into();
        if correct_index >= OPTION_COUNT {
            return Err(BankError::CorrectIndexOutOfRange {
                text,
                index: correct_index,
            });
        }
        Ok(Self {
            text,
            options: options.map(String::from),
            correct_index,
        })
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// Unchecked wire form of a `QuizItem`.
#[derive(Deserialize)]
struct RawQuizItem {
    text: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
}

impl TryFrom<RawQuizItem> for QuizItem {
    type Error = BankError;

    fn try_from(raw: RawQuizItem) -> Result<Self, Self::Error> {
        if raw.correct_index >= OPTION_COUNT {
            return Err(BankError::CorrectIndexOutOfRange {
                text: raw.text,
                index: raw.correct_index,
            });
        }
        Ok(Self {
            text: raw.text,
            options: raw.options,
            correct_index: raw.correct_index,
        })
    }
}

/// One addition or subtraction of two mixed numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemTemplate {
    pub left: MixedNumber,
    pub operator: Operator,
    pub right: MixedNumber,
}

impl ProblemTemplate {
    pub fn new(left: MixedNumber, operator: Operator, right: MixedNumber) -> Self {
        Self {
            left,
            operator,
            right,
        }
    }

    /// The canonical answer string for this problem.
    pub fn answer(&self) -> Result<String, FractionError> {
        compute(&self.left, self.operator, &self.right)
    }

    /// The problem as shown to the player, e.g. `"1 1/4 + 2/3"`.
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.left, self.operator, self.right)
    }
}

/// Which of the two drills a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizKind {
    Benchmark,
    Arithmetic,
}

impl QuizKind {
    pub fn title(&self) -> &'static str {
        match self {
            QuizKind::Benchmark => "Benchmark Fractions Quiz",
            QuizKind::Arithmetic => "Fraction Arithmetic Quiz",
        }
    }
}

impl fmt::Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizKind::Benchmark => write!(f, "benchmark"),
            QuizKind::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_rejects_out_of_range_index() {
        let err = QuizItem::new("q", ["a", "b", "c", "d"], 4).unwrap_err();
        assert!(matches!(
            err,
            BankError::CorrectIndexOutOfRange { index: 4, .. }
        ));
    }

    #[test]
    fn correct_option_follows_index() {
        let item = QuizItem::new("q", ["a", "b", "c", "d"], 2).unwrap();
        assert_eq!(item.correct_option(), "c");
        assert!(item.is_correct(2));
        assert!(!item.is_correct(0));
    }

    #[test]
    fn problem_expression_and_answer() {
        let problem = ProblemTemplate::new(
            MixedNumber::new(4, 1, 5).unwrap(),
            Operator::Subtract,
            MixedNumber::new(3, 1, 2).unwrap(),
        );
        assert_eq!(problem.expression(), "4 1/5 - 3 1/2");
        assert_eq!(problem.answer().unwrap(), "7/10");
    }

    #[test]
    fn deserialized_item_is_validated() {
        let err = serde_json::from_str::<QuizItem>(
            r#"{"text":"q","options":["a","b","c","d"],"correct_index":9}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("correct option index 9"));

        let item: QuizItem = serde_json::from_str(
            r#"{"text":"q","options":["a","b","c","d"],"correct_index":3}"#,
        )
        .unwrap();
        assert_eq!(item.correct_option(), "d");
    }

    #[test]
    fn deserialized_problem_rejects_zero_denominator() {
        let json = r#"{
            "left": {"whole": 0, "numerator": 1, "denominator": 0},
            "operator": "+",
            "right": {"whole": 0, "numerator": 1, "denominator": 2}
        }"#;
        assert!(serde_json::from_str::<ProblemTemplate>(json).is_err());
    }

    #[test]
    fn quiz_kind_serializes_lowercase() {
        let json = serde_json::to_string(&QuizKind::Arithmetic).unwrap();
        assert_eq!(json, "\"arithmetic\"");
    }
}
