//! Built-in question banks.

use crate::error::BankError;
use crate::fraction::{MixedNumber, Operator};
use crate::model::{ProblemTemplate, QuizItem, OPTION_COUNT};

/// Fixed number of rounds in an arithmetic session.
pub const QUESTION_CAP: usize = 20;

const BENCHMARK_ITEMS: [(&str, [&str; OPTION_COUNT], usize); 10] = [
    (
        "What is 1/2 as a decimal and percentage?",
        ["0.25 and 25%", "0.5 and 50%", "0.75 and 75%", "0.33 and 33%"],
        1,
    ),
    (
        "What is 1/4 as a decimal and percentage?",
        ["0.25 and 25%", "0.5 and 50%", "0.75 and 75%", "0.33 and 33%"],
        0,
    ),
    (
        "What is 3/4 as a decimal and percentage?",
        ["0.25 and 25%", "0.5 and 50%", "0.75 and 75%", "0.33 and 33%"],
        2,
    ),
    (
        "What is 1/3 as a decimal (rounded to 2 decimal places) and percentage?",
        ["0.30 and 30%", "0.33 and 33%", "0.67 and 67%", "0.40 and 40%"],
        1,
    ),
    (
        "What is 2/3 as a decimal (rounded to 2 decimal places) and percentage?",
        ["0.30 and 30%", "0.33 and 33%", "0.67 and 67%", "0.40 and 40%"],
        2,
    ),
    (
        "What is 1/5 as a decimal and percentage?",
        ["0.1 and 10%", "0.2 and 20%", "0.5 and 50%", "0.25 and 25%"],
        1,
    ),
    (
        "What is 2/5 as a decimal and percentage?",
        ["0.1 and 10%", "0.2 and 20%", "0.4 and 40%", "0.6 and 60%"],
        2,
    ),
    (
        "Which is greater: 3/5 or 2/3?",
        ["3/5", "2/3", "They are equal", "Cannot be determined"],
        1,
    ),
    (
        "Which is greater: 7/10 or 3/4?",
        ["7/10", "3/4", "They are equal", "Cannot be determined"],
        1,
    ),
    (
        "Arrange these fractions from smallest to largest: 1/3, 2/5, 1/2, 3/4",
        [
            "1/3, 2/5, 1/2, 3/4",
            "2/5, 1/3, 1/2, 3/4",
            "1/3, 1/2, 2/5, 3/4",
            "3/4, 1/2, 2/5, 1/3",
        ],
        0,
    ),
];

const fn mixed(whole: u32, numerator: u32, denominator: u32) -> MixedNumber {
    MixedNumber::from_parts(whole, numerator, denominator)
}

const ARITHMETIC_PROBLEMS: [(MixedNumber, Operator, MixedNumber); 8] = [
    (mixed(1, 1, 4), Operator::Add, mixed(0, 2, 3)),
    (mixed(0, 5, 6), Operator::Add, mixed(0, 7, 6)),
    (mixed(4, 1, 5), Operator::Subtract, mixed(3, 1, 2)),
    (mixed(2, 1, 3), Operator::Add, mixed(1, 1, 2)),
    (mixed(0, 3, 4), Operator::Add, mixed(0, 1, 8)),
    (mixed(5, 2, 3), Operator::Subtract, mixed(2, 5, 6)),
    (mixed(1, 3, 10), Operator::Add, mixed(2, 2, 5)),
    (mixed(3, 1, 4), Operator::Subtract, mixed(1, 3, 4)),
];

/// The ten benchmark-fraction questions, in the order they are asked.
pub fn benchmark_bank() -> Vec<QuizItem> {
    BENCHMARK_ITEMS
        .iter()
        .map(|&(text, options, correct_index)| QuizItem {
            text: text.to_string(),
            options: options.map(String::from),
            correct_index,
        })
        .collect()
}

/// The eight arithmetic problems sampled by the arithmetic quiz.
pub fn arithmetic_bank() -> Vec<ProblemTemplate> {
    ARITHMETIC_PROBLEMS
        .iter()
        .map(|&(left, operator, right)| ProblemTemplate::new(left, operator, right))
        .collect()
}

/// Check that a multiple-choice bank can drive a session.
pub fn validate_items(items: &[QuizItem]) -> Result<(), BankError> {
    if items.is_empty() {
        return Err(BankError::Empty);
    }
    if let Some(item) = items.iter().find(|i| i.correct_index >= OPTION_COUNT) {
        return Err(BankError::CorrectIndexOutOfRange {
            text: item.text.clone(),
            index: item.correct_index,
        });
    }
    Ok(())
}
