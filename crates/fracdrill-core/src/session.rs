//! Quiz session state machines.
//!
//! Both quizzes move `NotStarted -> InProgress -> Finished` and back to
//! `NotStarted` on restart. Each question accepts exactly one answer; any
//! later answer for the same question is ignored until `advance`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bank::QUESTION_CAP;
use crate::error::{BankError, SessionError};
use crate::model::{ProblemTemplate, QuizItem, OPTION_COUNT};
use crate::normalize::{clean_input, is_correct};
use crate::source::ProblemSource;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "not started"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

/// One answered question, kept for the end-of-session review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// 1-based question number.
    pub number: usize,
    pub prompt: String,
    pub given: String,
    pub expected: String,
    pub correct: bool,
}

/// Outcome of an answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The answer was scored.
    Scored { correct: bool, expected: String },
    /// The question was already answered; nothing changed.
    Ignored,
}

/// Outcome of moving past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new question is active; `number` is 1-based.
    Next { number: usize },
    Finished { score: usize, total: usize },
}

fn require_phase(
    current: Phase,
    expected: Phase,
    action: &'static str,
) -> Result<(), SessionError> {
    if current == expected {
        Ok(())
    } else {
        Err(SessionError::InvalidPhase {
            action,
            phase: current,
        })
    }
}

// ---------------------------------------------------------------------------
// Benchmark quiz
// ---------------------------------------------------------------------------

/// Multiple-choice session over a fixed, ordered bank.
#[derive(Debug, Clone)]
pub struct BenchmarkSession {
    items: Vec<QuizItem>,
    phase: Phase,
    current_index: usize,
    score: usize,
    selected: Option<usize>,
    attempts: Vec<Attempt>,
}

impl BenchmarkSession {
    pub fn new(items: Vec<QuizItem>) -> Result<Self, BankError> {
        crate::bank::validate_items(&items)?;
        Ok(Self {
            items,
            phase: Phase::NotStarted,
            current_index: 0,
            score: 0,
            selected: None,
            attempts: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The option chosen for the current question, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn has_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The active question while the session is in progress.
    pub fn current_item(&self) -> Option<&QuizItem> {
        match self.phase {
            Phase::InProgress => self.items.get(self.current_index),
            _ => None,
        }
    }

    /// Begin from the first question with a zero score.
    pub fn start(&mut self) -> Result<&QuizItem, SessionError> {
        require_phase(self.phase, Phase::NotStarted, "start")?;
        self.reset();
        self.phase = Phase::InProgress;
        tracing::debug!(total = self.items.len(), "benchmark session started");
        Ok(&self.items[0])
    }

    /// Choose option `index` (0-3) for the current question.
    pub fn select(&mut self, index: usize) -> Result<Answer, SessionError> {
        require_phase(self.phase, Phase::InProgress, "select an answer")?;
        if index >= OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange { index });
        }
        if self.selected.is_some() {
            tracing::debug!(index, "answer already selected, ignoring");
            return Ok(Answer::Ignored);
        }

        let item = &self.items[self.current_index];
        let correct = item.is_correct(index);
        let expected = item.correct_option().to_string();

        self.selected = Some(index);
        if correct {
            self.score += 1;
        }
        self.attempts.push(Attempt {
            number: self.current_index + 1,
            prompt: item.text.clone(),
            given: item.options[index].clone(),
            expected: expected.clone(),
            correct,
        });
        tracing::debug!(
            question = self.current_index + 1,
            index,
            correct,
            score = self.score,
            "answer selected"
        );

        Ok(Answer::Scored { correct, expected })
    }

    /// Move to the next question, finishing after the last one.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        require_phase(self.phase, Phase::InProgress, "advance")?;
        if self.selected.is_none() {
            return Err(SessionError::NotAnswered {
                number: self.current_index + 1,
            });
        }

        self.current_index += 1;
        self.selected = None;

        if self.current_index >= self.items.len() {
            self.phase = Phase::Finished;
            tracing::debug!(score = self.score, "benchmark session finished");
            return Ok(Advance::Finished {
                score: self.score,
                total: self.items.len(),
            });
        }

        Ok(Advance::Next {
            number: self.current_index + 1,
        })
    }

    /// Return to the start screen from any phase.
    pub fn restart(&mut self) {
        self.reset();
        self.phase = Phase::NotStarted;
    }

    fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.selected = None;
        self.attempts.clear();
    }
}

// ---------------------------------------------------------------------------
// Arithmetic quiz
// ---------------------------------------------------------------------------

/// The problem currently being asked, with its precomputed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProblem {
    pub template: ProblemTemplate,
    pub answer: String,
}

/// Free-text session of `QUESTION_CAP` rounds sampled from a bank.
#[derive(Debug, Clone)]
pub struct ArithmeticSession {
    problems: Vec<ActiveProblem>,
    phase: Phase,
    question_number: usize,
    score: usize,
    current: Option<usize>,
    answered: bool,
    attempts: Vec<Attempt>,
}

impl ArithmeticSession {
    /// Build a session, solving every problem in the bank up front.
    pub fn new(bank: Vec<ProblemTemplate>) -> Result<Self, BankError> {
        if bank.is_empty() {
            return Err(BankError::Empty);
        }
        let problems = bank
            .into_iter()
            .map(|template| {
                template
                    .answer()
                    .map(|answer| ActiveProblem { template, answer })
                    .map_err(|source| BankError::Unsolvable {
                        expression: template.expression(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            problems,
            phase: Phase::NotStarted,
            question_number: 0,
            score: 0,
            current: None,
            answered: false,
            attempts: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Rounds per session.
    pub fn total(&self) -> usize {
        QUESTION_CAP
    }

    /// 1-based number of the active round; 0 before the first draw and
    /// one past the cap once finished.
    pub fn question_number(&self) -> usize {
        self.question_number
    }

    pub fn has_answered(&self) -> bool {
        self.answered
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The active problem while the session is in progress.
    pub fn current(&self) -> Option<&ActiveProblem> {
        match self.phase {
            Phase::InProgress => self.current.and_then(|i| self.problems.get(i)),
            _ => None,
        }
    }

    /// Reset the score and draw the first problem.
    pub fn start(&mut self, source: &mut dyn ProblemSource) -> Result<&ActiveProblem, SessionError> {
        require_phase(self.phase, Phase::NotStarted, "start")?;
        self.reset();
        self.phase = Phase::InProgress;
        self.question_number = 1;
        let index = self.draw(source);
        tracing::debug!(bank = self.problems.len(), "arithmetic session started");
        Ok(&self.problems[index])
    }

    /// Score typed text against the active problem.
    pub fn submit(&mut self, text: &str) -> Result<Answer, SessionError> {
        require_phase(self.phase, Phase::InProgress, "submit an answer")?;
        if self.answered {
            tracing::debug!("problem already answered, ignoring");
            return Ok(Answer::Ignored);
        }
        let Some(problem) = self.current.and_then(|i| self.problems.get(i)) else {
            return Err(SessionError::InvalidPhase {
                action: "submit an answer",
                phase: self.phase,
            });
        };

        let correct = is_correct(text, &problem.answer);
        let expected = problem.answer.clone();
        self.attempts.push(Attempt {
            number: self.question_number,
            prompt: problem.template.expression(),
            given: clean_input(text),
            expected: expected.clone(),
            correct,
        });

        self.answered = true;
        if correct {
            self.score += 1;
        }
        tracing::debug!(
            question = self.question_number,
            correct,
            score = self.score,
            "answer submitted"
        );

        Ok(Answer::Scored { correct, expected })
    }

    /// Draw the next problem, or finish once the cap is reached.
    pub fn advance(&mut self, source: &mut dyn ProblemSource) -> Result<Advance, SessionError> {
        require_phase(self.phase, Phase::InProgress, "advance")?;
        if !self.answered {
            return Err(SessionError::NotAnswered {
                number: self.question_number,
            });
        }

        self.question_number += 1;
        if self.question_number > QUESTION_CAP {
            self.phase = Phase::Finished;
            self.current = None;
            tracing::debug!(score = self.score, "arithmetic session finished");
            return Ok(Advance::Finished {
                score: self.score,
                total: QUESTION_CAP,
            });
        }

        self.draw(source);
        Ok(Advance::Next {
            number: self.question_number,
        })
    }

    /// Return to the start screen from any phase.
    pub fn restart(&mut self) {
        self.reset();
        self.phase = Phase::NotStarted;
    }

    fn draw(&mut self, source: &mut dyn ProblemSource) -> usize {
        let index = source.next_index(self.problems.len()) % self.problems.len();
        self.current = Some(index);
        self.answered = false;
        index
    }

    fn reset(&mut self) {
        self.question_number = 0;
        self.score = 0;
        self.current = None;
        self.answered = false;
        self.attempts.clear();
    }
}
