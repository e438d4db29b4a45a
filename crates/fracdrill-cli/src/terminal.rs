//! Terminal presentation: renderer, bell cues, input parsing and the
//! end-of-session review table.

use std::io::Write;

use anyhow::Result;
use comfy_table::{Cell, Table};

use fracdrill_core::error::CueError;
use fracdrill_core::model::{QuizKind, OPTION_COUNT};
use fracdrill_core::report::SessionSummary;
use fracdrill_core::traits::{Cue, CueSink, QuestionView, Renderer};

const OPTION_LETTERS: [char; OPTION_COUNT] = ['a', 'b', 'c', 'd'];

/// Writes quiz screens to stdout.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render_question(&mut self, question: &QuestionView) {
        println!();
        match question.kind {
            QuizKind::Benchmark => {
                println!("Question {} of {}", question.number, question.total);
                println!("{}", question.prompt);
                for (i, option) in question.options.iter().enumerate() {
                    println!("  {}) {option}", i + 1);
                }
            }
            QuizKind::Arithmetic => {
                println!(
                    "Problem {} of {}: {} = ?",
                    question.number, question.total, question.prompt
                );
            }
        }
    }

    fn render_feedback(&mut self, correct: bool, message: &str) {
        let mark = if correct { "[+]" } else { "[x]" };
        println!("{mark} {message}");
    }

    fn render_final_score(&mut self, score: usize, total: usize, message: &str) {
        println!();
        println!("Final score: {score} / {total}");
        println!("{message}");
    }
}

/// Rings the terminal bell for answer cues when enabled.
#[derive(Debug, Clone, Copy)]
pub struct TerminalCues {
    bell: bool,
}

impl TerminalCues {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl CueSink for TerminalCues {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        if !self.bell {
            return Ok(());
        }
        let mut err = std::io::stderr().lock();
        // One ring for a right answer, two for a wrong one.
        let rings = match cue {
            Cue::Correct => "\x07",
            Cue::Incorrect => "\x07\x07",
        };
        err.write_all(rings.as_bytes())?;
        err.flush()?;
        Ok(())
    }
}

/// Read `1`-`4` or `a`-`d` as a 0-based option index.
pub fn parse_choice(input: &str) -> Option<usize> {
    let input = input.trim().to_ascii_lowercase();
    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if let Some(digit) = c.to_digit(10) {
        let digit = digit as usize;
        return (1..=OPTION_COUNT).contains(&digit).then(|| digit - 1);
    }
    OPTION_LETTERS.iter().position(|&l| l == c)
}

pub fn print_intro(kind: QuizKind, blurb: &str) {
    println!("{}", kind.title());
    println!("{blurb}");
    print_start_prompt();
}

pub fn print_start_prompt() {
    println!("Press Enter to start (q to quit).");
}

pub fn print_restart_prompt() {
    println!("Type r to play again or q to quit.");
}

/// Print the review table and, when asked, the JSON summary.
pub fn report_finish(summary: Option<&SessionSummary>, json: bool) -> Result<()> {
    let Some(summary) = summary else {
        return Ok(());
    };

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", ""]);
    for attempt in &summary.attempts {
        table.add_row(vec![
            Cell::new(attempt.number),
            Cell::new(&attempt.prompt),
            Cell::new(&attempt.given),
            Cell::new(&attempt.expected),
            Cell::new(if attempt.correct { "ok" } else { "miss" }),
        ]);
    }
    println!("\n{table}");

    if json {
        println!("{}", summary.to_json()?);
    }

    print_restart_prompt();
    Ok(())
}
