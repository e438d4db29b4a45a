//! The `fracdrill benchmark` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use fracdrill_core::bank::benchmark_bank;
use fracdrill_core::config::load_config_from;
use fracdrill_core::game::BenchmarkGame;
use fracdrill_core::model::QuizKind;
use fracdrill_core::session::{Advance, Answer, Phase};
use fracdrill_core::timer::wait_for;

use crate::terminal::{self, TerminalCues, TerminalRenderer};

type Game = BenchmarkGame<TerminalRenderer, TerminalCues>;

pub async fn execute(
    delay_ms: Option<u64>,
    no_sound: bool,
    json: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let delay = delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.advance_delay());
    let sound = config.sound && !no_sound;
    tracing::debug!(?delay, sound, "benchmark settings");

    let mut game = BenchmarkGame::new(
        benchmark_bank(),
        TerminalRenderer,
        TerminalCues::new(sound),
        delay,
    )?;

    terminal::print_intro(
        QuizKind::Benchmark,
        "Answer with 1-4 or a-d. Type r to restart, q to quit.",
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    loop {
        if !input_open && game.pending_advance().is_none() {
            break;
        }

        tokio::select! {
            biased;
            _ = wait_for(game.pending_advance()) => {
                advance(&mut game, json)?;
            }
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                if !handle_line(&mut game, line.trim(), json)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one line of input. Returns false when the user quits.
fn handle_line(game: &mut Game, input: &str, json: bool) -> Result<bool> {
    if input.eq_ignore_ascii_case("q") {
        return Ok(false);
    }
    if input.eq_ignore_ascii_case("r") && game.phase() != Phase::NotStarted {
        game.on_restart();
        terminal::print_start_prompt();
        return Ok(true);
    }

    match game.phase() {
        Phase::NotStarted => game.on_start()?,
        Phase::InProgress => match terminal::parse_choice(input) {
            Some(index) => {
                let outcome = game.on_answer_selected(index)?;
                if matches!(outcome, Answer::Scored { .. }) && game.advance_delay().is_zero() {
                    advance(game, json)?;
                }
            }
            // Still showing feedback; the timer moves on by itself.
            None if game.session().has_answered() => {}
            None => println!("Choose 1-4 (or a-d)."),
        },
        Phase::Finished => terminal::print_restart_prompt(),
    }
    Ok(true)
}

fn advance(game: &mut Game, json: bool) -> Result<()> {
    if let Advance::Finished { .. } = game.on_advance()? {
        terminal::report_finish(game.summary(), json)?;
    }
    Ok(())
}
