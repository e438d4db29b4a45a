//! The `fracdrill arithmetic` command.

use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use fracdrill_core::bank::arithmetic_bank;
use fracdrill_core::config::load_config_from;
use fracdrill_core::game::ArithmeticGame;
use fracdrill_core::model::QuizKind;
use fracdrill_core::session::{Advance, Answer, Phase};
use fracdrill_core::source::RandomSource;

use crate::terminal::{self, TerminalRenderer};

pub async fn execute(seed: Option<u64>, json: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let seed = seed.or(config.seed);
    tracing::debug!(?seed, "arithmetic settings");

    let mut game = ArithmeticGame::new(
        arithmetic_bank(),
        TerminalRenderer,
        RandomSource::new(seed),
    )?;

    terminal::print_intro(
        QuizKind::Arithmetic,
        "Type answers like 3, 2/3 or 1 1/4 in simplest form. Type q to quit.",
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        match game.phase() {
            Phase::NotStarted => game.on_start()?,
            Phase::InProgress if game.awaiting_answer() => {
                if input.is_empty() {
                    println!("Type your answer, e.g. 1 3/4.");
                } else if let Answer::Scored { .. } = game.on_answer_submitted(input)? {
                    println!("Press Enter to continue.");
                }
            }
            Phase::InProgress if input.eq_ignore_ascii_case("r") => {
                game.on_restart();
                terminal::print_start_prompt();
            }
            Phase::InProgress => {
                if let Advance::Finished { .. } = game.on_advance()? {
                    terminal::report_finish(game.summary(), json)?;
                }
            }
            Phase::Finished if input.eq_ignore_ascii_case("r") => {
                game.on_restart();
                terminal::print_start_prompt();
            }
            Phase::Finished => terminal::print_restart_prompt(),
        }
    }

    Ok(())
}
