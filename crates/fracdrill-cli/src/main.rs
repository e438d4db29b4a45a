//! fracdrill CLI: fraction quizzes in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "fracdrill", version, about = "Fraction quizzes for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ten multiple-choice questions on benchmark fractions
    Benchmark {
        /// Pause after each answer before the next question, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Do not ring the terminal bell after answers
        #[arg(long)]
        no_sound: bool,

        /// Print the session summary as JSON when finished
        #[arg(long)]
        json: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Twenty rounds of adding and subtracting mixed numbers
    Arithmetic {
        /// Seed for the problem order
        #[arg(long)]
        seed: Option<u64>,

        /// Print the session summary as JSON when finished
        #[arg(long)]
        json: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Add or subtract two mixed numbers, e.g. `solve "1 1/4" + 2/3`
    Solve {
        /// Left operand ("3", "2/3" or "1 1/4")
        left: String,

        /// Operator: + or -
        #[arg(allow_hyphen_values = true)]
        operator: String,

        /// Right operand
        right: String,
    },

    /// List a built-in question bank
    Bank {
        #[arg(value_enum)]
        quiz: commands::bank::BankArg,
    },

    /// Create a starter fracdrill.toml
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fracdrill=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Benchmark {
            delay_ms,
            no_sound,
            json,
            config,
        } => commands::benchmark::execute(delay_ms, no_sound, json, config).await,
        Commands::Arithmetic { seed, json, config } => {
            commands::arithmetic::execute(seed, json, config).await
        }
        Commands::Solve {
            left,
            operator,
            right,
        } => commands::solve::execute(&left, &operator, &right),
        Commands::Bank { quiz } => commands::bank::execute(quiz),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
