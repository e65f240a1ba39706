//! Tile Wordle - CLI
//!
//! Terminal Wordle with a TUI and a plain text mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::Path;
use tile_wordle::{
    commands::{check_guess, run_simple},
    core::Word,
    interactive::{App, run_tui},
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "tile_wordle",
    about = "Guess the hidden 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target word to guess
    #[arg(short, long, global = true, default_value = "WORDS")]
    target: String,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "tile_wordle.log")]
    log_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (one guess per line, no TUI)
    Simple,

    /// Score a single guess against the target
    Check {
        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(&command, cli.log_level, Path::new(&cli.log_file))?;

    let target = Word::new(&cli.target).context("Invalid target word")?;

    match command {
        Commands::Play => run_tui(App::new(target)),
        Commands::Simple => run_simple(target),
        Commands::Check { guess } => {
            let result = check_guess(&guess, &target).context("Invalid guess")?;
            print_check_result(&result.guess, &target, &result.feedback);
            Ok(())
        }
    }
}

/// Set up `env_logger`; the TUI logs to a file to keep the screen clean
fn init_logging(command: &Commands, level: LevelFilter, log_file: &Path) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if matches!(command, Commands::Play) && level != LevelFilter::Off {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
