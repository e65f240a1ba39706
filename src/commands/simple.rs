//! Simple interactive CLI mode
//!
//! Text-based game without TUI: every input line is typed into the active
//! row key by key and then submitted.

use crate::core::Word;
use crate::game::{BoardSurface, GameController, GameError, Key, MAX_ROWS, Notice};
use crate::output::{print_outcome, print_scored_row};
use anyhow::Result;
use colored::Colorize;
use log::info;
use std::io::{self, Write};

/// Type `line` into the active row and submit it
///
/// If any key or the submission is rejected the active row is cleared again,
/// so the next line starts from an empty row.
///
/// # Errors
///
/// Returns the first `GameError` raised while typing or submitting.
pub fn submit_line<S: BoardSurface>(
    game: &mut GameController<S>,
    line: &str,
) -> Result<Notice, GameError> {
    let result = line
        .trim()
        .chars()
        .map(Key::from_char)
        .try_for_each(|key| game.dispatch(key).map(|_| ()))
        .and_then(|()| game.dispatch(Key::Submit));

    if result.is_err() {
        while game.on_delete().is_ok() {}
    }
    result
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(target: Word) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Tile Wordle - Text Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in {MAX_ROWS} tries. After each guess:\n");
    println!("  - 🟩 the letter is in the right spot");
    println!("  - 🟨 the letter is in the word, elsewhere");
    println!("  - ⬜ the letter is not in the word\n");
    println!("Commands: 'quit' to exit\n");

    let mut game = GameController::new(target);

    loop {
        let prompt = format!("Guess {}/{MAX_ROWS}", game.attempts_used() + 1);
        let input = get_user_input(&prompt)?;

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        match submit_line(&mut game, &input) {
            Ok(Notice::GuessScored {
                row,
                guess,
                feedback,
                status,
            }) => {
                print_scored_row(row, &guess, &feedback);

                if status.is_over() {
                    print_outcome(status, game.attempts_used(), &target);

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            game = GameController::new(target);
                            info!("New game started");
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(err) if err.is_user_facing() => println!("❌ {}\n", err.to_string().red()),
            Err(err @ (GameError::RowFull | GameError::InvalidKey(_))) => {
                println!("{}\n", format!("Ignored: {err}").bright_black());
            }
            Err(err) => println!("{err}\n"),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
