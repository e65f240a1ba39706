//! Display functions for command results

use super::formatters::{colored_row, verdict_breakdown};
use crate::core::{Feedback, Verdict, Word};
use crate::game::{GameStatus, MAX_ROWS};
use colored::Colorize;

/// Print the result of checking a single guess
pub fn print_check_result(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {} against {}",
        guess.to_string().bright_yellow().bold(),
        target.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}  {}", colored_row(guess, feedback), feedback.to_emoji());
    println!("  {}", verdict_breakdown(guess, feedback).bright_black());
    println!(
        "\n  Correct: {} | Present: {} | Absent: {}",
        feedback.count(Verdict::Correct).to_string().green(),
        feedback.count(Verdict::Present).to_string().yellow(),
        feedback.count(Verdict::Absent)
    );
}

/// Print one submitted row during a text-mode game
pub fn print_scored_row(row: usize, guess: &Word, feedback: &Feedback) {
    println!(
        "  {}. {}  {}",
        (row + 1).to_string().bright_black(),
        colored_row(guess, feedback),
        feedback.to_emoji()
    );
}

/// Print the end-of-game banner
pub fn print_outcome(status: GameStatus, attempts: usize, target: &Word) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match status {
        GameStatus::Won => {
            println!(
                "{}",
                "    🎉 Congratulations! You won! 🎉    ".bright_green().bold()
            );
            println!(
                "\n  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!("{}", "    Game Over!    ".red().bold());
            println!(
                "\n  Used all {MAX_ROWS} rows. The word was \"{}\"",
                target.to_string().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());
}
