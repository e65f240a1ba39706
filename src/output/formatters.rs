//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn colored_tile(letter: u8, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black().bold(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| colored_tile(letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters and verdict names side by side, e.g. "E:present R:absent"
#[must_use]
pub fn verdict_breakdown(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, verdict)| format!("{}:{verdict}", char::from(letter)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn breakdown_lists_every_position() {
        let guess = Word::new("erase").unwrap();
        let target = Word::new("speed").unwrap();
        let feedback = evaluate(&guess, &target);

        assert_eq!(
            verdict_breakdown(&guess, &feedback),
            "E:present R:absent A:absent S:present E:present"
        );
    }

    #[test]
    fn colored_row_contains_letters() {
        colored::control::set_override(false);
        let guess = Word::new("words").unwrap();
        let row = colored_row(&guess, &Feedback::PERFECT);
        assert_eq!(row, " W   O   R   D   S ");
    }
}
