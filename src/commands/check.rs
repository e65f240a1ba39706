//! One-shot guess check
//!
//! Scores a single guess against the target without starting a session.

use crate::core::{Feedback, Word, WordError, evaluate};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Parse `guess` and evaluate it against `target`
///
/// # Errors
///
/// Returns a `WordError` if the guess is not a valid 5-letter word.
pub fn check_guess(guess: &str, target: &Word) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let feedback = evaluate(&guess, target);
    Ok(CheckResult { guess, feedback })
}
