//! Core domain types for Wordle
//!
//! Words, verdicts and the guess evaluator. Everything here is pure and
//! independent of the game session and any terminal front end.

mod evaluator;
mod feedback;
mod word;

pub use evaluator::evaluate;
pub use feedback::{Feedback, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
