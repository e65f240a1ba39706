//! Guess evaluation
//!
//! Scores a guess against the target word using Wordle's duplicate-safe rules.
//!
//! # Algorithm
//! 1. Exact-match pass: equal letters at the same position are Correct, and both
//!    positions are consumed
//! 2. Relocation pass: every unconsumed guess position, in ascending order, takes
//!    the first unconsumed target position holding the same letter and is Present
//! 3. Everything else stays Absent
//!
//! A target position is consumed at most once, so a letter never earns more
//! Correct + Present verdicts than it has occurrences in the target.

use super::feedback::{Feedback, Verdict};
use super::word::{WORD_LENGTH, Word};
use log::debug;

/// Evaluate `guess` against `target`
///
/// # Examples
/// ```
/// use tile_wordle::core::{Verdict, Word, evaluate};
///
/// let target = Word::new("speed").unwrap();
/// let guess = Word::new("erase").unwrap();
/// let feedback = evaluate(&guess, &target);
///
/// // E(present) R(absent) A(absent) S(present) E(present)
/// assert_eq!(feedback.count(Verdict::Present), 3);
/// assert_eq!(feedback.count(Verdict::Correct), 0);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    let guess_letters = guess.letters();
    let target_letters = target.letters();

    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    let mut guess_consumed = [false; WORD_LENGTH];
    let mut target_consumed = [false; WORD_LENGTH];

    debug!("Evaluating {guess} against {target}");

    // Exact-match pass
    // Allow: Index needed to access both words and both consumed arrays
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess_letters[i] == target_letters[i] {
            verdicts[i] = Verdict::Correct;
            guess_consumed[i] = true;
            target_consumed[i] = true;
            debug!("Position {i}: {} is correct", char::from(guess_letters[i]));
        }
    }

    // Relocation pass
    for i in 0..WORD_LENGTH {
        if guess_consumed[i] {
            continue;
        }

        let letter = guess_letters[i];
        let found = (0..WORD_LENGTH).find(|&j| !target_consumed[j] && target_letters[j] == letter);

        if let Some(j) = found {
            verdicts[i] = Verdict::Present;
            target_consumed[j] = true;
            debug!(
                "Position {i}: {} is present (target position {j})",
                char::from(letter)
            );
        } else {
            debug!("Position {i}: {} is absent", char::from(letter));
        }
    }

    let feedback = Feedback::new(verdicts);
    debug!("Result for {guess}: {feedback}");
    feedback
}
