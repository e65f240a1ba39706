//! Terminal output formatting
//!
//! Display utilities for the text-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_outcome, print_scored_row};
