//! Core domain types for name guessing
//!
//! The pure evaluation core: targets, guesses, letter statuses, and the
//! scoring functions that drive both the guess grid and keyboard
//! coloring. No I/O, no game state - round controllers own that.

mod evaluator;
mod guess;
mod status;
mod target;

pub use evaluator::{
    EvaluateError, KeyStatusMap, StatusRow, display_statuses, keyboard_statuses,
};
pub use guess::Guess;
pub use status::LetterStatus;
pub use target::{Target, TargetError};
