//! Nordle
//!
//! Terminal trivia games for learning colleague names: a wordle-style
//! name guesser, a scrambled-letter game, and flashcards.
//!
//! # Quick Start
//!
//! ```rust
//! use nordle::core::{Target, Guess, LetterStatus, display_statuses};
//!
//! let target = Target::new("Robin").unwrap();
//! let grid = display_statuses(&target, &[Guess::new("rbino")]).unwrap();
//!
//! assert_eq!(grid[0][0], LetterStatus::Correct);
//! ```

// Core domain types
pub mod core;

// Round controllers
pub mod round;

// Subject roster
pub mod roster;

// Score ledger
pub mod scores;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
