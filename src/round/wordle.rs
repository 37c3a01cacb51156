//! Wordle-style round controller
//!
//! Owns the target, the guess history, and the try cap for one round of
//! the name-wordle game. All state lives here and is passed by value
//! into the pure evaluator; the round never leaks mutable state to the
//! presentation layer.

use crate::core::{
    Guess, KeyStatusMap, StatusRow, Target, display_statuses, keyboard_statuses,
};
use std::fmt;

/// Tries per round before the round is lost.
pub const MAX_TRIES: usize = 6;

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A guess matched the target exactly.
    Won,
    /// The try cap was exhausted without a match.
    Lost,
}

/// What a single accepted submission did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong guess, round continues.
    Continue { tries_left: usize },
    /// Exact match - the round is over and won.
    Won,
    /// Last try spent - the round is over and lost.
    Lost,
}

/// Error type for rejected submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The round already ended; new submissions are ignored until reset.
    Finished,
    /// Only complete guesses are scored.
    WrongLength { expected: usize, found: usize },
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "Round is already over"),
            Self::WrongLength { expected, found } => {
                write!(f, "Guess must be exactly {expected} letters, got {found}")
            }
        }
    }
}

impl std::error::Error for RoundError {}

/// One round of the name-wordle game.
pub struct WordleRound {
    target: Target,
    guesses: Vec<Guess>,
    max_tries: usize,
    outcome: Option<RoundOutcome>,
}

impl WordleRound {
    /// Start a round against a target with the standard try cap.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self::with_max_tries(target, MAX_TRIES)
    }

    /// Start a round with a custom try cap.
    #[must_use]
    pub fn with_max_tries(target: Target, max_tries: usize) -> Self {
        Self {
            target,
            guesses: Vec::new(),
            max_tries,
            outcome: None,
        }
    }

    /// Submit a complete guess.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Finished` after the round has ended and
    /// `RoundError::WrongLength` for incomplete or overlong guesses;
    /// neither mutates the history.
    pub fn submit(&mut self, guess: Guess) -> Result<GuessOutcome, RoundError> {
        if self.outcome.is_some() {
            return Err(RoundError::Finished);
        }
        if guess.len() != self.target.len() {
            return Err(RoundError::WrongLength {
                expected: self.target.len(),
                found: guess.len(),
            });
        }

        let is_match = guess.chars() == self.target.chars();
        self.guesses.push(guess);

        if is_match {
            self.outcome = Some(RoundOutcome::Won);
            Ok(GuessOutcome::Won)
        } else if self.guesses.len() >= self.max_tries {
            self.outcome = Some(RoundOutcome::Lost);
            Ok(GuessOutcome::Lost)
        } else {
            Ok(GuessOutcome::Continue {
                tries_left: self.max_tries - self.guesses.len(),
            })
        }
    }

    /// One status row per submitted guess, for the guess grid.
    ///
    /// # Panics
    /// Will not panic - `submit` only accepts full-length guesses.
    #[must_use]
    pub fn display_statuses(&self) -> Vec<StatusRow> {
        display_statuses(&self.target, &self.guesses).expect("round enforces guess length")
    }

    /// Best status seen per letter, for keyboard coloring.
    ///
    /// # Panics
    /// Will not panic - `submit` only accepts full-length guesses.
    #[must_use]
    pub fn keyboard_statuses(&self) -> KeyStatusMap {
        keyboard_statuses(&self.target, &self.guesses).expect("round enforces guess length")
    }

    /// Replace the target and clear all round state.
    pub fn reset(&mut self, target: Target) {
        self.target = target;
        self.guesses.clear();
        self.outcome = None;
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn max_tries(&self) -> usize {
        self.max_tries
    }

    #[inline]
    #[must_use]
    pub fn tries_left(&self) -> usize {
        self.max_tries - self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn round(name: &str) -> WordleRound {
        WordleRound::new(Target::new(name).unwrap())
    }

    #[test]
    fn exact_match_wins() {
        let mut r = round("Lisa");
        let outcome = r.submit(Guess::new("lisa")).unwrap();

        assert_eq!(outcome, GuessOutcome::Won);
        assert_eq!(r.outcome(), Some(RoundOutcome::Won));
        assert!(r.is_over());
    }

    #[test]
    fn wrong_guess_continues_and_counts_down() {
        let mut r = round("Lisa");
        let outcome = r.submit(Guess::new("sail")).unwrap();

        assert_eq!(outcome, GuessOutcome::Continue { tries_left: 5 });
        assert!(!r.is_over());
        assert_eq!(r.guesses().len(), 1);
    }

    #[test]
    fn sixth_wrong_guess_loses() {
        let mut r = round("Lisa");
        for i in 0..MAX_TRIES - 1 {
            let outcome = r.submit(Guess::new("sail")).unwrap();
            assert_eq!(
                outcome,
                GuessOutcome::Continue {
                    tries_left: MAX_TRIES - 1 - i
                }
            );
        }

        let outcome = r.submit(Guess::new("sail")).unwrap();
        assert_eq!(outcome, GuessOutcome::Lost);
        assert_eq!(r.outcome(), Some(RoundOutcome::Lost));
    }

    #[test]
    fn winning_on_the_last_try_wins() {
        let mut r = round("Lisa");
        for _ in 0..MAX_TRIES - 1 {
            r.submit(Guess::new("sail")).unwrap();
        }

        let outcome = r.submit(Guess::new("lisa")).unwrap();
        assert_eq!(outcome, GuessOutcome::Won);
    }

    #[test]
    fn submissions_after_round_end_are_rejected() {
        let mut r = round("Lisa");
        r.submit(Guess::new("lisa")).unwrap();

        let err = r.submit(Guess::new("sail")).unwrap_err();
        assert_eq!(err, RoundError::Finished);
        assert_eq!(r.guesses().len(), 1);
    }

    #[test]
    fn wrong_length_is_rejected_without_mutation() {
        let mut r = round("Lisa");
        let err = r.submit(Guess::new("li")).unwrap_err();

        assert_eq!(
            err,
            RoundError::WrongLength {
                expected: 4,
                found: 2
            }
        );
        assert!(r.guesses().is_empty());
        assert_eq!(r.tries_left(), MAX_TRIES);
    }

    #[test]
    fn display_statuses_has_one_row_per_guess() {
        let mut r = round("Robin");
        r.submit(Guess::new("rbino")).unwrap();
        r.submit(Guess::new("robin")).unwrap();

        let grid = r.display_statuses();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[1], vec![LetterStatus::Correct; 5]);
    }

    #[test]
    fn keyboard_statuses_reflect_history() {
        let mut r = round("Robin");
        r.submit(Guess::new("zzzzz")).unwrap();

        let map = r.keyboard_statuses();
        assert_eq!(map[&'Z'], LetterStatus::Absent);
    }

    #[test]
    fn reset_clears_history_and_outcome() {
        let mut r = round("Lisa");
        r.submit(Guess::new("lisa")).unwrap();
        assert!(r.is_over());

        r.reset(Target::new("Bjørn").unwrap());
        assert!(!r.is_over());
        assert!(r.guesses().is_empty());
        assert_eq!(r.target().text(), "BJØRN");
        assert_eq!(r.tries_left(), MAX_TRIES);
    }

    #[test]
    fn guess_comparison_is_case_insensitive_via_normalization() {
        let mut r = round("bjørn");
        let outcome = r.submit(Guess::new("BJØRN")).unwrap();
        assert_eq!(outcome, GuessOutcome::Won);
    }
}
