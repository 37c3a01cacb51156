//! Guess evaluation
//!
//! Pure scoring of guesses against a target, used both for the guess grid
//! and for keyboard key coloring. Two views over the same per-position
//! comparison:
//!
//! - [`display_statuses`] - one independent status row per guess,
//!   aligned to the guess's letters (position-local, no cross-guess
//!   accumulation).
//! - [`keyboard_statuses`] - a fold of every row into a best-status-seen
//!   map per letter, monotone under the `LetterStatus` rank.
//!
//! The membership rule is deliberately naive: a misplaced guess letter
//! scores `Present` whenever the target contains it anywhere, regardless
//! of how many times it occurs in the target. Guessing "NNNN" against
//! "ANNA" marks both misplaced Ns present.

use super::{Guess, LetterStatus, Target};
use rustc_hash::FxHashMap;
use std::fmt;

/// One status per guess position, aligned to the guess's letters.
pub type StatusRow = Vec<LetterStatus>;

/// Best status seen per letter across all guesses.
///
/// Letters never guessed are unmapped; consumers treat missing entries as
/// [`LetterStatus::None`].
pub type KeyStatusMap = FxHashMap<char, LetterStatus>;

/// Error type for evaluation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    /// A scored guess must have exactly the target's length. Incomplete
    /// or overlong guesses are a caller programming error, not a
    /// recoverable runtime condition.
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "Guess must be exactly {expected} letters, got {found}")
            }
        }
    }
}

impl std::error::Error for EvaluateError {}

/// Compute one status row per guess, each evaluated independently.
///
/// Per position `i`: `Correct` if `guess[i] == target[i]`, else `Present`
/// if the target contains `guess[i]` anywhere, else `Absent`. An empty
/// guess list yields an empty grid.
///
/// # Errors
/// Returns [`EvaluateError::LengthMismatch`] if any guess's length
/// differs from the target's.
///
/// # Examples
/// ```
/// use nordle::core::{LetterStatus, Target, Guess, display_statuses};
///
/// let target = Target::new("ROBIN").unwrap();
/// let grid = display_statuses(&target, &[Guess::new("RBINO")]).unwrap();
///
/// assert_eq!(grid[0][0], LetterStatus::Correct);
/// assert!(grid[0][1..].iter().all(|&s| s == LetterStatus::Present));
/// ```
pub fn display_statuses(
    target: &Target,
    guesses: &[Guess],
) -> Result<Vec<StatusRow>, EvaluateError> {
    guesses
        .iter()
        .map(|guess| score_row(target, guess))
        .collect()
}

/// Fold every guess into a best-status-seen map per letter.
///
/// Each position is scored exactly as in [`display_statuses`], then
/// merged into the map only when the new status outranks the recorded
/// one. The fold is commutative under the max-rank rule, so the result
/// is independent of guess order.
///
/// # Errors
/// Returns [`EvaluateError::LengthMismatch`] if any guess's length
/// differs from the target's.
pub fn keyboard_statuses(
    target: &Target,
    guesses: &[Guess],
) -> Result<KeyStatusMap, EvaluateError> {
    let mut map = KeyStatusMap::default();

    for guess in guesses {
        let row = score_row(target, guess)?;
        for (&letter, status) in guess.chars().iter().zip(row) {
            let entry = map.entry(letter).or_insert(LetterStatus::None);
            *entry = entry.merge(status);
        }
    }

    Ok(map)
}

/// Score a single guess against the target, position by position.
fn score_row(target: &Target, guess: &Guess) -> Result<StatusRow, EvaluateError> {
    if guess.len() != target.len() {
        return Err(EvaluateError::LengthMismatch {
            expected: target.len(),
            found: guess.len(),
        });
    }

    let row = guess
        .chars()
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            if target.char_at(i) == letter {
                LetterStatus::Correct
            } else if target.has_letter(letter) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            }
        })
        .collect();

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn target(name: &str) -> Target {
        Target::new(name).unwrap()
    }

    fn guesses(words: &[&str]) -> Vec<Guess> {
        words.iter().map(|w| Guess::new(w)).collect()
    }

    #[test]
    fn display_robin_scenario() {
        // R matches position 0; B, I, N, O all exist elsewhere in ROBIN
        let grid = display_statuses(&target("ROBIN"), &guesses(&["RBINO"])).unwrap();
        assert_eq!(grid, vec![vec![Correct, Present, Present, Present, Present]]);
    }

    #[test]
    fn display_exact_match_is_all_correct() {
        let grid = display_statuses(&target("LISA"), &guesses(&["LISA"])).unwrap();
        assert_eq!(grid, vec![vec![Correct; 4]]);
    }

    #[test]
    fn display_no_overlap_is_all_absent() {
        let grid = display_statuses(&target("LISA"), &guesses(&["ZZZZ"])).unwrap();
        assert_eq!(grid, vec![vec![Absent; 4]]);
    }

    #[test]
    fn display_naive_duplicate_rule() {
        // ANNA contains N, so every misplaced N scores present - the
        // naive rule does not decrement remaining-letter counts.
        let grid = display_statuses(&target("ANNA"), &guesses(&["NNNN"])).unwrap();
        assert_eq!(grid, vec![vec![Present, Correct, Correct, Present]]);
    }

    #[test]
    fn display_rows_are_independent_per_guess() {
        let grid = display_statuses(&target("LISA"), &guesses(&["SAIL", "LISA"])).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec![Present, Present, Present, Present]);
        assert_eq!(grid[1], vec![Correct; 4]);
    }

    #[test]
    fn display_empty_guess_list_yields_empty_grid() {
        let grid = display_statuses(&target("LISA"), &[]).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn display_length_mismatch_is_an_error() {
        let err = display_statuses(&target("LISA"), &guesses(&["LI"])).unwrap_err();
        assert_eq!(
            err,
            EvaluateError::LengthMismatch {
                expected: 4,
                found: 2
            }
        );

        // Overlong guesses fail the same way
        assert!(display_statuses(&target("LISA"), &guesses(&["LISBET"])).is_err());
    }

    #[test]
    fn display_is_idempotent() {
        let t = target("ROBIN");
        let gs = guesses(&["RBINO", "ROBIN"]);
        assert_eq!(
            display_statuses(&t, &gs).unwrap(),
            display_statuses(&t, &gs).unwrap()
        );
    }

    #[test]
    fn display_correct_iff_position_matches() {
        let t = target("ROBIN");
        let g = Guess::new("RINGO");
        let grid = display_statuses(&t, &[g.clone()]).unwrap();
        for (i, &status) in grid[0].iter().enumerate() {
            assert_eq!(status == Correct, g.chars()[i] == t.char_at(i));
        }
    }

    #[test]
    fn display_scandinavian_letters_compare_as_themselves() {
        let grid = display_statuses(&target("BJØRN"), &guesses(&["bjørn"])).unwrap();
        assert_eq!(grid, vec![vec![Correct; 5]]);

        // Ø present but misplaced; O is absent, not a transliteration hit
        let grid = display_statuses(&target("BJØRN"), &guesses(&["ØBJNO"])).unwrap();
        assert_eq!(grid[0][0], Present);
        assert_eq!(grid[0][4], Absent);
    }

    #[test]
    fn display_outside_alphabet_characters_evaluate() {
        let grid = display_statuses(&target("LISA"), &guesses(&["L1S?"])).unwrap();
        assert_eq!(grid[0], vec![Correct, Absent, Correct, Absent]);
    }

    #[test]
    fn keyboard_tracks_best_status_per_letter() {
        let map = keyboard_statuses(&target("LISA"), &guesses(&["SAIL"])).unwrap();
        assert_eq!(map[&'S'], Present);
        assert_eq!(map[&'A'], Present);
        assert_eq!(map[&'I'], Present);
        assert_eq!(map[&'L'], Present);

        let map = keyboard_statuses(&target("LISA"), &guesses(&["SAIL", "LISA"])).unwrap();
        assert_eq!(map[&'L'], Correct);
        assert_eq!(map[&'S'], Correct);
    }

    #[test]
    fn keyboard_absent_letters_are_recorded() {
        let map = keyboard_statuses(&target("LISA"), &guesses(&["ZZZZ"])).unwrap();
        assert_eq!(map[&'Z'], Absent);
    }

    #[test]
    fn keyboard_unguessed_letters_are_unmapped() {
        let map = keyboard_statuses(&target("LISA"), &guesses(&["ZZZZ"])).unwrap();
        assert!(!map.contains_key(&'Q'));
        assert!(!map.contains_key(&'L'));
    }

    #[test]
    fn keyboard_never_regresses_below_present() {
        // I is present in guess one; guessing it absent-adjacent later
        // must not downgrade the key.
        let t = target("LISA");
        let map = keyboard_statuses(&t, &guesses(&["IIII"])).unwrap();
        assert_eq!(map[&'I'], Correct); // position 1 matches

        let map = keyboard_statuses(&t, &guesses(&["IIII", "ZZZZ"])).unwrap();
        assert_eq!(map[&'I'], Correct);
        assert_eq!(map[&'Z'], Absent);
    }

    #[test]
    fn keyboard_rank_is_monotone_over_growing_history() {
        let t = target("ROBIN");
        let all = guesses(&["ZZZZZ", "NOBIR", "ROBIN", "RRRRR"]);

        let mut previous = KeyStatusMap::default();
        for cut in 1..=all.len() {
            let current = keyboard_statuses(&t, &all[..cut]).unwrap();
            for (letter, status) in &previous {
                assert!(current[letter] >= *status);
            }
            previous = current;
        }
    }

    #[test]
    fn keyboard_is_order_independent() {
        let t = target("ROBIN");
        let forward = guesses(&["ZZZZZ", "NOBIR", "RBINO"]);
        let backward = guesses(&["RBINO", "NOBIR", "ZZZZZ"]);

        assert_eq!(
            keyboard_statuses(&t, &forward).unwrap(),
            keyboard_statuses(&t, &backward).unwrap()
        );
    }

    #[test]
    fn keyboard_empty_history_is_empty_map() {
        let map = keyboard_statuses(&target("LISA"), &[]).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn keyboard_length_mismatch_is_an_error() {
        assert!(keyboard_statuses(&target("LISA"), &guesses(&["LIS"])).is_err());
    }
}
