//! Letter match statuses
//!
//! A status classifies one guessed letter, either at a grid position or
//! aggregated per keyboard key. The derived ordering is the folding rank
//! used for keyboard coloring: `None < Absent < Present < Correct`.

use std::fmt;

/// Classification of a guessed letter against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    /// Not evaluated yet (position not guessed, key never pressed).
    #[default]
    None,
    /// The letter does not occur anywhere in the target.
    Absent,
    /// The letter occurs in the target, but not at this position.
    Present,
    /// The letter is at exactly this position in the target.
    Correct,
}

impl LetterStatus {
    /// Fold another observation into this one, keeping the better status.
    ///
    /// A key's status can only move toward `Correct`, never regress -
    /// once a letter has been seen as `Present` it cannot fall back to
    /// `Absent` on a later guess.
    ///
    /// # Examples
    /// ```
    /// use nordle::core::LetterStatus;
    ///
    /// let key = LetterStatus::Present.merge(LetterStatus::Absent);
    /// assert_eq!(key, LetterStatus::Present);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Whether this status carries an actual evaluation.
    #[inline]
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        write!(f, "{name}")
    }
}
