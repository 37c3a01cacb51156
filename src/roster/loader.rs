//! Roster loading utilities
//!
//! Rosters come from a JSON file (an array of `{name, imageUrl}`
//! objects) or from the embedded demo list. Subjects without a usable
//! first name are skipped rather than rejected.

use super::Subject;
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for roster loading
#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read roster file: {err}"),
            Self::Parse(err) => write!(f, "Roster file is not a valid subject list: {err}"),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load subjects from a JSON roster file.
///
/// Subjects whose name yields no first-name token are dropped, so every
/// returned subject can seed a round.
///
/// # Errors
///
/// Returns `RosterError` if the file cannot be read or does not parse as
/// a subject array.
///
/// # Examples
/// ```no_run
/// use nordle::roster::load_from_file;
///
/// let roster = load_from_file("roster.json").unwrap();
/// println!("Loaded {} subjects", roster.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Subject>, RosterError> {
    let content = fs::read_to_string(path)?;
    let subjects: Vec<Subject> = serde_json::from_str(&content)?;

    Ok(subjects
        .into_iter()
        .filter(|subject| !subject.first_name().is_empty())
        .collect())
}

/// Convert embedded `(name, image_url)` pairs to a subject vector.
///
/// # Examples
/// ```
/// use nordle::roster::{DEMO_ROSTER, subjects_from_slice};
///
/// let roster = subjects_from_slice(DEMO_ROSTER);
/// assert_eq!(roster.len(), DEMO_ROSTER.len());
/// ```
#[must_use]
pub fn subjects_from_slice(slice: &[(&str, &str)]) -> Vec<Subject> {
    slice
        .iter()
        .map(|&(name, image_url)| Subject::new(name, image_url))
        .filter(|subject| !subject.first_name().is_empty())
        .collect()
}
