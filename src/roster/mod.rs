//! Subject roster
//!
//! The people the games quiz you on: `{name, imageUrl}` records loaded
//! from an embedded demo list or a JSON file. The roster is read-only
//! input; games never mutate it.

mod embedded;
pub mod loader;

pub use embedded::DEMO_ROSTER;
pub use loader::{RosterError, load_from_file, subjects_from_slice};

use serde::{Deserialize, Serialize};

/// One person in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Full display name, e.g. "Bjørn Håkonsen".
    pub name: String,
    /// Where to find the person's photo.
    pub image_url: String,
}

impl Subject {
    #[must_use]
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    /// The first whitespace-delimited token of the display name.
    ///
    /// This is what the games score against; the rest of the name is
    /// only shown when a round is revealed.
    ///
    /// # Examples
    /// ```
    /// use nordle::roster::Subject;
    ///
    /// let subject = Subject::new("Robin Andersen", "https://example.com/robin.png");
    /// assert_eq!(subject.first_name(), "Robin");
    /// ```
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}
