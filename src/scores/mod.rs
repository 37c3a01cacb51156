//! Score ledger
//!
//! An append-only list of past game scores persisted as JSON. Saves go
//! through a temp file in the destination directory and an atomic
//! rename, so a crash mid-write never corrupts the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

/// Which game produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Wordle,
    Gibberish,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wordle => write!(f, "Nordle"),
            Self::Gibberish => write!(f, "Gibberish"),
        }
    }
}

/// One finished game's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub game: GameKind,
    pub score: u32,
}

/// Error type for ledger I/O
#[derive(Debug)]
pub enum ScoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to access score ledger: {err}"),
            Self::Parse(err) => write!(f, "Score ledger is not valid: {err}"),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// The score ledger: ordered entries, appended at game end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    /// Load the ledger from a JSON file. A missing file is an empty
    /// ledger, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError` if the file exists but cannot be read or
    /// parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let entries: Vec<ScoreEntry> = serde_json::from_reader(reader)?;

        Ok(Self { entries })
    }

    /// Write the ledger, replacing the destination atomically.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError` if the temp file cannot be created, written,
    /// or persisted over the destination.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScoreError> {
        let path = path.as_ref();
        let parent_dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = parent_dir {
            fs::create_dir_all(dir)?;
        }

        let temp_file = NamedTempFile::new_in(parent_dir.unwrap_or_else(|| Path::new(".")))?;
        let writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(writer, &self.entries)?;

        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Append a finished game's score.
    pub fn record(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
    }

    /// All entries in recording order.
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Best score for a game, if any has been recorded.
    #[must_use]
    pub fn best(&self, game: GameKind) -> Option<u32> {
        self.entries
            .iter()
            .filter(|entry| entry.game == game)
            .map(|entry| entry.score)
            .max()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
