//! Scoreboard command

use crate::output::print_scoreboard;
use crate::scores::{ScoreBoard, ScoreError};
use std::path::Path;

/// Load and print the score ledger.
///
/// # Errors
///
/// Returns `ScoreError` if the ledger exists but cannot be read.
pub fn show_scores(path: &Path) -> Result<(), ScoreError> {
    let board = ScoreBoard::load(path)?;
    print_scoreboard(&board);
    Ok(())
}
