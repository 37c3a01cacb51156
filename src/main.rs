//! Nordle - CLI
//!
//! Name-learning trivia games: wordle-style guessing in a TUI, a
//! scrambled-letter game, and flashcards, over an embedded demo roster
//! or a roster file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nordle::{
    commands::{run_gibberish, run_learn, run_simple, show_scores},
    roster::{DEMO_ROSTER, Subject, load_from_file, subjects_from_slice},
    scores::{GameKind, ScoreBoard, ScoreEntry},
};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "nordle",
    about = "Terminal trivia games for learning colleague names",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Roster file (JSON array of {name, imageUrl}); embedded demo roster if omitted
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// Score ledger file
    #[arg(short, long, global = true, default_value = "nordle_scores.json")]
    scores: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Wordle-style name guessing in a TUI (default)
    Play {
        /// Run a flashcard pass first and play over the names you missed
        #[arg(short, long)]
        practice: bool,
    },

    /// Wordle-style name guessing in plain CLI (no TUI)
    Simple {
        /// Run a flashcard pass first and play over the names you missed
        #[arg(short, long)]
        practice: bool,
    },

    /// Unscramble shuffled names (3 lives, 50 points per name)
    Gibberish {
        /// Run a flashcard pass first and play over the names you missed
        #[arg(short, long)]
        practice: bool,
    },

    /// Flashcard pass over the roster
    Learn,

    /// Show recorded scores
    Scores,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { practice: false });

    match command {
        Commands::Play { practice } => {
            let roster = game_roster(cli.roster.as_deref(), practice)?;
            run_play_command(roster, &cli.scores)
        }
        Commands::Simple { practice } => {
            let roster = game_roster(cli.roster.as_deref(), practice)?;
            run_simple_command(roster, &cli.scores)
        }
        Commands::Gibberish { practice } => {
            let roster = game_roster(cli.roster.as_deref(), practice)?;
            run_gibberish_command(roster, &cli.scores)
        }
        Commands::Learn => {
            let roster = load_roster(cli.roster.as_deref())?;
            run_learn(roster).map_err(|e| anyhow::anyhow!(e))?;
            Ok(())
        }
        Commands::Scores => {
            show_scores(&cli.scores)?;
            Ok(())
        }
    }
}

/// Load the roster from a file, or fall back to the embedded demo list.
fn load_roster(path: Option<&Path>) -> Result<Vec<Subject>> {
    let roster = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?,
        None => subjects_from_slice(DEMO_ROSTER),
    };

    anyhow::ensure!(!roster.is_empty(), "Roster has no playable subjects");
    Ok(roster)
}

/// The subject list a game runs over: the full roster shuffled, or the
/// learning list from a flashcard pass in practice mode.
fn game_roster(path: Option<&Path>, practice: bool) -> Result<Vec<Subject>> {
    let mut roster = load_roster(path)?;

    if practice {
        roster = run_learn(roster).map_err(|e| anyhow::anyhow!(e))?;
        anyhow::ensure!(
            !roster.is_empty(),
            "Nothing to practice - you knew everyone!"
        );
    }

    roster.shuffle(&mut rand::rng());
    Ok(roster)
}

fn run_play_command(roster: Vec<Subject>, scores_path: &Path) -> Result<()> {
    use nordle::interactive::{App, run_tui};

    let app = App::new(roster)?;
    let session_score = run_tui(app)?;

    if session_score > 0 {
        record_score(scores_path, GameKind::Wordle, session_score)?;
        println!("Session score {session_score} recorded.");
    }
    Ok(())
}

fn run_simple_command(roster: Vec<Subject>, scores_path: &Path) -> Result<()> {
    let session_score = run_simple(roster).map_err(|e| anyhow::anyhow!(e))?;

    if session_score > 0 {
        record_score(scores_path, GameKind::Wordle, session_score)?;
        println!("Session score {session_score} recorded.");
    }
    Ok(())
}

fn run_gibberish_command(roster: Vec<Subject>, scores_path: &Path) -> Result<()> {
    let final_score = run_gibberish(roster).map_err(|e| anyhow::anyhow!(e))?;

    if let Some(score) = final_score {
        record_score(scores_path, GameKind::Gibberish, score)?;
        println!("Score {score} recorded.");
    }
    Ok(())
}

fn record_score(path: &Path, game: GameKind, score: u32) -> Result<()> {
    let mut board =
        ScoreBoard::load(path).with_context(|| format!("Reading ledger {}", path.display()))?;
    board.record(ScoreEntry { game, score });
    board
        .save(path)
        .with_context(|| format!("Writing ledger {}", path.display()))
}
