//! Gibberish CLI game
//!
//! Text-based unscramble-the-name game without TUI.

use crate::output::formatters::lives_meter;
use crate::round::{AnswerOutcome, GibberishRound, STARTING_LIVES};
use crate::roster::Subject;
use std::io::{self, Write};

/// Run a gibberish game over the given subjects.
///
/// Returns the final score of a completed run, or `None` when the player
/// quits early (nothing is recorded in that case).
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_gibberish(subjects: Vec<Subject>) -> Result<Option<u32>, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Gibberish - Hvem er dette?                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble the first name of the person in the photo.");
    println!("{STARTING_LIVES} lives, 50 points per name. Type 'quit' to exit.\n");

    let mut run = GibberishRound::new(subjects);

    while let Some(subject) = run.current().cloned() {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Photo: {}   Lives: {}   Score: {}",
            subject.image_url,
            lives_meter(run.lives(), STARTING_LIVES),
            run.score()
        );
        println!("\n  Scrambled name:  {}\n", run.shuffled_name());

        let input = get_user_input("Who is this")?;
        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(None);
        }

        match run.answer(&input) {
            AnswerOutcome::Correct { score } => {
                println!("\n✅ Yes, that's {}! Score: {score}\n", subject.name);
            }
            AnswerOutcome::Wrong { lives_left } => {
                println!(
                    "\n❌ That was {} - {lives_left} {} left\n",
                    subject.name,
                    if lives_left == 1 { "life" } else { "lives" }
                );
            }
            AnswerOutcome::GameOver { score } => {
                print_final(score, false);
                return Ok(Some(score));
            }
            AnswerOutcome::Finished { score } => {
                print_final(score, true);
                return Ok(Some(score));
            }
        }
    }

    // Empty roster: nothing to play
    println!("No subjects to play with!\n");
    Ok(None)
}

fn print_final(score: u32, completed: bool) {
    use colored::Colorize;

    println!("\n{}", "═".repeat(60).bright_cyan());
    if completed {
        println!(
            "{}",
            "    🎉  S P I L L E T   E R   F E R D I G !  🎉    "
                .bright_green()
                .bold()
        );
    } else {
        println!("{}", "    💀  Out of lives!    ".bright_red().bold());
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Final score: {}\n",
        score.to_string().bright_yellow().bold()
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
