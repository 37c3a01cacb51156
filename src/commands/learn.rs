//! Flashcard learning pass
//!
//! CLI flashcards: look at the photo, try to recall the name, then mark
//! the card known or unknown. Unknown subjects become the practice
//! roster for the other games.

use crate::round::{FlashcardDeck, LEARNING_CAP};
use crate::roster::Subject;
use std::io::{self, Write};

/// Run a flashcard pass and return the learning list.
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_learn(subjects: Vec<Subject>) -> Result<Vec<Subject>, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Flashcards - learn the names                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("For each photo, recall the name before revealing it.");
    println!("Unknown people go on your learning list (up to {LEARNING_CAP}).\n");

    let mut deck = FlashcardDeck::new(subjects);

    while let Some(subject) = deck.current().cloned() {
        println!("────────────────────────────────────────────────────────────");
        println!("Photo: {}   ({} left)", subject.image_url, deck.remaining());

        get_user_input("Press Enter to reveal the name")?;
        println!("\n  → {}\n", subject.name);

        let known = loop {
            let input = get_user_input("Did you know them? (y/n, q to stop)")?;
            match input.to_lowercase().as_str() {
                "y" | "yes" => break true,
                "n" | "no" => break false,
                "q" | "quit" => {
                    return Ok(finish(deck));
                }
                _ => println!("Please answer y or n."),
            }
        };

        deck.swipe(known);
    }

    Ok(finish(deck))
}

fn finish(deck: FlashcardDeck) -> Vec<Subject> {
    let learning = deck.into_learning_list();

    if learning.is_empty() {
        println!("\n🎉 You knew everyone!\n");
    } else {
        println!("\nYour learning list ({} names):", learning.len());
        for subject in &learning {
            println!("  • {}", subject.name);
        }
        println!();
    }

    learning
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
