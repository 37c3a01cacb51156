//! Round controllers
//!
//! Explicit state owners for each mini-game: guess history, lives, and
//! scores live here, and the pure evaluator is fed by value. No shared
//! global state.

mod flashcards;
mod gibberish;
mod wordle;

pub use flashcards::{FlashcardDeck, LEARNING_CAP};
pub use gibberish::{
    AnswerOutcome, GibberishRound, POINTS_PER_NAME, STARTING_LIVES, shuffle_name,
};
pub use wordle::{GuessOutcome, MAX_TRIES, RoundError, RoundOutcome, WordleRound};
