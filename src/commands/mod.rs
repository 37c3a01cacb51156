//! Command implementations

pub mod gibberish;
pub mod learn;
pub mod scores;
pub mod simple;

pub use gibberish::run_gibberish;
pub use learn::run_learn;
pub use scores::show_scores;
pub use simple::run_simple;
