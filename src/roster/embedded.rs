//! Embedded demo roster
//!
//! A small built-in roster so every game is playable without a roster
//! file. Names cover the Norwegian letters the evaluator must handle.

/// `(name, image_url)` pairs for the demo roster.
pub const DEMO_ROSTER: &[(&str, &str)] = &[
    ("Robin Andersen", "https://example.com/photos/robin.png"),
    ("Lisa Holm", "https://example.com/photos/lisa.png"),
    ("Bjørn Håkonsen", "https://example.com/photos/bjorn.png"),
    ("Åse Lindgren", "https://example.com/photos/aase.png"),
    ("Ørjan Vik", "https://example.com/photos/orjan.png"),
    ("Solveig Ødegård", "https://example.com/photos/solveig.png"),
    ("Kåre Næss", "https://example.com/photos/kaare.png"),
    ("Anna Fjeld", "https://example.com/photos/anna.png"),
    ("Praveen Kirub", "https://example.com/photos/praveen.png"),
    ("Maja Strand", "https://example.com/photos/maja.png"),
];
