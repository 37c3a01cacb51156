//! Gibberish round controller
//!
//! The player unscrambles a shuffled first name. Three lives per run,
//! fifty points per correct name, and the run advances to the next
//! subject on both correct and wrong answers - a miss costs a life, not
//! a retry.

use crate::roster::Subject;
use rand::Rng;
use rand::seq::SliceRandom;

/// Lives at the start of a run.
pub const STARTING_LIVES: u8 = 3;

/// Points for each correctly unscrambled name.
pub const POINTS_PER_NAME: u32 = 50;

/// What one submitted answer did to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right name; points added, next subject up.
    Correct { score: u32 },
    /// Wrong name; a life burned, next subject up.
    Wrong { lives_left: u8 },
    /// Wrong name on the last life - run over.
    GameOver { score: u32 },
    /// Roster exhausted - run complete.
    Finished { score: u32 },
}

/// One run of the gibberish game over a subject list.
pub struct GibberishRound {
    subjects: Vec<Subject>,
    index: usize,
    lives: u8,
    score: u32,
    shuffled: String,
    over: bool,
}

impl GibberishRound {
    /// Start a run. An empty subject list yields an immediately-finished
    /// run.
    #[must_use]
    pub fn new(subjects: Vec<Subject>) -> Self {
        let shuffled = subjects
            .first()
            .map(|subject| shuffle_name(subject.first_name(), &mut rand::rng()))
            .unwrap_or_default();

        Self {
            over: subjects.is_empty(),
            subjects,
            index: 0,
            lives: STARTING_LIVES,
            score: 0,
            shuffled,
        }
    }

    /// The subject currently being asked about.
    #[must_use]
    pub fn current(&self) -> Option<&Subject> {
        if self.over {
            None
        } else {
            self.subjects.get(self.index)
        }
    }

    /// The scrambled presentation of the current first name, uppercased.
    #[must_use]
    pub fn shuffled_name(&self) -> &str {
        &self.shuffled
    }

    /// Submit an answer for the current subject.
    ///
    /// Comparison is whitespace-trimmed and case-insensitive. The run
    /// advances regardless of correctness; answers after the run ended
    /// report the final state without mutating anything.
    pub fn answer(&mut self, input: &str) -> AnswerOutcome {
        let Some(subject) = self.current() else {
            return if self.lives == 0 {
                AnswerOutcome::GameOver { score: self.score }
            } else {
                AnswerOutcome::Finished { score: self.score }
            };
        };

        let expected = subject.first_name().trim().to_uppercase();
        let got = input.trim().to_uppercase();

        if got == expected {
            self.score += POINTS_PER_NAME;
            if self.advance() {
                AnswerOutcome::Correct { score: self.score }
            } else {
                AnswerOutcome::Finished { score: self.score }
            }
        } else {
            self.lives -= 1;
            if self.lives == 0 {
                self.over = true;
                AnswerOutcome::GameOver { score: self.score }
            } else if self.advance() {
                AnswerOutcome::Wrong {
                    lives_left: self.lives,
                }
            } else {
                AnswerOutcome::Finished { score: self.score }
            }
        }
    }

    /// Move to the next subject, reshuffling its name. Returns false
    /// when the roster is exhausted.
    fn advance(&mut self) -> bool {
        self.index += 1;
        match self.subjects.get(self.index) {
            Some(subject) => {
                self.shuffled = shuffle_name(subject.first_name(), &mut rand::rng());
                true
            }
            None => {
                self.over = true;
                self.shuffled.clear();
                false
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Subjects not yet asked about, current one included.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.over {
            0
        } else {
            self.subjects.len() - self.index
        }
    }
}

/// Shuffle a name's letters into an uppercased scramble.
///
/// Names with at least two distinct letters are reshuffled until the
/// result differs from the answer, so the puzzle never gives itself
/// away. Shorter or single-letter names pass through unchanged.
#[must_use]
pub fn shuffle_name<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    let name = name.to_uppercase();
    let mut letters: Vec<char> = name.chars().collect();

    let all_same = letters.windows(2).all(|pair| pair[0] == pair[1]);
    if letters.len() < 2 || all_same {
        return name;
    }

    loop {
        letters.shuffle(rng);
        let shuffled: String = letters.iter().collect();
        if shuffled != name {
            return shuffled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn subjects(names: &[&str]) -> Vec<Subject> {
        names
            .iter()
            .map(|name| Subject::new(*name, "https://example.com/p.png"))
            .collect()
    }

    #[test]
    fn correct_answer_scores_fifty_and_advances() {
        let mut run = GibberishRound::new(subjects(&["Lisa Holm", "Robin Andersen"]));

        let outcome = run.answer("lisa");
        assert_eq!(outcome, AnswerOutcome::Correct { score: 50 });
        assert_eq!(run.current().unwrap().first_name(), "Robin");
        assert_eq!(run.lives(), STARTING_LIVES);
    }

    #[test]
    fn answer_comparison_trims_and_ignores_case() {
        let mut run = GibberishRound::new(subjects(&["Bjørn Håkonsen", "Lisa Holm"]));
        let outcome = run.answer("  bjørn  ");
        assert_eq!(outcome, AnswerOutcome::Correct { score: 50 });
    }

    #[test]
    fn wrong_answer_burns_a_life_and_advances() {
        let mut run = GibberishRound::new(subjects(&["Lisa Holm", "Robin Andersen"]));

        let outcome = run.answer("nope");
        assert_eq!(outcome, AnswerOutcome::Wrong { lives_left: 2 });
        assert_eq!(run.score(), 0);
        assert_eq!(run.current().unwrap().first_name(), "Robin");
    }

    #[test]
    fn third_wrong_answer_ends_the_run() {
        let mut run = GibberishRound::new(subjects(&["A B", "C D", "E F", "G H"]));

        assert_eq!(run.answer("x"), AnswerOutcome::Wrong { lives_left: 2 });
        assert_eq!(run.answer("x"), AnswerOutcome::Wrong { lives_left: 1 });
        assert_eq!(run.answer("x"), AnswerOutcome::GameOver { score: 0 });

        assert!(run.is_over());
        assert!(run.current().is_none());
        assert_eq!(run.remaining(), 0);
    }

    #[test]
    fn game_over_keeps_earned_score() {
        let mut run = GibberishRound::new(subjects(&["A B", "C D", "E F", "G H"]));

        run.answer("a");
        run.answer("x");
        run.answer("x");
        let outcome = run.answer("x");

        assert_eq!(outcome, AnswerOutcome::GameOver { score: 50 });
    }

    #[test]
    fn exhausting_the_roster_finishes_the_run() {
        let mut run = GibberishRound::new(subjects(&["Lisa Holm", "Robin Andersen"]));

        run.answer("lisa");
        let outcome = run.answer("robin");

        assert_eq!(outcome, AnswerOutcome::Finished { score: 100 });
        assert!(run.is_over());
    }

    #[test]
    fn answers_after_the_run_are_inert() {
        let mut run = GibberishRound::new(subjects(&["Lisa Holm"]));
        run.answer("lisa");

        let outcome = run.answer("lisa");
        assert_eq!(outcome, AnswerOutcome::Finished { score: 50 });
        assert_eq!(run.score(), 50);
    }

    #[test]
    fn empty_roster_is_immediately_finished() {
        let mut run = GibberishRound::new(Vec::new());
        assert!(run.is_over());
        assert_eq!(run.answer("anything"), AnswerOutcome::Finished { score: 0 });
    }

    #[test]
    fn shuffled_name_is_uppercased() {
        let run = GibberishRound::new(subjects(&["Lisa Holm"]));
        let shuffled = run.shuffled_name();
        assert!(shuffled.chars().all(char::is_uppercase));
    }

    #[test]
    fn shuffle_name_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle_name("Solveig", &mut rng);

        let mut expected: Vec<char> = "SOLVEIG".chars().collect();
        let mut got: Vec<char> = shuffled.chars().collect();
        expected.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn shuffle_name_differs_from_the_answer() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            assert_ne!(shuffle_name("Robin", &mut rng), "ROBIN");
        }
    }

    #[test]
    fn shuffle_name_handles_degenerate_names() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(shuffle_name("A", &mut rng), "A");
        assert_eq!(shuffle_name("aaa", &mut rng), "AAA");
        assert_eq!(shuffle_name("", &mut rng), "");
    }
}
