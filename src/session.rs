//! Per-round game state: the secret word, the status of every character
//! seen so far, and the progress towards revealing the whole word.

use crate::debug_log;
use clap::ValueEnum;
use std::collections::HashMap;

pub const MASK: char = '*';

/// How spaces inside multi-word entries are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SpacePolicy {
    /// Spaces (and any other whitespace) are shown from the start and never need guessing.
    #[default]
    #[value(name = "auto")]
    AutoReveal,
    /// Spaces are masked and must be guessed like any other character.
    Guess,
}

/// Status of a single character for the current round.
///
/// A character is `Hidden` or `Revealed` only if it occurs in the secret word;
/// `Missed` records a character that was tried and is not in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterState {
    Hidden,
    Revealed,
    Missed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    AlreadyPicked,
}

impl GuessOutcome {
    /// The feedback line shown to the player for `guess`.
    #[must_use]
    pub fn describe(self, guess: char) -> String {
        match self {
            Self::AlreadyPicked => format!("'{guess}' was already picked. Try something else"),
            Self::Correct => format!("'{guess}'? Correct guess!"),
            Self::Incorrect => format!("{guess} Is not correct, try again"),
        }
    }
}

/// One position of the secret word as the player currently sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Shown(char),
    Masked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    AwaitingGuess,
    RoundComplete,
}

/// Everything produced by evaluating one guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessReport {
    /// The guess after case normalisation.
    pub guess: char,
    pub outcome: GuessOutcome,
    pub progress: usize,
    pub view: String,
    pub cells: Vec<Cell>,
    pub status: RoundStatus,
}

impl GuessReport {
    #[must_use]
    pub fn feedback(&self) -> String {
        self.outcome.describe(self.guess)
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    secret: Vec<char>,
    letters: HashMap<char, LetterState>,
    policy: SpacePolicy,
    target: usize,
    progress: usize,
    attempts: usize,
    misses: Vec<char>,
}

fn normalize(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl Session {
    /// Start a round for `word`. The word is lower-cased; repeated characters
    /// share one entry in the letter table.
    #[must_use]
    pub fn new(word: &str, policy: SpacePolicy) -> Self {
        let secret: Vec<char> = word.chars().map(normalize).collect();

        let mut letters = HashMap::new();
        for &c in &secret {
            let initial = if c.is_whitespace() && policy == SpacePolicy::AutoReveal {
                LetterState::Revealed
            } else {
                LetterState::Hidden
            };
            letters.entry(c).or_insert(initial);
        }

        let target = letters
            .values()
            .filter(|state| **state == LetterState::Hidden)
            .count();
        debug_log!("Session::new() - {} characters, target {}", secret.len(), target);

        Self {
            secret,
            letters,
            policy,
            target,
            progress: 0,
            attempts: 0,
            misses: Vec::new(),
        }
    }

    #[must_use]
    pub fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    /// Number of distinct characters that must be guessed to finish the round.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of correct, first-time guesses so far.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Every guess made this round, including repeats and misses.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Characters tried that are not in the word, in the order they were tried.
    #[must_use]
    pub fn misses(&self) -> &[char] {
        &self.misses
    }

    #[must_use]
    pub fn letter_state(&self, c: char) -> Option<LetterState> {
        self.letters.get(&normalize(c)).copied()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.progress >= self.target {
            RoundStatus::RoundComplete
        } else {
            RoundStatus::AwaitingGuess
        }
    }

    /// Per-position display state of the secret word.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        self.secret
            .iter()
            .map(|&c| match self.letters.get(&c) {
                Some(LetterState::Revealed) => Cell::Shown(c),
                _ if c.is_whitespace() && self.policy == SpacePolicy::AutoReveal => Cell::Shown(c),
                _ => Cell::Masked,
            })
            .collect()
    }

    /// Render the secret word with unrevealed characters masked.
    #[must_use]
    pub fn view(&self) -> String {
        self.cells()
            .into_iter()
            .map(|cell| match cell {
                Cell::Shown(c) => c,
                Cell::Masked => MASK,
            })
            .collect()
    }

    pub fn process_guess(&mut self, input: char) -> GuessReport {
        let guess = normalize(input);
        self.attempts += 1;

        let outcome = match self.letters.get(&guess).copied() {
            None => {
                self.letters.insert(guess, LetterState::Missed);
                self.misses.push(guess);
                GuessOutcome::Incorrect
            }
            Some(LetterState::Hidden) => {
                self.letters.insert(guess, LetterState::Revealed);
                self.progress += 1;
                GuessOutcome::Correct
            }
            Some(LetterState::Revealed | LetterState::Missed) => GuessOutcome::AlreadyPicked,
        };
        debug_log!(
            "process_guess() - '{}' -> {:?}, progress {}/{}",
            guess,
            outcome,
            self.progress,
            self.target
        );

        GuessReport {
            guess,
            outcome,
            progress: self.progress,
            view: self.view(),
            cells: self.cells(),
            status: self.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess_all(session: &mut Session, guesses: &str) -> Vec<GuessReport> {
        guesses.chars().map(|c| session.process_guess(c)).collect()
    }

    #[test]
    fn test_new_session_masks_everything() {
        let session = Session::new("apple", SpacePolicy::AutoReveal);
        assert_eq!(session.view(), "*****");
        assert_eq!(session.target(), 4);
        assert_eq!(session.progress(), 0);
        assert_eq!(session.status(), RoundStatus::AwaitingGuess);
    }

    #[test]
    fn test_secret_is_lowercased() {
        let session = Session::new("ApPlE", SpacePolicy::AutoReveal);
        assert_eq!(session.secret(), "apple");
    }

    #[test]
    fn test_apple_walkthrough() {
        let mut session = Session::new("apple", SpacePolicy::AutoReveal);

        let report = session.process_guess('p');
        assert_eq!(report.outcome, GuessOutcome::Correct);
        assert_eq!(report.progress, 1);
        assert_eq!(report.view, "*pp**");
        assert_eq!(report.status, RoundStatus::AwaitingGuess);

        let report = session.process_guess('a');
        assert_eq!(report.progress, 2);
        assert_eq!(report.view, "app**");

        let report = session.process_guess('l');
        assert_eq!(report.progress, 3);
        assert_eq!(report.view, "appl*");

        let report = session.process_guess('e');
        assert_eq!(report.progress, 4);
        assert_eq!(report.view, "apple");
        assert_eq!(report.status, RoundStatus::RoundComplete);
    }

    #[test]
    fn test_wrong_guess_then_repeat_is_already_picked() {
        let mut session = Session::new("apple", SpacePolicy::AutoReveal);

        let first = session.process_guess('z');
        assert_eq!(first.outcome, GuessOutcome::Incorrect);
        assert_eq!(first.progress, 0);
        assert_eq!(first.view, "*****");

        let second = session.process_guess('z');
        assert_eq!(second.outcome, GuessOutcome::AlreadyPicked);
        assert_eq!(second.progress, 0);
        assert_eq!(session.letter_state('z'), Some(LetterState::Missed));
        assert_eq!(session.misses(), &['z']);
    }

    #[test]
    fn test_repeat_correct_guess_is_already_picked() {
        let mut session = Session::new("apple", SpacePolicy::AutoReveal);
        session.process_guess('p');

        let report = session.process_guess('p');
        assert_eq!(report.outcome, GuessOutcome::AlreadyPicked);
        assert_eq!(report.progress, 1);
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn test_uppercase_guess_is_normalized() {
        let mut session = Session::new("apple", SpacePolicy::AutoReveal);

        let report = session.process_guess('P');
        assert_eq!(report.guess, 'p');
        assert_eq!(report.outcome, GuessOutcome::Correct);

        let report = session.process_guess('p');
        assert_eq!(report.outcome, GuessOutcome::AlreadyPicked);
    }

    #[test]
    fn test_digits_and_punctuation_are_accepted_as_guesses() {
        let mut session = Session::new("apple", SpacePolicy::AutoReveal);
        let reports = guess_all(&mut session, "7!");
        assert!(reports.iter().all(|r| r.outcome == GuessOutcome::Incorrect));
        assert_eq!(session.progress(), 0);
    }

    #[test]
    fn test_auto_reveal_spaces() {
        let mut session = Session::new("New Zealand", SpacePolicy::AutoReveal);
        assert_eq!(session.view(), "*** *******");
        // n, e, w, z, a, l, d
        assert_eq!(session.target(), 7);

        let report = session.process_guess(' ');
        assert_eq!(report.outcome, GuessOutcome::AlreadyPicked);

        guess_all(&mut session, "newzal");
        assert_eq!(session.status(), RoundStatus::AwaitingGuess);
        let report = session.process_guess('d');
        assert_eq!(report.view, "new zealand");
        assert_eq!(report.status, RoundStatus::RoundComplete);
    }

    #[test]
    fn test_auto_reveal_target_with_several_spaces() {
        let session = Session::new("united states of america", SpacePolicy::AutoReveal);
        // u n i t e d s a o f m r c
        assert_eq!(session.target(), 13);
    }

    #[test]
    fn test_auto_reveal_other_whitespace() {
        let session = Session::new("peru\t", SpacePolicy::AutoReveal);
        assert_eq!(session.target(), 4);
        assert_eq!(session.view(), "****\t");

        let mut session = Session::new("Costa\tRica", SpacePolicy::AutoReveal);
        assert_eq!(session.target(), 7);
        let reports = guess_all(&mut session, "costari");
        let last = reports.last().unwrap();
        assert_eq!(last.view, "costa\trica");
        assert_eq!(last.status, RoundStatus::RoundComplete);
    }

    #[test]
    fn test_cells_follow_letter_state_not_mask_char() {
        let mut session = Session::new("a*b", SpacePolicy::AutoReveal);
        assert_eq!(session.cells(), vec![Cell::Masked; 3]);

        let report = session.process_guess('*');
        assert_eq!(report.outcome, GuessOutcome::Correct);
        assert_eq!(report.view, "***");
        assert_eq!(
            report.cells,
            vec![Cell::Masked, Cell::Shown('*'), Cell::Masked]
        );
    }

    #[test]
    fn test_guess_policy_requires_space() {
        let mut session = Session::new("star fruit", SpacePolicy::Guess);
        assert_eq!(session.view(), "**********");
        assert_eq!(session.target(), 8);

        guess_all(&mut session, "starfuit");
        assert_eq!(session.view(), "star*fruit");
        assert_eq!(session.status(), RoundStatus::AwaitingGuess);

        let report = session.process_guess(' ');
        assert_eq!(report.outcome, GuessOutcome::Correct);
        assert_eq!(report.view, "star fruit");
        assert_eq!(report.status, RoundStatus::RoundComplete);
    }

    #[test]
    fn test_view_is_stable_between_guesses() {
        let mut session = Session::new("banana", SpacePolicy::AutoReveal);
        session.process_guess('n');
        assert_eq!(session.view(), session.view());
        assert_eq!(session.view(), "**n*n*");
    }

    #[test]
    fn test_round_trip_any_order_reveals_word() {
        for order in ["aple", "elpa", "pela", "lape"] {
            let mut session = Session::new("Apple", SpacePolicy::AutoReveal);
            let reports = guess_all(&mut session, order);
            let last = reports.last().unwrap();
            assert_eq!(last.view, "apple");
            assert_eq!(last.status, RoundStatus::RoundComplete);
            assert!(reports.iter().all(|r| r.outcome == GuessOutcome::Correct));
        }
    }

    #[test]
    fn test_misses_do_not_advance_progress() {
        let mut session = Session::new("kiwi", SpacePolicy::AutoReveal);
        guess_all(&mut session, "xyzk");
        assert_eq!(session.progress(), 1);
        assert_eq!(session.misses(), &['x', 'y', 'z']);
        assert_eq!(session.attempts(), 4);
    }

    #[test]
    fn test_feedback_lines() {
        assert_eq!(
            GuessOutcome::AlreadyPicked.describe('p'),
            "'p' was already picked. Try something else"
        );
        assert_eq!(GuessOutcome::Correct.describe('p'), "'p'? Correct guess!");
        assert_eq!(GuessOutcome::Incorrect.describe('z'), "z Is not correct, try again");
    }
}
