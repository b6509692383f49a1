// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::HangmanError;
pub use game_state::{GameInterface, UserAction, game_loop};
pub use session::{Cell, GuessOutcome, GuessReport, LetterState, RoundStatus, Session, SpacePolicy};
pub use wordbank::{Dictionary, WordList, load_wordbank_from_file, load_wordbank_from_str};
