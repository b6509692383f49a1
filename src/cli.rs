use crate::error::HangmanError;
use crate::game_state::{GameInterface, UserAction};
use crate::session::{GuessReport, Session, SpacePolicy};
use crate::wordbank::Dictionary;
use clap::Parser;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const GUESS_PROMPT: &str = ">>> Guess a character: ";

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Built-in word list used when no input file is given
    #[arg(short = 'd', long = "dictionary", value_enum, default_value_t = Dictionary::Countries)]
    pub dictionary: Dictionary,

    /// Whether spaces in multi-word entries are shown up front or must be guessed
    #[arg(long = "spaces", value_enum, default_value_t = SpacePolicy::AutoReveal)]
    pub spaces: SpacePolicy,

    /// Seed for the word picker, for reproducible games
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Run the full-screen terminal interface
    #[arg(long = "tui")]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Splits input into whitespace-delimited tokens, pulling lines from the
/// reader only when the current line is used up.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// # Errors
    /// `InputExhausted` at end of input, `Io` if reading fails.
    pub fn next_token(&mut self) -> Result<String, HangmanError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(HangmanError::InputExhausted);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

fn first_char(token: &str) -> Result<char, HangmanError> {
    token.chars().next().ok_or(HangmanError::InputExhausted)
}

fn is_yes(token: &str) -> bool {
    token.eq_ignore_ascii_case("y")
}

/// Line console implementation of the `GameInterface` trait.
/// Reads tokens from any `BufRead` and writes the prompts to any `Write`.
pub struct CliInterface<R: BufRead, W: Write> {
    tokens: TokenReader<R>,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            tokens: TokenReader::new(reader),
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_round_start(&mut self, _session: &Session) -> io::Result<()> {
        Ok(())
    }

    fn read_guess(&mut self) -> Result<UserAction, HangmanError> {
        write!(self.writer, "{GUESS_PROMPT}")?;
        self.writer.flush()?;
        let token = self.tokens.next_token()?;
        Ok(UserAction::Guess(first_char(&token)?))
    }

    fn display_guess_result(&mut self, report: &GuessReport) -> io::Result<()> {
        writeln!(self.writer, "{} {}", report.feedback(), report.view)
    }

    fn read_play_again(&mut self, progress: usize) -> Result<bool, HangmanError> {
        write!(
            self.writer,
            ">>> You tried {progress} times. Would you like to play again? Enter Y or N "
        )?;
        self.writer.flush()?;
        let token = self.tokens.next_token()?;
        Ok(is_yes(&token))
    }

    fn display_exit_message(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
