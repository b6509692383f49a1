use crate::error::HangmanError;
use crate::info_log;
use clap::ValueEnum;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_COUNTRIES: &str = include_str!("resources/countries.txt");
pub const EMBEDDED_FRUITS: &str = include_str!("resources/fruits.txt");

/// Word lists compiled into the binary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Dictionary {
    #[default]
    Countries,
    Fruits,
}

impl Dictionary {
    #[must_use]
    pub fn contents(self) -> &'static str {
        match self {
            Self::Countries => EMBEDDED_COUNTRIES,
            Self::Fruits => EMBEDDED_FRUITS,
        }
    }
}

/// The pool of candidate words, in file order. Lines are kept verbatim,
/// blank ones included; blanks are skipped when picking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Pick one playable entry uniformly at random.
    ///
    /// # Errors
    /// `HangmanError::EmptyPool` if the list has no entry with a visible character.
    pub fn pick<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<&str, HangmanError> {
        let playable: Vec<&str> = self.iter().filter(|w| !w.trim().is_empty()).collect();
        playable
            .choose(rng)
            .copied()
            .ok_or(HangmanError::EmptyPool)
    }
}

pub fn load_wordbank_from_str(data: &str) -> WordList {
    WordList::new(data.lines().map(str::to_string).collect())
}

/// Read a word list file, one entry per line.
///
/// # Errors
/// `HangmanError::Load` if the file cannot be opened or a line cannot be read.
pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, HangmanError> {
    let path = path.as_ref();
    let load_error = |source| HangmanError::Load {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(load_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        words.push(line.map_err(load_error)?);
    }
    info_log!("Loaded {} entries from {}", words.len(), path.display());
    Ok(WordList::new(words))
}
