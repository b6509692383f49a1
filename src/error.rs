use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("failed to load word list from '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the word pool has no playable entries")]
    EmptyPool,

    /// The input stream closed while waiting for a guess or answer.
    #[error("input exhausted")]
    InputExhausted,

    #[error(transparent)]
    Io(#[from] io::Error),
}
