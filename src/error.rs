//! Error types for the eightpuzzle crate

use thiserror::Error;

/// Main error type for the eightpuzzle crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid tile character '{character}' at position {position} in '{context}'")]
    InvalidTileCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid tile value {value} at position {position} (must be 0-8) in '{context}'")]
    InvalidTileValue {
        value: u8,
        position: usize,
        context: String,
    },

    #[error("duplicate tile {value} in '{context}' (each of 0-8 must appear exactly once)")]
    DuplicateTile { value: u8, context: String },

    #[error("expansion limit must be a positive integer")]
    ExpansionLimitZero,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

impl Error {
    /// Whether this error reports a board that is not a permutation of 0-8.
    ///
    /// Every search entry point refuses such boards before expanding any
    /// neighbor, so callers can use this to distinguish bad input from
    /// infrastructure failures.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Error::InvalidBoardLength { .. }
                | Error::InvalidTileCharacter { .. }
                | Error::InvalidTileValue { .. }
                | Error::DuplicateTile { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
