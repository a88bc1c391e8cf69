//! Error types for the gridmind crate

use thiserror::Error;

/// Main error type for the gridmind crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot pop from an empty container")]
    EmptyContainer,

    #[error("agent {agent} has no legal actions in this state")]
    NoLegalActions { agent: usize },

    #[error("invalid cost {value}: costs must be finite and non-negative")]
    InvalidCost { value: f64 },

    #[error("unknown character '{character}' at row {row}, column {column}")]
    UnknownMapCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("row {row} has width {got}, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("map contains no rows")]
    EmptyMap,

    #[error("map has no start cell ('S')")]
    MissingStart,

    #[error("map has no goal cell ('G')")]
    MissingGoal,

    #[error("duplicate start cell at row {row}, column {column}")]
    DuplicateStart { row: usize, column: usize },

    #[error("duplicate goal cell at row {row}, column {column}")]
    DuplicateGoal { row: usize, column: usize },

    #[error("map has no player cell ('P')")]
    MissingPlayer,

    #[error("duplicate player cell at row {row}, column {column}")]
    DuplicatePlayer { row: usize, column: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using the crate's error type
pub type Result<T> = std::result::Result<T, Error>;
