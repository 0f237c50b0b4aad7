//! Error types
//!
//! The scheduling operations themselves are total; errors only surface at
//! the edges where strings, configuration, or persisted JSON enter the crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SrsError {
    #[error("unknown verdict: {0}")]
    UnknownVerdict(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid scheduler config: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SrsResult<T> = Result<T, SrsError>;
