//! Error types for the codebox engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid form pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Offset {offset} out of range for text of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("Invalid span {start}..{end}")]
    InvalidSpan { start: usize, end: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Span store fault: {0}")]
    SpanStore(String),

    #[error("{0}")]
    Message(String),
}
