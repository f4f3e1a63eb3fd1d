//! Error types for cellscript-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellscript-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid column letters
    #[error("Invalid column letters: {0}")]
    InvalidColumn(String),

    /// An offset moved an address off the grid
    #[error("Offset out of bounds for {0}")]
    OffsetOutOfBounds(String),
}
