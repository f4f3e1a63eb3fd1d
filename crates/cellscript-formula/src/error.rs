//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
///
/// Circular references are deliberately not represented here: they are
/// detected before evaluation and surface as an ordinary text value
/// (`RECURSIVE <address>`), never as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// String literal with no closing quote
    #[error("Unterminated string literal")]
    UnterminatedString,

    /// Postfix sequence that under- or over-fills the value stack,
    /// or a call marker outside a function context
    #[error("Malformed expression")]
    MalformedExpression,

    /// Unknown function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Invalid argument to a function
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// Token used as a cell reference that does not decode to an address
    #[error("Invalid reference: {0}")]
    Reference(#[from] cellscript_core::Error),
}
