//! Structured error types for the molwt tools.

use thiserror::Error;

/// Unified error type for all molwt operations.
#[derive(Debug, Error)]
pub enum MolwtError {
    /// The periodic table rows could not be obtained at all.
    #[error("periodic table unavailable: {0}")]
    TableUnavailable(String),

    /// No element-like run was found in a formula string.
    #[error("invalid chemical formula: {0}")]
    InvalidFormula(String),

    /// A well-formed run names a symbol the periodic index does not hold.
    #[error("unknown element '{0}'")]
    UnknownElement(String),

    /// Parse error (malformed table data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error outside of table loading (config, stdin, stdout)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MolwtError {
    /// Whether the caller can recover by asking for another formula.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MolwtError::InvalidFormula(_) | MolwtError::UnknownElement(_)
        )
    }
}

/// Convenience alias used throughout the molwt crates.
pub type Result<T> = std::result::Result<T, MolwtError>;
