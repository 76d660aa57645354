//! Error types for termstyle

use thiserror::Error;

/// Main error type for termstyle operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A chained name that is not a color, an attribute, or `on`
    #[error("no style token named `{0}`")]
    UnknownToken(String),

    /// A style was painted while `on` was still waiting for a color
    #[error("'on' must be followed by a color to set the background")]
    DanglingOn,
}

/// Result type alias for termstyle operations
pub type Result<T> = std::result::Result<T, StyleError>;
