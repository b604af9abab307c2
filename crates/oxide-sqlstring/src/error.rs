//! Error types for escaping and formatting.

/// Errors raised while building values for a template.
///
/// Escaping and formatting themselves never fail: every value has a
/// defined rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    /// A value of the wrong kind was passed where a specific kind is required.
    #[error("Invalid argument: expected {expected}, found {found}")]
    InvalidArgument {
        /// The kind that was required.
        expected: &'static str,
        /// The kind that was supplied.
        found: &'static str,
    },
}

impl EscapeError {
    /// Creates an invalid-argument error.
    #[must_use]
    pub const fn invalid_argument(expected: &'static str, found: &'static str) -> Self {
        Self::InvalidArgument { expected, found }
    }
}

/// Result type for value construction.
pub type Result<T> = std::result::Result<T, EscapeError>;
