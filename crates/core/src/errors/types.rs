//! Core error type definitions

/// Result type alias for lambda-intro operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type using thiserror
///
/// Failures raised by user-supplied transformers and predicates are not
/// represented here: the fallible operations hand them back to the caller
/// exactly as the closure produced them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required argument was absent
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },
}

impl Error {
    /// Name of the argument this error refers to
    #[must_use]
    pub fn argument(&self) -> &str {
        match self {
            Error::InvalidArgument { argument, .. } => argument,
        }
    }

    /// Returns true if this is an `InvalidArgument` error
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
