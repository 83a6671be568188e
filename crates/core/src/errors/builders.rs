//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error for an argument that was not supplied
    #[must_use]
    pub fn absent_argument(argument: impl Into<String>) -> Self {
        Self::invalid_argument(argument, "required argument is absent")
    }
}
