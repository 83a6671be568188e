//! Argument validation for entry points that accept optional inputs

use super::types::{Error, Result};

/// Functional validation utilities
pub struct Validate;

impl Validate {
    /// Unwrap a required argument, failing with `InvalidArgument` when absent
    pub fn present<T>(value: Option<T>, argument: &str) -> Result<T> {
        match value {
            Some(value) => Ok(value),
            None => {
                tracing::debug!(argument, "required argument is absent");
                Err(Error::absent_argument(argument))
            }
        }
    }
}
