//! Error types and argument validation for lambda-intro operations

mod builders;
mod types;
mod validate;

pub use types::{Error, Result};
pub use validate::Validate;
