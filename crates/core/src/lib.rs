//! Core building blocks for the `lambda-intro` transformers.
//!
//! This crate holds the pieces every transformation relies on but that are not
//! themselves transformations.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the `Error` enum and `Result` type alias, plus the
//!   `Validate` helpers used to turn absent arguments into typed errors.
//! - **`functional`**: Composition operators over plain closures (`identity`,
//!   `negate`, `forward_compose`, ...). Native `Fn` types are the callable
//!   abstraction; nothing here wraps them in trait objects.
//! - **`testing`**: `proptest` strategies shared by the property tests of the
//!   workspace. Only compiled with the `testing` feature.

pub mod errors;
pub mod functional;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::errors::{Error, Result, Validate};
