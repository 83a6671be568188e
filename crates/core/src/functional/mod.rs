//! Functional programming utilities for lambda-intro
//!
//! The unary callable abstraction is Rust's own `Fn` family. This module only
//! adds the operators for combining callables, most importantly `negate`,
//! which the transformers use to express `reject` in terms of `select`.

pub mod composition;

pub use composition::{forward_compose, identity, negate, try_negate};
