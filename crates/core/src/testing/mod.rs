//! Property-based testing utilities for the functional transformers
//!
//! Strategies here generate the ordered finite sequences the transformers
//! operate on. Enable the `testing` feature to use them from other crates.

use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;
    use proptest::option;

    /// Longest sequence produced by the generators
    pub const MAX_LEN: usize = 64;

    /// Generate small integers, both signs
    pub fn small_int() -> impl Strategy<Value = i32> {
        -1000i32..1000
    }

    /// Generate words made of ASCII letters, mixed case
    pub fn word() -> impl Strategy<Value = String> {
        "[a-zA-Z]{1,12}"
    }

    /// Generate possibly empty sequences
    pub fn sequence<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Vec<T>> {
        vec(element, 0..=MAX_LEN)
    }

    /// Generate sequences with at least one element
    pub fn non_empty_sequence<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Vec<T>> {
        vec(element, 1..=MAX_LEN)
    }

    /// Generate sequences of sequences, inner sequences may be empty
    pub fn nested_sequence<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Vec<Vec<T>>> {
        vec(vec(element, 0..=8), 0..=16)
    }

    /// Generate optional values
    pub fn maybe<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Option<T>> {
        option::of(element)
    }
}
