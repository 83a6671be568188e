//! Collection transformations driven by plain closures.
//!
//! The four core operations each take an ordered, borrowed sequence and a
//! callable, and return a freshly allocated `Vec` in input order:
//!
//! - [`map`]: apply a transformer to every element.
//! - [`flatten`]: concatenate a sequence of sequences.
//! - [`select`]: keep the elements a predicate accepts.
//! - [`reject`]: keep the elements a predicate refuses, expressed as `select`
//!   over the negated predicate.
//!
//! [`flat_map`], [`partition`] and the fallible `try_*` variants follow the same
//! rules. The [`checked`] module wraps the core operations for callers whose
//! arguments may be absent.
//!
//! ```
//! use lambda_transformers::{flatten, map, reject, select};
//!
//! let nested = vec![vec![1, 2], vec![], vec![3]];
//! let flat = flatten(&nested);
//! assert_eq!(flat, vec![1, 2, 3]);
//!
//! assert_eq!(map(&flat, |n| n * 10), vec![10, 20, 30]);
//! assert_eq!(select(&flat, |n| n % 2 == 1), vec![1, 3]);
//! assert_eq!(reject(&flat, |n| n % 2 == 1), vec![2]);
//! ```

pub mod checked;
pub mod transform;

pub use transform::{
    flat_map, flatten, map, partition, reject, select, try_map, try_reject, try_select,
};
