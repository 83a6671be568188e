//! Order-preserving transformations over borrowed sequences
//!
//! Every operation here walks its input exactly once, front to back, invokes
//! the supplied callable once per element in that order, and returns a new
//! `Vec`. Inputs are only ever borrowed immutably.

use lambda_core::functional::{negate, try_negate};

/// Applies `transformer` to every element of `base`.
///
/// The result has the same length as `base`, and its element at each position
/// is `transformer` applied to the input element at that position.
///
/// # Examples
/// ```
/// use lambda_transformers::map;
///
/// let words = ["sit", "amet"];
/// assert_eq!(map(&words, |w| w.len()), vec![3, 4]);
/// ```
pub fn map<I, O, F>(base: &[I], transformer: F) -> Vec<O>
where
    F: FnMut(&I) -> O,
{
    tracing::trace!(operation = "map", len = base.len());
    base.iter().map(transformer).collect()
}

/// Concatenates the inner sequences of `base` in outer order.
///
/// Inner sequences may be empty. The result length is the sum of the inner
/// lengths.
///
/// # Examples
/// ```
/// use lambda_transformers::flatten;
///
/// let nested = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
///
/// let empty: Vec<Vec<i32>> = vec![vec![]];
/// assert!(flatten(&empty).is_empty());
/// ```
pub fn flatten<I, S>(base: &[S]) -> Vec<I>
where
    I: Clone,
    S: AsRef<[I]>,
{
    let total: usize = base.iter().map(|inner| inner.as_ref().len()).sum();
    tracing::trace!(operation = "flatten", len = base.len(), total);

    let mut result = Vec::with_capacity(total);
    for inner in base {
        result.extend_from_slice(inner.as_ref());
    }
    result
}

/// Keeps the elements of `base` for which `test` returns true.
///
/// # Examples
/// ```
/// use lambda_transformers::select;
///
/// assert_eq!(select(&[1, 2, 3, 4, 5], |n| n % 2 == 1), vec![1, 3, 5]);
/// ```
pub fn select<I, P>(base: &[I], mut test: P) -> Vec<I>
where
    I: Clone,
    P: FnMut(&I) -> bool,
{
    tracing::trace!(operation = "select", len = base.len());
    base.iter().filter(|item| test(item)).cloned().collect()
}

/// Keeps the elements of `base` for which `test` returns false.
///
/// This is `select` over the negated predicate.
///
/// # Examples
/// ```
/// use lambda_transformers::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4, 5], |n| n % 2 == 0), vec![1, 3, 5]);
/// ```
pub fn reject<I, P>(base: &[I], test: P) -> Vec<I>
where
    I: Clone,
    P: FnMut(&I) -> bool,
{
    select(base, negate(test))
}

/// Maps every element to zero or more outputs and concatenates them.
///
/// The outputs may borrow from `base`, so an element's own iterator can be
/// returned directly.
///
/// # Examples
/// ```
/// use lambda_transformers::flat_map;
///
/// let result = flat_map(&[1, 2, 3], |x| vec![*x, *x * 10]);
/// assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
///
/// let nested = vec![vec![1, 2], vec![3]];
/// assert_eq!(flat_map(&nested, |v| v.iter().copied()), vec![1, 2, 3]);
/// ```
pub fn flat_map<'a, I, O, C, F>(base: &'a [I], transformer: F) -> Vec<O>
where
    F: FnMut(&'a I) -> C,
    C: IntoIterator<Item = O>,
{
    tracing::trace!(operation = "flat_map", len = base.len());
    base.iter().flat_map(transformer).collect()
}

/// Splits `base` into the elements `select` and `reject` would return, in
/// one pass.
pub fn partition<I, P>(base: &[I], mut test: P) -> (Vec<I>, Vec<I>)
where
    I: Clone,
    P: FnMut(&I) -> bool,
{
    tracing::trace!(operation = "partition", len = base.len());

    let mut selected = Vec::new();
    let mut rejected = Vec::new();
    for item in base {
        if test(item) {
            selected.push(item.clone());
        } else {
            rejected.push(item.clone());
        }
    }
    (selected, rejected)
}

/// Fallible `map`. Stops at the first error and returns it unchanged.
///
/// # Examples
/// ```
/// use lambda_transformers::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(&["1", "2"], |s| s.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// assert!(try_map(&["1", "x"], |s| s.parse::<i32>()).is_err());
/// ```
pub fn try_map<I, O, E, F>(base: &[I], mut transformer: F) -> Result<Vec<O>, E>
where
    F: FnMut(&I) -> Result<O, E>,
{
    tracing::trace!(operation = "try_map", len = base.len());

    let mut result = Vec::with_capacity(base.len());
    for (index, item) in base.iter().enumerate() {
        match transformer(item) {
            Ok(value) => result.push(value),
            Err(error) => {
                tracing::debug!(operation = "try_map", index, "transformer failed");
                return Err(error);
            }
        }
    }
    Ok(result)
}

/// Fallible `select`. Stops at the first error and returns it unchanged.
pub fn try_select<I, E, P>(base: &[I], mut test: P) -> Result<Vec<I>, E>
where
    I: Clone,
    P: FnMut(&I) -> Result<bool, E>,
{
    tracing::trace!(operation = "try_select", len = base.len());

    let mut result = Vec::new();
    for (index, item) in base.iter().enumerate() {
        match test(item) {
            Ok(true) => result.push(item.clone()),
            Ok(false) => {}
            Err(error) => {
                tracing::debug!(operation = "try_select", index, "predicate failed");
                return Err(error);
            }
        }
    }
    Ok(result)
}

/// Fallible `reject`, built on `try_select` with the negated predicate.
pub fn try_reject<I, E, P>(base: &[I], test: P) -> Result<Vec<I>, E>
where
    I: Clone,
    P: FnMut(&I) -> Result<bool, E>,
{
    try_select(base, try_negate(test))
}
