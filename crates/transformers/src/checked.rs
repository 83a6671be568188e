//! Argument-checked entry points
//!
//! The plain operations cannot be handed an absent sequence or callable. These
//! wrappers accept `Option`s instead, for callers that assemble their
//! arguments at runtime, and fail with `Error::InvalidArgument` naming the
//! first absent argument. The sequence is checked before the callable, and the
//! callable is never invoked when an argument is missing.

use lambda_core::{Result, Validate};

use crate::transform;

/// `map` with presence checks on `base` and `transformer`.
///
/// # Examples
/// ```
/// use lambda_transformers::checked;
///
/// let doubled = checked::map(Some(&[1, 2, 3][..]), Some(|n: &i32| n * 2));
/// assert_eq!(doubled.unwrap(), vec![2, 4, 6]);
///
/// let missing = checked::map(Some(&[1, 2, 3][..]), None::<fn(&i32) -> i32>);
/// assert_eq!(missing.unwrap_err().argument(), "transformer");
/// ```
pub fn map<I, O, F>(base: Option<&[I]>, transformer: Option<F>) -> Result<Vec<O>>
where
    F: FnMut(&I) -> O,
{
    let base = Validate::present(base, "base")?;
    let transformer = Validate::present(transformer, "transformer")?;
    Ok(transform::map(base, transformer))
}

/// `flatten` with a presence check on `base`.
pub fn flatten<I, S>(base: Option<&[S]>) -> Result<Vec<I>>
where
    I: Clone,
    S: AsRef<[I]>,
{
    let base = Validate::present(base, "base")?;
    Ok(transform::flatten(base))
}

/// `select` with presence checks on `base` and `test`.
pub fn select<I, P>(base: Option<&[I]>, test: Option<P>) -> Result<Vec<I>>
where
    I: Clone,
    P: FnMut(&I) -> bool,
{
    let base = Validate::present(base, "base")?;
    let test = Validate::present(test, "test")?;
    Ok(transform::select(base, test))
}

/// `reject` with presence checks on `base` and `test`.
pub fn reject<I, P>(base: Option<&[I]>, test: Option<P>) -> Result<Vec<I>>
where
    I: Clone,
    P: FnMut(&I) -> bool,
{
    let base = Validate::present(base, "base")?;
    let test = Validate::present(test, "test")?;
    Ok(transform::reject(base, test))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_core::Error;

    type Transformer = fn(&i32) -> i32;
    type Predicate = fn(&i32) -> bool;

    fn is_even(n: &i32) -> bool {
        n % 2 == 0
    }

    #[test]
    fn test_present_arguments_match_plain_operations() {
        let numbers = vec![1, 2, 3, 4];
        let nested = vec![vec![1], vec![], vec![2, 3]];

        assert_eq!(
            map(Some(numbers.as_slice()), Some(|n: &i32| n + 1)).unwrap(),
            transform::map(&numbers, |n| n + 1)
        );
        assert_eq!(
            flatten(Some(nested.as_slice())).unwrap(),
            transform::flatten(&nested)
        );
        assert_eq!(
            select(Some(numbers.as_slice()), Some(is_even as Predicate)).unwrap(),
            vec![2, 4]
        );
        assert_eq!(
            reject(Some(numbers.as_slice()), Some(is_even as Predicate)).unwrap(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_absent_base() {
        let err = map(None::<&[i32]>, Some((|n| n + 1) as Transformer)).unwrap_err();
        assert_eq!(err, Error::absent_argument("base"));

        let err = flatten::<i32, Vec<i32>>(None).unwrap_err();
        assert_eq!(err.argument(), "base");

        let err = select(None::<&[i32]>, Some(is_even as Predicate)).unwrap_err();
        assert_eq!(err.argument(), "base");

        let err = reject(None::<&[i32]>, Some(is_even as Predicate)).unwrap_err();
        assert_eq!(err.argument(), "base");
    }

    #[test]
    fn test_absent_callable() {
        let numbers = [1, 2, 3];

        let err = map(Some(&numbers[..]), None::<Transformer>).unwrap_err();
        assert_eq!(err.argument(), "transformer");
        assert_eq!(
            err.to_string(),
            "invalid argument 'transformer': required argument is absent"
        );

        let err = select(Some(&numbers[..]), None::<Predicate>).unwrap_err();
        assert_eq!(err.argument(), "test");

        let err = reject(Some(&numbers[..]), None::<Predicate>).unwrap_err();
        assert_eq!(err.argument(), "test");
    }

    #[test]
    fn test_base_checked_before_callable() {
        let err = select(None::<&[i32]>, None::<Predicate>).unwrap_err();
        assert_eq!(err.argument(), "base");
    }

    #[test]
    fn test_callable_not_invoked_on_error() {
        let mut calls = 0;
        let result = map(None::<&[i32]>, Some(|n: &i32| {
            calls += 1;
            *n
        }));

        assert!(result.is_err());
        assert_eq!(calls, 0);
    }
}
