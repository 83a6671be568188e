//! Composition of unary callables and predicates
//!
//! Any closure or fn item is a callable here. The operators below build new
//! closures out of existing ones without boxing, so composed functions stay
//! monomorphic and can be inlined at the call site.

/// Forward composition operator (f >> g)
pub fn forward_compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Identity function
pub fn identity<T>(x: T) -> T {
    x
}

/// Logical complement of a predicate.
///
/// The returned closure calls `predicate` exactly once per invocation, so
/// stateful predicates observe the same sequence of calls as they would
/// without negation.
pub fn negate<T, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    P: FnMut(&T) -> bool,
{
    move |x| !predicate(x)
}

/// Logical complement of a fallible predicate. Errors pass through untouched.
pub fn try_negate<T, E, P>(mut predicate: P) -> impl FnMut(&T) -> Result<bool, E>
where
    T: ?Sized,
    P: FnMut(&T) -> Result<bool, E>,
{
    move |x| predicate(x).map(|passed| !passed)
}
