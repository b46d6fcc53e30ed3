//! Merge dictionaries: the capabilities an [`Accumulating`](super::Accumulating) bundle is built from.
//!
//! [`Semigroup`] and [`Monoid`] fix *one* merge rule per type. A dictionary is a value
//! that carries the rule instead, so the same annotation type can be accumulated in
//! different ways:
//!
//! ```rust
//! use tidemark::accumulate::{merge_with, Combine, Merge};
//!
//! // The type-level rule: string concatenation
//! assert_eq!(Combine.concat("a".to_string(), "b".to_string()), "ab");
//!
//! // A different rule for the same type
//! let longest = merge_with(|a: String, b: String| if b.len() > a.len() { b } else { a });
//! assert_eq!(longest.concat("ab".to_string(), "c".to_string()), "ab");
//! ```

use std::fmt;

use crate::{Monoid, Semigroup};

/// An associative merge over `S`.
///
/// # Laws
///
/// ```text
/// m.concat(m.concat(a, b), c) == m.concat(a, m.concat(b, c))
/// ```
pub trait Merge<S> {
    /// Merge an earlier annotation with a later one.
    fn concat(&self, earlier: S, later: S) -> S;
}

/// A [`Merge`] with a neutral element.
///
/// # Laws
///
/// ```text
/// m.concat(m.empty(), a) == a
/// m.concat(a, m.empty()) == a
/// ```
pub trait MergeIdentity<S>: Merge<S> {
    /// The neutral element.
    fn empty(&self) -> S;
}

impl<S, M: Merge<S> + ?Sized> Merge<S> for &M {
    #[inline]
    fn concat(&self, earlier: S, later: S) -> S {
        (**self).concat(earlier, later)
    }
}

impl<S, M: MergeIdentity<S> + ?Sized> MergeIdentity<S> for &M {
    #[inline]
    fn empty(&self) -> S {
        (**self).empty()
    }
}

/// The dictionary that defers to the annotation's own [`Semigroup`] / [`Monoid`] impl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Combine;

impl<S: Semigroup> Merge<S> for Combine {
    #[inline]
    fn concat(&self, earlier: S, later: S) -> S {
        earlier.combine(later)
    }
}

impl<S: Monoid> MergeIdentity<S> for Combine {
    #[inline]
    fn empty(&self) -> S {
        S::empty()
    }
}

/// A merge rule given by a closure. Built by [`merge_with`].
#[derive(Clone, Copy)]
pub struct MergeWith<F> {
    concat: F,
}

impl<F> fmt::Debug for MergeWith<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeWith").finish_non_exhaustive()
    }
}

impl<S, F> Merge<S> for MergeWith<F>
where
    F: Fn(S, S) -> S,
{
    #[inline]
    fn concat(&self, earlier: S, later: S) -> S {
        (self.concat)(earlier, later)
    }
}

/// Build a [`Merge`] dictionary from a closure.
///
/// The closure must be associative; this is not checked.
pub fn merge_with<S, F>(concat: F) -> MergeWith<F>
where
    F: Fn(S, S) -> S,
{
    MergeWith { concat }
}

/// A merge rule plus identity given by closures. Built by [`monoid_with`].
#[derive(Clone, Copy)]
pub struct MonoidWith<F, E> {
    concat: F,
    empty: E,
}

impl<F, E> fmt::Debug for MonoidWith<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonoidWith").finish_non_exhaustive()
    }
}

impl<S, F, E> Merge<S> for MonoidWith<F, E>
where
    F: Fn(S, S) -> S,
{
    #[inline]
    fn concat(&self, earlier: S, later: S) -> S {
        (self.concat)(earlier, later)
    }
}

impl<S, F, E> MergeIdentity<S> for MonoidWith<F, E>
where
    F: Fn(S, S) -> S,
    E: Fn() -> S,
{
    #[inline]
    fn empty(&self) -> S {
        (self.empty)()
    }
}

/// Build a [`MergeIdentity`] dictionary from a merge closure and an identity constructor.
///
/// ```rust
/// use tidemark::accumulate::{monoid_with, Merge, MergeIdentity};
///
/// let max = monoid_with(|a: u32, b: u32| a.max(b), || 0);
/// assert_eq!(max.concat(max.empty(), 7), 7);
/// ```
pub fn monoid_with<S, F, E>(concat: F, empty: E) -> MonoidWith<F, E>
where
    F: Fn(S, S) -> S,
    E: Fn() -> S,
{
    MonoidWith { concat, empty }
}
