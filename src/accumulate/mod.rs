//! Accumulating sequencing for [`Pair`]s.
//!
//! Sequencing two annotated computations needs a rule for merging their annotations.
//! This module turns such a rule into the sequencing operations:
//!
//! | Capability | Operations |
//! |---|---|
//! | [`Merge`] (semigroup) | [`ap`](Accumulating::ap), [`chain`](Accumulating::chain), [`zip`](Accumulating::zip), [`map2`](Accumulating::map2), [`flatten`](Accumulating::flatten) |
//! | [`MergeIdentity`] (monoid) | the above plus [`of`](Accumulating::of) and [`tail_rec`](Accumulating::tail_rec) |
//!
//! The rule is supplied either as a dictionary value passed to
//! [`Accumulating::new`], or implicitly through the annotation's own
//! [`Semigroup`]/[`Monoid`] impl, in which case the same operations are available as
//! methods on [`Pair`] itself.
//!
//! # Ordering
//!
//! Merges are never reordered. The annotation of the earlier computation (the function
//! side of `ap`, the outer pair of `chain`) is always the first argument to the merge.
//!
//! # Example
//!
//! ```rust
//! use tidemark::Pair;
//!
//! fn parse(input: &str) -> Pair<i64, Vec<String>> {
//!     let n = input.trim().parse().unwrap_or(0);
//!     Pair::new(n, vec![format!("parsed {n}")])
//! }
//!
//! fn double(n: i64) -> Pair<i64, Vec<String>> {
//!     Pair::new(n * 2, vec!["doubled".to_string()])
//! }
//!
//! let result = parse(" 21 ").and_then(double);
//! assert_eq!(result.first(), &42);
//! assert_eq!(result.second(), &vec!["parsed 21".to_string(), "doubled".to_string()]);
//! ```
//!
//! # Explicit dictionaries
//!
//! ```rust
//! use tidemark::accumulate::{monoid_with, Accumulating};
//! use tidemark::Pair;
//!
//! // Track the peak cost of any single step
//! let peak = Accumulating::new(monoid_with(|a: u32, b: u32| a.max(b), || 0));
//!
//! let p = peak.chain(Pair::new(1, 5), |n| Pair::new(n + 1, 3));
//! assert_eq!(p, Pair::new(2, 5));
//! ```

mod merge;
mod tail_rec;


pub use merge::{merge_with, monoid_with, Combine, Merge, MergeIdentity, MergeWith, MonoidWith};

use crate::{Either, Monoid, Pair, Semigroup};

/// The sequencing operations for `Pair<_, S>` given a merge dictionary `M`.
///
/// Which methods are callable depends on what `M` provides: `M: Merge<S>` enables
/// `ap`/`chain` and friends, `M: MergeIdentity<S>` additionally enables `of` and
/// `tail_rec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulating<M> {
    merge: M,
}

impl Accumulating<Combine> {
    /// The bundle that uses the annotation's own `Semigroup`/`Monoid` impl.
    pub fn combine() -> Self {
        Accumulating { merge: Combine }
    }
}

impl<M> Accumulating<M> {
    /// Build the bundle from a merge dictionary.
    pub fn new(merge: M) -> Self {
        Accumulating { merge }
    }

    /// The dictionary this bundle was built from.
    pub fn merge(&self) -> &M {
        &self.merge
    }

    /// Transform the value. Needs no merge; provided so the bundle is a complete functor.
    #[inline]
    pub fn map<A, B, S, F>(&self, pa: Pair<A, S>, f: F) -> Pair<B, S>
    where
        F: FnOnce(A) -> B,
    {
        pa.map(f)
    }

    /// Apply an annotated function to an annotated argument.
    ///
    /// The result annotation is `concat(function side, argument side)`, in that order.
    ///
    /// ```rust
    /// use tidemark::accumulate::Accumulating;
    /// use tidemark::Pair;
    ///
    /// let acc = Accumulating::combine();
    /// let pf = Pair::new(|n: i32| n + 1, "f".to_string());
    /// let pa = Pair::new(1, "a".to_string());
    /// assert_eq!(acc.ap(pf, pa), Pair::new(2, "fa".to_string()));
    /// ```
    #[inline]
    pub fn ap<A, B, S, F>(&self, pf: Pair<F, S>, pa: Pair<A, S>) -> Pair<B, S>
    where
        M: Merge<S>,
        F: FnOnce(A) -> B,
    {
        let (f, s1) = pf.into_parts();
        let (a, s2) = pa.into_parts();
        Pair::new(f(a), self.merge.concat(s1, s2))
    }

    /// Combine two independent pairs with a function of both values.
    #[inline]
    pub fn map2<A, B, C, S, F>(&self, pa: Pair<A, S>, pb: Pair<B, S>, f: F) -> Pair<C, S>
    where
        M: Merge<S>,
        F: FnOnce(A, B) -> C,
    {
        self.ap(pa.map(|a| move |b| f(a, b)), pb)
    }

    /// Combine two independent pairs into a pair of both values.
    #[inline]
    pub fn zip<A, B, S>(&self, pa: Pair<A, S>, pb: Pair<B, S>) -> Pair<(A, B), S>
    where
        M: Merge<S>,
    {
        self.map2(pa, pb, |a, b| (a, b))
    }

    /// Feed the value into a dependent step.
    ///
    /// The result annotation is `concat(annotation of pa, annotation produced by f)`.
    #[inline]
    pub fn chain<A, B, S, F>(&self, pa: Pair<A, S>, f: F) -> Pair<B, S>
    where
        M: Merge<S>,
        F: FnOnce(A) -> Pair<B, S>,
    {
        let (a, s1) = pa.into_parts();
        let (b, s2) = f(a).into_parts();
        Pair::new(b, self.merge.concat(s1, s2))
    }

    /// Collapse a nested pair, outer annotation first.
    #[inline]
    pub fn flatten<A, S>(&self, ppa: Pair<Pair<A, S>, S>) -> Pair<A, S>
    where
        M: Merge<S>,
    {
        self.chain(ppa, |pa| pa)
    }

    /// Lift a bare value with the empty annotation.
    #[inline]
    pub fn of<A, S>(&self, a: A) -> Pair<A, S>
    where
        M: MergeIdentity<S>,
    {
        Pair::new(a, self.merge.empty())
    }
}

// ========== Type-level instance ==========

impl<F, S: Semigroup> Pair<F, S> {
    /// Apply the annotated function in `self` to `pa`, merging `self`'s annotation first.
    ///
    /// ```rust
    /// use tidemark::Pair;
    ///
    /// let pf = Pair::new(|s: &str| s.len(), vec!["measure"]);
    /// assert_eq!(pf.ap(Pair::new("four", vec!["load"])), Pair::new(4, vec!["measure", "load"]));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, pa: Pair<A, S>) -> Pair<B, S>
    where
        F: FnOnce(A) -> B,
    {
        Accumulating::combine().ap(self, pa)
    }
}

impl<A, S: Semigroup> Pair<A, S> {
    /// Dependent sequencing: run `f` on the value and append its annotation.
    #[inline]
    pub fn and_then<B, G>(self, f: G) -> Pair<B, S>
    where
        G: FnOnce(A) -> Pair<B, S>,
    {
        Accumulating::combine().chain(self, f)
    }

    /// Pair up two values, merging annotations left to right.
    #[inline]
    pub fn zip<B>(self, other: Pair<B, S>) -> Pair<(A, B), S> {
        Accumulating::combine().zip(self, other)
    }

    /// Combine two values with `f`, merging annotations left to right.
    #[inline]
    pub fn zip_with<B, C, G>(self, other: Pair<B, S>, f: G) -> Pair<C, S>
    where
        G: FnOnce(A, B) -> C,
    {
        Accumulating::combine().map2(self, other, f)
    }

    /// Append `annotation` after the current one, keeping the value.
    ///
    /// ```rust
    /// use tidemark::Pair;
    ///
    /// let p = Pair::new(1, vec!["load"]).tell(vec!["validate"]);
    /// assert_eq!(p, Pair::new(1, vec!["load", "validate"]));
    /// ```
    #[inline]
    pub fn tell(self, annotation: S) -> Pair<A, S> {
        self.and_then(|value| Pair::new(value, annotation))
    }
}

impl<A, S: Semigroup> Pair<Pair<A, S>, S> {
    /// Collapse a nested pair, outer annotation first.
    #[inline]
    pub fn flatten(self) -> Pair<A, S> {
        Accumulating::combine().flatten(self)
    }
}

impl<A, S: Monoid> Pair<A, S> {
    /// Lift a bare value with `S::empty()` as annotation.
    #[inline]
    pub fn pure(value: A) -> Self {
        Accumulating::combine().of(value)
    }

    /// Run `step` until it returns `Either::Right`, accumulating every annotation.
    ///
    /// See [`Accumulating::tail_rec`].
    ///
    /// ```rust
    /// use tidemark::{Either, Pair};
    ///
    /// let p: Pair<u32, Vec<u32>> = Pair::tail_rec(0, |n| {
    ///     if n < 3 { Pair::new(Either::left(n + 1), vec![n]) }
    ///     else { Pair::new(Either::right(n), vec![]) }
    /// });
    /// assert_eq!(p, Pair::new(3, vec![0, 1, 2]));
    /// ```
    #[inline]
    pub fn tail_rec<Seed, F>(seed: Seed, step: F) -> Self
    where
        F: FnMut(Seed) -> Pair<Either<Seed, A>, S>,
    {
        Accumulating::combine().tail_rec(seed, step)
    }
}

impl<S> Pair<(), S> {
    /// A pair carrying only an annotation.
    #[inline]
    pub fn told(annotation: S) -> Self {
        Pair::new((), annotation)
    }
}
