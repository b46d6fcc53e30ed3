//! The annotated pair and its algebra-free operations
//!
//! A [`Pair<A, S>`] holds a value of type `A` together with an annotation of type `S`.
//! The annotation is a side channel: a trace, a cost, a set of warnings. This module
//! covers everything that can be done to a pair *without* knowing how annotations
//! merge:
//!
//! - **Accessors**: [`first`](Pair::first), [`second`](Pair::second),
//!   [`into_parts`](Pair::into_parts), [`swap`](Pair::swap)
//! - **Functor / Bifunctor**: [`map`](Pair::map), [`map_annotation`](Pair::map_annotation),
//!   [`bimap`](Pair::bimap)
//! - **Semigroupoid**: [`compose`](Pair::compose)
//! - **Comonad**: [`extend`](Pair::extend), [`duplicate`](Pair::duplicate),
//!   [`extract`](Pair::extract)
//!
//! Operations that merge annotations live in [`accumulate`](crate::accumulate), and
//! folding/traversal in [`traverse`](crate::traverse).
//!
//! # Examples
//!
//! ```
//! use tidemark::Pair;
//!
//! let p = Pair::new(2, "cached");
//! assert_eq!(p.first(), &2);
//! assert_eq!(p.second(), &"cached");
//!
//! let doubled = p.map(|n| n * 2);
//! assert_eq!(doubled, Pair::new(4, "cached"));
//!
//! assert_eq!(Pair::new(1, "a").swap(), Pair::new("a", 1));
//! ```

/// A value paired with an annotation.
///
/// Pairs are never mutated in place: every operation consumes the pair and returns a
/// new one. The value and annotation are independent of each other; no operation looks
/// at the value to decide what happens to the annotation.
///
/// # Example
///
/// ```
/// use tidemark::Pair;
///
/// let p: Pair<i32, Vec<&str>> = (5, vec!["loaded"]).into();
/// let (value, notes) = p.into_parts();
/// assert_eq!(value, 5);
/// assert_eq!(notes, vec!["loaded"]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, S> {
    value: A,
    annotation: S,
}

impl<A, S> Pair<A, S> {
    /// Pair a value with an annotation.
    #[inline]
    pub fn new(value: A, annotation: S) -> Self {
        Pair { value, annotation }
    }

    // ========== Accessors ==========

    /// Borrow the value.
    #[inline]
    pub fn first(&self) -> &A {
        &self.value
    }

    /// Borrow the annotation.
    #[inline]
    pub fn second(&self) -> &S {
        &self.annotation
    }

    /// Take the value, discarding the annotation.
    #[inline]
    pub fn into_first(self) -> A {
        self.value
    }

    /// Take the annotation, discarding the value.
    #[inline]
    pub fn into_second(self) -> S {
        self.annotation
    }

    /// Split into `(value, annotation)`.
    #[inline]
    pub fn into_parts(self) -> (A, S) {
        (self.value, self.annotation)
    }

    /// Convert to `Pair<&A, &S>`.
    #[inline]
    pub fn as_ref(&self) -> Pair<&A, &S> {
        Pair::new(&self.value, &self.annotation)
    }

    /// Exchange value and annotation.
    ///
    /// `swap` is its own inverse.
    ///
    /// ```
    /// use tidemark::Pair;
    ///
    /// let p = Pair::new(1, "a");
    /// assert_eq!(p.swap(), Pair::new("a", 1));
    /// assert_eq!(p.swap().swap(), p);
    /// ```
    #[inline]
    pub fn swap(self) -> Pair<S, A> {
        Pair::new(self.annotation, self.value)
    }

    // ========== Functor / Bifunctor ==========

    /// Transform the value, leaving the annotation untouched.
    ///
    /// # Laws
    ///
    /// ```text
    /// p.map(|a| a) == p
    /// p.map(f).map(g) == p.map(|a| g(f(a)))
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Pair<B, S>
    where
        F: FnOnce(A) -> B,
    {
        Pair::new(f(self.value), self.annotation)
    }

    /// Transform the annotation, leaving the value untouched.
    ///
    /// Equivalent to `bimap(f, |a| a)`.
    ///
    /// ```
    /// use tidemark::Pair;
    ///
    /// let p = Pair::new(1, vec!["a", "b"]).map_annotation(|notes| notes.len());
    /// assert_eq!(p, Pair::new(1, 2));
    /// ```
    #[inline]
    pub fn map_annotation<T, F>(self, f: F) -> Pair<A, T>
    where
        F: FnOnce(S) -> T,
    {
        Pair::new(self.value, f(self.annotation))
    }

    /// Transform both halves independently.
    ///
    /// `f` is applied to the annotation and `g` to the value, matching the
    /// convention that the annotation is the "left" type argument of the bifunctor.
    ///
    /// ```
    /// use tidemark::Pair;
    ///
    /// let p = Pair::new(3, "ms").bimap(|unit| unit.to_uppercase(), |n| n * 1000);
    /// assert_eq!(p, Pair::new(3000, "MS".to_string()));
    /// ```
    #[inline]
    pub fn bimap<T, B, F, G>(self, f: F, g: G) -> Pair<B, T>
    where
        F: FnOnce(S) -> T,
        G: FnOnce(A) -> B,
    {
        Pair::new(g(self.value), f(self.annotation))
    }

    // ========== Comonad ==========

    /// Compute a new value from the whole pair, keeping the annotation.
    ///
    /// # Laws
    ///
    /// ```text
    /// p.extend(|w| w.first().clone()) == p
    /// p.extend(f).extract() == f(&p)
    /// p.extend(f).extend(g) == p.extend(|w| g(&w.clone().extend(&f)))
    /// ```
    ///
    /// ```
    /// use tidemark::Pair;
    ///
    /// // annotation is a surcharge in percent
    /// let priced = Pair::new(100, 20).extend(|p| p.first() + p.first() * p.second() / 100);
    /// assert_eq!(priced, Pair::new(120, 20));
    /// ```
    #[inline]
    pub fn extend<B, F>(self, f: F) -> Pair<B, S>
    where
        F: FnOnce(&Pair<A, S>) -> B,
    {
        let value = f(&self);
        Pair::new(value, self.annotation)
    }

    /// Take the value. Alias for [`into_first`](Pair::into_first).
    #[inline]
    pub fn extract(self) -> A {
        self.value
    }
}

impl<A, S: Clone> Pair<A, S> {
    /// Nest the whole pair as the value, keeping a copy of the annotation outside.
    ///
    /// ```
    /// use tidemark::Pair;
    ///
    /// let p = Pair::new(1, "x");
    /// assert_eq!(p.duplicate(), Pair::new(Pair::new(1, "x"), "x"));
    /// ```
    #[inline]
    pub fn duplicate(self) -> Pair<Pair<A, S>, S> {
        let annotation = self.annotation.clone();
        Pair::new(self, annotation)
    }
}

impl<B, A> Pair<B, A> {
    /// Compose two annotated transitions.
    ///
    /// Reading `Pair<B, A>` as "a step from `A` producing `B`", composing it with a
    /// `Pair<A, E>` yields a step from `E` producing `B`: the value of `self` and the
    /// annotation of `left`. Grouping does not matter:
    ///
    /// ```text
    /// r.compose(m).compose(l) == r.compose(m.compose(l))
    /// ```
    ///
    /// ```
    /// use tidemark::Pair;
    ///
    /// let right = Pair::new("out", 2);
    /// let left = Pair::new(2, 'e');
    /// assert_eq!(right.compose(left), Pair::new("out", 'e'));
    /// ```
    #[inline]
    pub fn compose<E>(self, left: Pair<A, E>) -> Pair<B, E> {
        Pair::new(self.value, left.annotation)
    }
}

impl<A, S> From<(A, S)> for Pair<A, S> {
    fn from((value, annotation): (A, S)) -> Self {
        Pair::new(value, annotation)
    }
}

impl<A, S> From<Pair<A, S>> for (A, S) {
    fn from(pair: Pair<A, S>) -> Self {
        pair.into_parts()
    }
}
