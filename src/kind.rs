//! Capability registry: type-constructor keys and the instances registered for them.
//!
//! Generic code sometimes needs to ask "what is the Functor for this shape?". Here that
//! lookup is a trait bound. A *kind* is a zero-sized key type that names a type
//! constructor through a generic associated type, and each capability (`Functor`,
//! `Foldable`, `Chain`, ...) is a trait implemented for the keys that support it. The
//! lookup is resolved by the compiler, so asking for an unregistered capability is a
//! compile error rather than a runtime miss.
//!
//! | Key | Shape | Registered capabilities |
//! |---|---|---|
//! | [`PairKind<S>`] | `Pair<_, S>` | Functor, Extend, Comonad, Foldable, Traversable (`S: Clone`), Apply, Chain (`S: Semigroup`), Applicative, Monad, ChainRec (`S: Monoid`) |
//! | [`PairKind2`] | `Pair<_, _>` | Bifunctor, Semigroupoid |
//! | [`OptionKind`] | `Option<_>` | Functor, Apply, Applicative, Chain, Monad |
//! | [`ResultKind<E>`] | `Result<_, E>` | Functor, Apply, Applicative, Chain, Monad |
//! | [`VecKind`] | `Vec<_>` | Functor |
//!
//! # Example
//!
//! ```rust
//! use tidemark::kind::{Functor, OptionKind, PairKind};
//! use tidemark::Pair;
//!
//! // Works for any registered functor
//! fn increment<K: Functor>(fa: K::Of<i32>) -> K::Of<i32> {
//!     K::map(fa, |n| n + 1)
//! }
//!
//! assert_eq!(increment::<OptionKind>(Some(1)), Some(2));
//! assert_eq!(increment::<PairKind<&str>>(Pair::new(1, "s")), Pair::new(2, "s"));
//! ```
//!
//! # Merge rules
//!
//! `PairKind<S>` only knows the annotation's own [`Semigroup`]/[`Monoid`] impl, so
//! `Apply`, `Chain`, `Applicative` and `ChainRec` need one. A closure rule built with
//! [`merge_with`](crate::accumulate::merge_with) or
//! [`monoid_with`](crate::accumulate::monoid_with) is not reachable through these
//! traits: call [`Accumulating`] directly, or wrap the annotation in a newtype that
//! implements the merge.
//!
//! ```rust
//! use tidemark::accumulate::{monoid_with, Accumulating};
//! use tidemark::kind::{Chain, PairKind};
//! use tidemark::monoid::Sum;
//! use tidemark::Pair;
//!
//! let step = |n: u32| Pair::new(n + 1, Sum(n));
//!
//! // Type-level rule: usable generically
//! let generic = PairKind::<Sum<u32>>::chain(Pair::new(1, Sum(10)), step);
//! assert_eq!(generic, Pair::new(2, Sum(11)));
//!
//! // Closure rule on a bare `u32`: only through the dictionary
//! let peak = Accumulating::new(monoid_with(|a: u32, b: u32| a.max(b), || 0));
//! let p = peak.chain(Pair::new(1, 10), |n| Pair::new(n + 1, n));
//! assert_eq!(p, Pair::new(2, 10));
//! ```

use std::marker::PhantomData;

use crate::accumulate::Accumulating;
use crate::{Either, Monoid, Pair, Semigroup};

/// A key naming a one-argument type constructor.
pub trait Kind {
    /// Symbolic name of the shape.
    const URI: &'static str;

    /// The shape applied to `A`.
    type Of<A>;
}

/// A key naming a two-argument type constructor.
pub trait Kind2 {
    /// Symbolic name of the shape.
    const URI: &'static str;

    /// The shape applied to a value type `A` and an annotation type `E`.
    type Of<A, E>;
}

/// The symbolic name a key is registered under.
pub fn describe<K: Kind>() -> &'static str {
    K::URI
}

// ========== Capabilities ==========

/// Lift a function into the shape.
///
/// Laws: `map(fa, |a| a) == fa` and `map(map(fa, f), g) == map(fa, |a| g(f(a)))`.
pub trait Functor: Kind {
    /// Apply `f` to every value inside `fa`.
    fn map<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B;
}

/// Map both type arguments of a two-argument shape.
pub trait Bifunctor: Kind2 {
    /// `f` maps the annotation, `g` maps the value.
    fn bimap<A, B, E, G, F1, F2>(fea: Self::Of<A, E>, f: F1, g: F2) -> Self::Of<B, G>
    where
        F1: FnOnce(E) -> G,
        F2: FnOnce(A) -> B;

    /// Map only the annotation.
    fn map_left<A, E, G, F>(fea: Self::Of<A, E>, f: F) -> Self::Of<A, G>
    where
        F: FnOnce(E) -> G;
}

/// Associative composition of two-argument shapes.
pub trait Semigroupoid: Kind2 {
    /// Compose `ab` after `la`.
    fn compose<A, B, E>(ab: Self::Of<B, A>, la: Self::Of<A, E>) -> Self::Of<B, E>;
}

/// Extend a computation that observes the whole shape.
pub trait Extend: Functor {
    /// Replace the value with `f` applied to the whole.
    fn extend<A, B, F>(wa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnOnce(&Self::Of<A>) -> B;
}

/// An [`Extend`] whose value can always be extracted.
pub trait Comonad: Extend {
    /// Take the value out.
    fn extract<A>(wa: Self::Of<A>) -> A;
}

/// Reduce the values of the shape.
pub trait Foldable: Kind {
    /// Left fold.
    fn reduce<A, B, F>(fa: Self::Of<A>, init: B, f: F) -> B
    where
        F: FnMut(B, A) -> B;

    /// Right fold.
    fn reduce_right<A, B, F>(fa: Self::Of<A>, init: B, f: F) -> B
    where
        F: FnMut(A, B) -> B;

    /// Map every value into a monoid and combine.
    fn fold_map<A, M, F>(fa: Self::Of<A>, f: F) -> M
    where
        M: Monoid,
        F: FnMut(A) -> M;
}

/// Run an effect for the values of the shape, rebuilding the shape inside the effect.
pub trait Traversable: Functor + Foldable {
    /// Apply `f` and pull the effect `G` outside.
    fn traverse<G, A, B, F>(ta: Self::Of<A>, f: F) -> G::Of<Self::Of<B>>
    where
        G: Functor,
        F: FnOnce(A) -> G::Of<B>;

    /// Pull an effect `G` already inside the shape outside.
    fn sequence<G, A>(tga: Self::Of<G::Of<A>>) -> G::Of<Self::Of<A>>
    where
        G: Functor;
}

/// Apply a function inside the shape to a value inside the shape.
pub trait Apply: Functor {
    /// Function side is sequenced first.
    fn ap<A, B, F>(ff: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        F: FnOnce(A) -> B;
}

/// An [`Apply`] that can lift bare values.
pub trait Applicative: Apply {
    /// Lift `a` with no effect.
    fn of<A>(a: A) -> Self::Of<A>;
}

/// Dependent sequencing.
pub trait Chain: Apply {
    /// Feed the value of `fa` to `f`.
    fn chain<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnOnce(A) -> Self::Of<B>;
}

/// [`Applicative`] plus [`Chain`].
pub trait Monad: Applicative + Chain {}

impl<K: Applicative + Chain> Monad for K {}

/// Stack-safe dependent recursion.
pub trait ChainRec: Chain {
    /// Iterate `f` from `a` until it yields `Either::Right`.
    fn tail_rec<A, B, F>(a: A, f: F) -> Self::Of<B>
    where
        F: FnMut(A) -> Self::Of<Either<A, B>>;
}

// ========== Pair ==========

/// Key for `Pair<_, S>` with the annotation type fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairKind<S>(PhantomData<fn() -> S>);

impl<S> Kind for PairKind<S> {
    const URI: &'static str = "Pair";
    type Of<A> = Pair<A, S>;
}

/// Key for `Pair<_, _>` with both arguments free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairKind2;

impl Kind2 for PairKind2 {
    const URI: &'static str = "Pair";
    type Of<A, E> = Pair<A, E>;
}

impl<S> Functor for PairKind<S> {
    fn map<A, B, F>(fa: Pair<A, S>, f: F) -> Pair<B, S>
    where
        F: FnMut(A) -> B,
    {
        fa.map(f)
    }
}

impl Bifunctor for PairKind2 {
    fn bimap<A, B, E, G, F1, F2>(fea: Pair<A, E>, f: F1, g: F2) -> Pair<B, G>
    where
        F1: FnOnce(E) -> G,
        F2: FnOnce(A) -> B,
    {
        fea.bimap(f, g)
    }

    fn map_left<A, E, G, F>(fea: Pair<A, E>, f: F) -> Pair<A, G>
    where
        F: FnOnce(E) -> G,
    {
        fea.map_annotation(f)
    }
}

impl Semigroupoid for PairKind2 {
    fn compose<A, B, E>(ab: Pair<B, A>, la: Pair<A, E>) -> Pair<B, E> {
        ab.compose(la)
    }
}

impl<S> Extend for PairKind<S> {
    fn extend<A, B, F>(wa: Pair<A, S>, f: F) -> Pair<B, S>
    where
        F: FnOnce(&Pair<A, S>) -> B,
    {
        wa.extend(f)
    }
}

impl<S> Comonad for PairKind<S> {
    fn extract<A>(wa: Pair<A, S>) -> A {
        wa.extract()
    }
}

impl<S> Foldable for PairKind<S> {
    fn reduce<A, B, F>(fa: Pair<A, S>, init: B, f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.reduce(init, f)
    }

    fn reduce_right<A, B, F>(fa: Pair<A, S>, init: B, f: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        fa.reduce_right(init, f)
    }

    fn fold_map<A, M, F>(fa: Pair<A, S>, f: F) -> M
    where
        M: Monoid,
        F: FnMut(A) -> M,
    {
        fa.fold_map(f)
    }
}

impl<S: Clone> Traversable for PairKind<S> {
    fn traverse<G, A, B, F>(ta: Pair<A, S>, f: F) -> G::Of<Pair<B, S>>
    where
        G: Functor,
        F: FnOnce(A) -> G::Of<B>,
    {
        ta.traverse::<G, B, F>(f)
    }

    fn sequence<G, A>(tga: Pair<G::Of<A>, S>) -> G::Of<Pair<A, S>>
    where
        G: Functor,
    {
        Self::traverse::<G, G::Of<A>, A, _>(tga, |ga| ga)
    }
}

impl<S: Semigroup> Apply for PairKind<S> {
    fn ap<A, B, F>(ff: Pair<F, S>, fa: Pair<A, S>) -> Pair<B, S>
    where
        F: FnOnce(A) -> B,
    {
        ff.ap(fa)
    }
}

impl<S: Monoid> Applicative for PairKind<S> {
    fn of<A>(a: A) -> Pair<A, S> {
        Pair::pure(a)
    }
}

impl<S: Semigroup> Chain for PairKind<S> {
    fn chain<A, B, F>(fa: Pair<A, S>, f: F) -> Pair<B, S>
    where
        F: FnOnce(A) -> Pair<B, S>,
    {
        fa.and_then(f)
    }
}

impl<S: Monoid> ChainRec for PairKind<S> {
    fn tail_rec<A, B, F>(a: A, f: F) -> Pair<B, S>
    where
        F: FnMut(A) -> Pair<Either<A, B>, S>,
    {
        Accumulating::combine().tail_rec(a, f)
    }
}

// ========== Effects ==========

/// Key for `Option<_>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionKind;

impl Kind for OptionKind {
    const URI: &'static str = "Option";
    type Of<A> = Option<A>;
}

impl Functor for OptionKind {
    fn map<A, B, F>(fa: Option<A>, f: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        fa.map(f)
    }
}

impl Apply for OptionKind {
    fn ap<A, B, F>(ff: Option<F>, fa: Option<A>) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        ff.zip(fa).map(|(f, a)| f(a))
    }
}

impl Applicative for OptionKind {
    fn of<A>(a: A) -> Option<A> {
        Some(a)
    }
}

impl Chain for OptionKind {
    fn chain<A, B, F>(fa: Option<A>, f: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        fa.and_then(f)
    }
}

/// Key for `Result<_, E>` with the error type fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultKind<E>(PhantomData<fn() -> E>);

impl<E> Kind for ResultKind<E> {
    const URI: &'static str = "Result";
    type Of<A> = Result<A, E>;
}

impl<E> Functor for ResultKind<E> {
    fn map<A, B, F>(fa: Result<A, E>, f: F) -> Result<B, E>
    where
        F: FnMut(A) -> B,
    {
        fa.map(f)
    }
}

impl<E> Apply for ResultKind<E> {
    /// The first error wins.
    fn ap<A, B, F>(ff: Result<F, E>, fa: Result<A, E>) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        let f = ff?;
        fa.map(f)
    }
}

impl<E> Applicative for ResultKind<E> {
    fn of<A>(a: A) -> Result<A, E> {
        Ok(a)
    }
}

impl<E> Chain for ResultKind<E> {
    fn chain<A, B, F>(fa: Result<A, E>, f: F) -> Result<B, E>
    where
        F: FnOnce(A) -> Result<B, E>,
    {
        fa.and_then(f)
    }
}

/// Key for `Vec<_>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VecKind;

impl Kind for VecKind {
    const URI: &'static str = "Vec";
    type Of<A> = Vec<A>;
}

impl Functor for VecKind {
    fn map<A, B, F>(fa: Vec<A>, f: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        fa.into_iter().map(f).collect()
    }
}
