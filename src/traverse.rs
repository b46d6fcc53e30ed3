//! Folding and traversal over the value of a [`Pair`]
//!
//! A pair holds exactly one value, so folding it is a single function call and the
//! annotation is never folded over. Traversal runs an effect on the value and rebuilds
//! the pair inside the effect with the original annotation.
//!
//! # Core Concepts
//!
//! - **`reduce` / `reduce_right` / `fold_map`**: consume the value, drop the annotation
//! - **`traverse`**: `Pair<A, S>` + `A -> G<B>` → `G<Pair<B, S>>` for any registered
//!   [`Functor`] `G`
//! - **`sequence`**: `Pair<G<A>, S>` → `G<Pair<A, S>>`
//! - **`transpose`**: `sequence` specialized to `Option` and `Result`, without the
//!   `S: Clone` bound the generic version needs
//! - **`traverse_future`**: traversal into an async computation
//!
//! # Examples
//!
//! ```
//! use tidemark::Pair;
//!
//! assert_eq!(Pair::new(5, "x").reduce(10, |b, a| b + a), 15);
//!
//! fn parse(s: &str) -> Result<u16, String> {
//!     s.parse().map_err(|_| format!("bad port: {s}"))
//! }
//!
//! let ok = Pair::new("8080", "from env").map(parse).transpose();
//! assert_eq!(ok, Ok(Pair::new(8080, "from env")));
//!
//! let err = Pair::new("http", "from env").map(parse).transpose();
//! assert_eq!(err, Err("bad port: http".to_string()));
//! ```
//!
//! ## Async
//!
//! ```
//! use tidemark::Pair;
//!
//! # tokio_test::block_on(async {
//! let p = Pair::new(21, vec!["cached"]).traverse_future(|n| async move { n * 2 }).await;
//! assert_eq!(p, Pair::new(42, vec!["cached"]));
//! # });
//! ```

use std::future::Future;

use futures::FutureExt;

use crate::kind::{Functor, Kind};
use crate::{Monoid, Pair};

impl<A, S> Pair<A, S> {
    /// Left fold over the value: `f(init, value)`.
    ///
    /// ```
    /// use tidemark::Pair;
    ///
    /// assert_eq!(Pair::new(3, "note").reduce(String::from(">"), |b, a| format!("{b}{a}")), ">3");
    /// ```
    #[inline]
    pub fn reduce<B, F>(self, init: B, f: F) -> B
    where
        F: FnOnce(B, A) -> B,
    {
        f(init, self.into_first())
    }

    /// Right fold over the value: `f(value, init)`.
    #[inline]
    pub fn reduce_right<B, F>(self, init: B, f: F) -> B
    where
        F: FnOnce(A, B) -> B,
    {
        f(self.into_first(), init)
    }

    /// Map the value into a monoid.
    ///
    /// With a single value there is nothing to combine, so this is `f(value)`.
    #[inline]
    pub fn fold_map<M, F>(self, f: F) -> M
    where
        M: Monoid,
        F: FnOnce(A) -> M,
    {
        f(self.into_first())
    }

    /// Run an effect on the value and rebuild the pair inside it.
    ///
    /// The effect is chosen by its registry key `G`, which cannot be inferred and must
    /// be named. The annotation is cloned once per value the effect produces.
    ///
    /// ```
    /// use tidemark::kind::{OptionKind, VecKind};
    /// use tidemark::Pair;
    ///
    /// let some = Pair::new(4u32, "src").traverse::<OptionKind, _, _>(|n| n.checked_sub(1));
    /// assert_eq!(some, Some(Pair::new(3, "src")));
    ///
    /// let many = Pair::new(2, "src").traverse::<VecKind, _, _>(|n| vec![n, n * 10]);
    /// assert_eq!(many, vec![Pair::new(2, "src"), Pair::new(20, "src")]);
    /// ```
    pub fn traverse<G, B, F>(self, f: F) -> G::Of<Pair<B, S>>
    where
        G: Functor,
        F: FnOnce(A) -> G::Of<B>,
        S: Clone,
    {
        let (a, s) = self.into_parts();
        G::map(f(a), move |b| Pair::new(b, s.clone()))
    }

    /// Pull the effect `G` wrapping the value outside of the pair.
    ///
    /// ```
    /// use tidemark::kind::ResultKind;
    /// use tidemark::Pair;
    ///
    /// let p: Pair<Result<i32, &str>, &str> = Pair::new(Ok(1), "s");
    /// assert_eq!(p.sequence::<ResultKind<&str>, _>(), Ok(Pair::new(1, "s")));
    /// ```
    pub fn sequence<G, B>(self) -> G::Of<Pair<B, S>>
    where
        G: Functor + Kind<Of<B> = A>,
        S: Clone,
    {
        self.traverse::<G, B, _>(|gb| gb)
    }

    /// Run an async step on the value, keeping the annotation.
    pub fn traverse_future<B, F, Fut>(self, f: F) -> impl Future<Output = Pair<B, S>>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        let (a, s) = self.into_parts();
        f(a).map(move |b| Pair::new(b, s))
    }
}

impl<Fut, S> Pair<Fut, S>
where
    Fut: Future,
{
    /// Await the value, keeping the annotation.
    pub fn sequence_future(self) -> impl Future<Output = Pair<Fut::Output, S>> {
        self.traverse_future(|fut| fut)
    }
}

impl<A, S> Pair<Option<A>, S> {
    /// `Some` if the value is `Some`, keeping the annotation.
    ///
    /// A `None` value drops the annotation with it.
    #[inline]
    pub fn transpose(self) -> Option<Pair<A, S>> {
        let (a, s) = self.into_parts();
        a.map(|a| Pair::new(a, s))
    }
}

impl<A, E, S> Pair<Result<A, E>, S> {
    /// `Ok` if the value is `Ok`, keeping the annotation.
    ///
    /// An `Err` value drops the annotation with it.
    #[inline]
    pub fn transpose(self) -> Result<Pair<A, S>, E> {
        let (a, s) = self.into_parts();
        a.map(|a| Pair::new(a, s))
    }
}
