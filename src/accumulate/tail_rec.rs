//! Stack-safe recursion over annotated steps.

use super::{Accumulating, MergeIdentity};
use crate::{Either, Pair};

impl<M> Accumulating<M> {
    /// Iterate `step` from `seed` until it returns `Either::Right`, accumulating the
    /// annotation of every step.
    ///
    /// The result equals folding `step` with [`chain`](Accumulating::chain), but runs
    /// in a plain loop, so the stack depth is constant no matter how many steps are taken.
    ///
    /// Each step yields an increment. On `Left(next)` the increment is merged *after*
    /// everything accumulated so far and the loop continues with `next`; on
    /// `Right(done)` the final increment is merged the same way and `(done, total)` is
    /// returned.
    ///
    /// # Termination
    ///
    /// The loop does not detect non-termination. If `step` never returns `Right`, this
    /// never returns. Bound the iteration count inside the seed if that matters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::accumulate::Accumulating;
    /// use tidemark::{Either, Pair};
    ///
    /// let acc = Accumulating::combine();
    /// let result = acc.tail_rec(0, |n: u32| {
    ///     if n < 3 {
    ///         Pair::new(Either::left(n + 1), vec![n.to_string()])
    ///     } else {
    ///         Pair::new(Either::right(n), vec!["end".to_string()])
    ///     }
    /// });
    ///
    /// assert_eq!(result, Pair::new(3, vec!["0".into(), "1".into(), "2".into(), "end".into()]));
    /// ```
    pub fn tail_rec<A, B, S, F>(&self, seed: A, mut step: F) -> Pair<B, S>
    where
        M: MergeIdentity<S>,
        F: FnMut(A) -> Pair<Either<A, B>, S>,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "tail_rec",
            kind = crate::kind::describe::<crate::kind::PairKind<S>>()
        )
        .entered();
        #[cfg(feature = "tracing")]
        let mut steps: u64 = 0;

        let mut acc = self.merge.empty();
        let mut seed = seed;
        loop {
            let (next, increment) = step(seed).into_parts();
            match next {
                Either::Left(a) => {
                    acc = self.merge.concat(acc, increment);
                    seed = a;
                    #[cfg(feature = "tracing")]
                    {
                        steps += 1;
                    }
                }
                Either::Right(b) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(steps, "tail_rec finished");
                    return Pair::new(b, self.merge.concat(acc, increment));
                }
            }
        }
    }
}
