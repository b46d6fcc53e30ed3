//! A two-variant sum type used as the control signal of the stack-safe loop.
//!
//! `Either<L, R>` carries no success/failure meaning of its own. In tidemark its main
//! job is to tell [`tail_rec`](crate::accumulate::Accumulating::tail_rec) what to do next:
//!
//! - `Left(a)`: continue looping with the new seed `a`
//! - `Right(b)`: stop, `b` is the final result
//!
//! There is no third state, so a step function always either continues or finishes.
//!
//! # Examples
//!
//! ```rust
//! use tidemark::Either;
//!
//! fn countdown(n: u32) -> Either<u32, &'static str> {
//!     if n == 0 {
//!         Either::right("liftoff")
//!     } else {
//!         Either::left(n - 1)
//!     }
//! }
//!
//! assert_eq!(countdown(2), Either::left(1));
//! assert_eq!(countdown(0), Either::right("liftoff"));
//! ```
//!
//! `std::ops::ControlFlow` converts in both directions, with `Continue` mapping to
//! `Left` and `Break` to `Right`:
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use tidemark::Either;
//!
//! let step: Either<u32, &str> = ControlFlow::Continue(3).into();
//! assert_eq!(step, Either::left(3));
//! ```

use std::ops::ControlFlow;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// When used as a loop step, `Left` means "continue with this seed" and `Right`
/// means "done with this result".
///
/// # Example
///
/// ```rust
/// use tidemark::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// assert_eq!(left.into_left(), Some(42));
/// assert_eq!(right.into_control_flow(), std::ops::ControlFlow::Break("hello"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant (continue)
    Left(L),
    /// The right variant (done)
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    ///
    /// ```rust
    /// use tidemark::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::left(42).into_left(), Some(42));
    /// assert_eq!(Either::<i32, &str>::right("x").into_left(), None);
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Conversions ==========

    /// Convert to `ControlFlow` (Left becomes `Continue`, Right becomes `Break`).
    #[inline]
    pub fn into_control_flow(self) -> ControlFlow<R, L> {
        match self {
            Either::Left(l) => ControlFlow::Continue(l),
            Either::Right(r) => ControlFlow::Break(r),
        }
    }
}

impl<L, R> From<ControlFlow<R, L>> for Either<L, R> {
    fn from(flow: ControlFlow<R, L>) -> Self {
        match flow {
            ControlFlow::Continue(l) => Either::Left(l),
            ControlFlow::Break(r) => Either::Right(r),
        }
    }
}

impl<L, R> From<Either<L, R>> for ControlFlow<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_control_flow()
    }
}
