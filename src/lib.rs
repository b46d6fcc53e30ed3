//! # Tidemark
//!
//! > *"The water leaves a line where it has been"*
//!
//! A Rust library for annotated values: a value travelling together with a side
//! channel (a trace, a cost, a list of warnings) that is merged automatically as
//! computations are sequenced.
//!
//! ## Philosophy
//!
//! **Tidemark** keeps the side channel out of your function signatures' plumbing:
//! - **Pair** = a value and its annotation, never mutated
//! - **Merge** = the caller's rule for combining annotations (`Semigroup`/`Monoid`)
//!
//! The crate does not decide what an annotation means. Any associative merge plugs in.
//!
//! ## Quick Example
//!
//! ```rust
//! use tidemark::{Either, Pair};
//!
//! fn load(id: u32) -> Pair<String, Vec<String>> {
//!     Pair::new(format!("user-{id}"), vec![format!("loaded {id}")])
//! }
//!
//! fn greet(name: String) -> Pair<String, Vec<String>> {
//!     Pair::new(format!("hello {name}"), vec!["greeted".to_string()])
//! }
//!
//! let (greeting, trace) = load(7).and_then(greet).into_parts();
//! assert_eq!(greeting, "hello user-7");
//! assert_eq!(trace, vec!["loaded 7", "greeted"]);
//!
//! // Long-running loops accumulate without growing the stack
//! let counted: Pair<u32, Vec<u32>> = Pair::tail_rec(0, |n| {
//!     if n < 3 { Pair::new(Either::left(n + 1), vec![n]) }
//!     else { Pair::new(Either::right(n), vec![]) }
//! });
//! assert_eq!(counted, Pair::new(3, vec![0, 1, 2]));
//! ```
//!
//! ## Modules
//!
//! - [`pair`]: the [`Pair`] type and algebra-free operations
//! - [`accumulate`]: sequencing with a merge rule, and the stack-safe loop
//! - [`traverse`]: folding and traversal over the value
//! - [`kind`]: type-constructor keys and the capabilities registered for them
//! - [`semigroup`], [`monoid`]: the merge capabilities
//! - [`either`]: the continue/done signal used by the loop

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accumulate;
pub mod either;
pub mod kind;
pub mod monoid;
pub mod pair;
pub mod semigroup;
pub mod testing;
pub mod traverse;

// Re-exports
pub use accumulate::Accumulating;
pub use either::Either;
pub use monoid::Monoid;
pub use pair::Pair;
pub use semigroup::Semigroup;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accumulate::{Accumulating, Combine, Merge, MergeIdentity};
    pub use crate::either::Either;
    pub use crate::kind::{Functor, Kind, OptionKind, PairKind, ResultKind, VecKind};
    pub use crate::monoid::Monoid;
    pub use crate::pair::Pair;
    pub use crate::semigroup::Semigroup;
}
