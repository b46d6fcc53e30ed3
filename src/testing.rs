//! Testing utilities for code built on [`Pair`](crate::Pair)
//!
//! Assertion macros that report which half of a pair differed, and (with the
//! `proptest` feature) `Arbitrary` impls for [`Pair`](crate::Pair) and
//! [`Either`](crate::Either).
//!
//! # Examples
//!
//! ```rust
//! use tidemark::{assert_annotation, assert_value, Pair};
//!
//! let p = Pair::new(42, vec!["computed"]);
//! assert_value!(p, 42);
//! assert_annotation!(p, vec!["computed"]);
//! ```

/// Assert that the value of a pair equals the expected value.
///
/// ```rust
/// use tidemark::{assert_value, Pair};
///
/// assert_value!(Pair::new(1, "ignored"), 1);
/// ```
#[macro_export]
macro_rules! assert_value {
    ($pair:expr, $expected:expr) => {
        match (&$pair, &$expected) {
            (pair, expected) => {
                if pair.first() != expected {
                    panic!(
                        "Value mismatch: expected {:?}, got {:?} (annotation {:?})",
                        expected,
                        pair.first(),
                        pair.second()
                    );
                }
            }
        }
    };
}

/// Assert that the annotation of a pair equals the expected annotation.
///
/// ```rust
/// use tidemark::{assert_annotation, Pair};
///
/// assert_annotation!(Pair::new(1, vec!["a", "b"]), vec!["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_annotation {
    ($pair:expr, $expected:expr) => {
        match (&$pair, &$expected) {
            (pair, expected) => {
                if pair.second() != expected {
                    panic!(
                        "Annotation mismatch: expected {:?}, got {:?} (value {:?})",
                        expected,
                        pair.second(),
                        pair.first()
                    );
                }
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<A, S> Arbitrary for crate::Pair<A, S>
where
    A: Arbitrary + 'static,
    S: Arbitrary + 'static,
    A::Strategy: 'static,
    S::Strategy: 'static,
{
    type Parameters = (A::Parameters, S::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (a_params, s_params) = args;
        (any_with::<A>(a_params), any_with::<S>(s_params))
            .prop_map(crate::Pair::from)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for crate::Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
    L::Strategy: 'static,
    R::Strategy: 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(crate::Either::left),
            any_with::<R>(r_params).prop_map(crate::Either::right),
        ]
        .boxed()
    }
}
