//! Monoid trait: the identity-plus-merge capability
//!
//! A `Monoid` extends [`Semigroup`] with an identity element. The identity is what lets
//! a bare value be lifted into a [`Pair`](crate::Pair) (`Pair::pure(a) == (a, empty)`)
//! and what seeds the accumulator of the stack-safe loop in
//! [`tail_rec`](crate::accumulate::Accumulating::tail_rec).
//!
//! # Mathematical Properties
//!
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right Identity**: `a.combine(M::empty()) == a`
//! 3. **Left Identity**: `M::empty().combine(a) == a`
//!
//! # Numeric Monoids
//!
//! Numbers have more than one lawful monoid, so they are wrapped:
//!
//! ```
//! use tidemark::monoid::{fold_all, Product, Sum};
//!
//! assert_eq!(fold_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(fold_all(vec![Product(2), Product(3)]), Product(6));
//! ```

use crate::Semigroup;
use std::ops::{Add, Mul};

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
///
/// # Example
///
/// ```rust
/// use tidemark::{Monoid, Semigroup};
///
/// let log = vec!["start".to_string()];
/// let empty: Vec<String> = Monoid::empty();
/// assert_eq!(log.clone().combine(empty), log);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

macro_rules! impl_monoid_tuple {
    ($($T:ident),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn empty() -> Self {
                ($($T::empty(),)+)
            }
        }
    };
}

impl_monoid_tuple!(T1, T2);
impl_monoid_tuple!(T1, T2, T3);
impl_monoid_tuple!(T1, T2, T3, T4);
impl_monoid_tuple!(T1, T2, T3, T4, T5);
impl_monoid_tuple!(T1, T2, T3, T4, T5, T6);

/// Numeric values under addition. Identity: `T::default()`.
///
/// ```
/// use tidemark::monoid::Sum;
/// use tidemark::Semigroup;
///
/// assert_eq!(Sum(5).combine(Sum(10)), Sum(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::default())
    }
}

/// Numeric values under multiplication. Identity: [`One::one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<T>(pub T);

/// Types with a multiplicative identity.
pub trait One {
    /// Returns `1` for this type.
    fn one() -> Self;
}

macro_rules! impl_one {
    ($one:literal => $($t:ty),+) => {
        $(
            impl One for $t {
                fn one() -> Self {
                    $one
                }
            }
        )+
    };
}

impl_one!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_one!(1.0 => f32, f64);

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<T: Mul<Output = T> + One> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

/// Keeps the earliest value. Wrap in `Option` for a monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First<T>(pub T);

impl<T> Semigroup for First<T> {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

/// Keeps the latest value. Wrap in `Option` for a monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last<T>(pub T);

impl<T> Semigroup for Last<T> {
    fn combine(self, other: Self) -> Self {
        other
    }
}

/// Reverses the order of an inner semigroup.
///
/// Useful for building a trace newest-first without changing the step functions:
///
/// ```
/// use tidemark::monoid::Dual;
/// use tidemark::Semigroup;
///
/// let newest_first = Dual(vec!["a"]).combine(Dual(vec!["b"]));
/// assert_eq!(newest_first, Dual(vec!["b", "a"]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<T>(pub T);

impl<T: Semigroup> Semigroup for Dual<T> {
    fn combine(self, other: Self) -> Self {
        Dual(other.0.combine(self.0))
    }
}

impl<T: Monoid> Monoid for Dual<T> {
    fn empty() -> Self {
        Dual(T::empty())
    }
}

/// Fold an iterator starting from `empty()`.
///
/// ```
/// use tidemark::monoid::fold_all;
///
/// let trace: Vec<&str> = fold_all(vec![vec!["a"], vec![], vec!["b", "c"]]);
/// assert_eq!(trace, vec!["a", "b", "c"]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}
