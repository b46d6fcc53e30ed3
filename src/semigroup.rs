//! Semigroup trait: the merge capability for annotations
//!
//! A `Semigroup` is a type with an associative binary operation. In tidemark it is the
//! rule used to merge the annotation half of two [`Pair`](crate::Pair)s whenever two
//! annotated computations are sequenced.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Commutativity is *not* required. The sequencing operations always pass the earlier
//! annotation as `self` and the later one as `other`, so ordered accumulators such as
//! `Vec<String>` keep their order.
//!
//! # Examples
//!
//! ```
//! use tidemark::Semigroup;
//!
//! // A trace of steps
//! let trace = vec!["parse".to_string()].combine(vec!["check".to_string()]);
//! assert_eq!(trace, vec!["parse", "check"]);
//!
//! // Annotations made of several independent channels
//! let a = (vec!["parse"], "p".to_string());
//! let b = (vec!["check"], "c".to_string());
//! assert_eq!(a.combine(b), (vec!["parse", "check"], "pc".to_string()));
//! ```
//!
//! # Custom Implementations
//!
//! ```
//! use tidemark::Semigroup;
//!
//! #[derive(Debug, PartialEq)]
//! struct Cost(u64);
//!
//! impl Semigroup for Cost {
//!     fn combine(self, other: Self) -> Self {
//!         Cost(self.0 + other.0)
//!     }
//! }
//!
//! assert_eq!(Cost(2).combine(Cost(3)), Cost(5));
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// Violating the law is not detected at runtime; the sequencing operations of
/// this crate simply stop satisfying their own laws.
///
/// # Note on Ownership
///
/// `combine` takes both operands by value so that accumulators like `Vec` can be
/// extended in place. Clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with a later one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, _other: Self) -> Self {}
}

// Lifts the inner semigroup; None is absorbed.
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (a @ Some(_), None) => a,
            (None, b) => b,
        }
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx),)+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6);
