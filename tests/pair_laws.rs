//! Algebraic laws for `Pair`, checked through the capability traits
//!
//! The law checks are written once against the traits and instantiated at `PairKind`
//! with several annotation types, so a capability that drifts from its laws fails here
//! regardless of which concrete method it delegates to.

use proptest::prelude::*;
use tidemark::kind::{
    Applicative, Apply, Bifunctor, Chain, ChainRec, Comonad, Extend, Foldable, Functor,
    PairKind, PairKind2, Semigroupoid,
};
use tidemark::monoid::{Product, Sum};
use tidemark::{Either, Pair};

fn functor_identity<K>(fa: K::Of<i32>) -> bool
where
    K: Functor,
    K::Of<i32>: Clone + PartialEq,
{
    K::map(fa.clone(), |a| a) == fa
}

fn functor_composition<K>(fa: K::Of<i32>) -> bool
where
    K: Functor,
    K::Of<i32>: Clone + PartialEq,
{
    let f = |a: i32| a.wrapping_mul(3);
    let g = |a: i32| a.wrapping_sub(7);
    K::map(K::map(fa.clone(), f), g) == K::map(fa, |a| g(f(a)))
}

fn monad_left_identity<K>(a: i32, f: fn(i32) -> K::Of<i32>) -> bool
where
    K: Applicative + Chain,
    K::Of<i32>: PartialEq,
{
    K::chain(K::of(a), f) == f(a)
}

fn monad_right_identity<K>(fa: K::Of<i32>) -> bool
where
    K: Applicative + Chain,
    K::Of<i32>: Clone + PartialEq,
{
    K::chain(fa.clone(), K::of) == fa
}

fn chain_associativity<K>(fa: K::Of<i32>, f: fn(i32) -> K::Of<i32>, g: fn(i32) -> K::Of<i32>) -> bool
where
    K: Chain,
    K::Of<i32>: Clone + PartialEq,
{
    K::chain(K::chain(fa.clone(), f), g) == K::chain(fa, |a| K::chain(f(a), g))
}

fn apply_composition<K>(fa: K::Of<i32>, ff: K::Of<fn(i32) -> i32>, fg: K::Of<fn(i32) -> i32>) -> bool
where
    K: Apply,
    K::Of<i32>: Clone + PartialEq,
    K::Of<fn(i32) -> i32>: Clone,
{
    // ap(ap(map(fg, compose), ff), fa) == ap(fg, ap(ff, fa))
    let composed = K::ap(
        K::map(fg.clone(), |g: fn(i32) -> i32| move |f: fn(i32) -> i32| move |a: i32| g(f(a))),
        ff.clone(),
    );
    K::ap(composed, fa.clone()) == K::ap(fg, K::ap(ff, fa))
}

fn tail_rec_matches_chain<K>(limit: u8, step: fn(u8, u8) -> K::Of<Either<u8, u8>>) -> bool
where
    K: ChainRec + Applicative,
    K::Of<u8>: PartialEq,
{
    fn by_chain<K: Chain + Applicative>(
        n: u8,
        limit: u8,
        step: fn(u8, u8) -> K::Of<Either<u8, u8>>,
    ) -> K::Of<u8> {
        K::chain(step(n, limit), move |next| match next {
            Either::Left(n) => by_chain::<K>(n, limit, step),
            Either::Right(b) => K::of(b),
        })
    }

    K::tail_rec(0, |n| step(n, limit)) == by_chain::<K>(0, limit, step)
}

fn comonad_laws<K>(wa: K::Of<i32>) -> bool
where
    K: Comonad,
    K::Of<i32>: Clone + PartialEq,
{
    let left = K::extend(wa.clone(), |w| K::extract(w.clone())) == wa;
    let right = K::extract(K::extend(wa.clone(), |w| K::extract(w.clone()).wrapping_add(1)))
        == K::extract(wa).wrapping_add(1);
    left && right
}

fn foldable_reduce_is_single_call<K>(fa: K::Of<i32>, init: i64) -> bool
where
    K: Foldable,
    K::Of<i32>: Clone,
{
    let left = K::reduce(fa.clone(), init, |b, a| b + i64::from(a));
    let right = K::reduce_right(fa, init, |a, b| i64::from(a) + b);
    left == right
}

type Log = Vec<String>;

fn log_step(n: i32) -> Pair<i32, Log> {
    Pair::new(n.wrapping_add(1), vec![format!("inc {n}")])
}

fn log_double(n: i32) -> Pair<i32, Log> {
    Pair::new(n.wrapping_mul(2), vec![format!("double {n}")])
}

fn sum_step(n: i32) -> Pair<i32, Sum<i64>> {
    Pair::new(n / 2, Sum(i64::from(n)))
}

fn product_step(n: i32) -> Pair<i32, Product<i64>> {
    Pair::new(n.wrapping_neg(), Product(2))
}

fn count_up(n: u8, limit: u8) -> Pair<Either<u8, u8>, Log> {
    if n < limit {
        Pair::new(Either::left(n + 1), vec![n.to_string()])
    } else {
        Pair::new(Either::right(n), vec!["done".to_string()])
    }
}

fn count_cost(n: u8, limit: u8) -> Pair<Either<u8, u8>, Sum<u64>> {
    let next = if n < limit { Either::left(n + 1) } else { Either::right(n) };
    Pair::new(next, Sum(u64::from(n) + 1))
}

proptest! {
    #[test]
    fn functor_laws_hold(a: i32, log: Log, cost: i64) {
        prop_assert!(functor_identity::<PairKind<Log>>(Pair::new(a, log.clone())));
        prop_assert!(functor_composition::<PairKind<Log>>(Pair::new(a, log)));
        prop_assert!(functor_identity::<PairKind<Sum<i64>>>(Pair::new(a, Sum(cost))));
        prop_assert!(functor_composition::<PairKind<Sum<i64>>>(Pair::new(a, Sum(cost))));
    }

    #[test]
    fn monad_identity_laws_hold(a: i32, log: Log) {
        prop_assert!(monad_left_identity::<PairKind<Log>>(a, log_step));
        prop_assert!(monad_left_identity::<PairKind<Sum<i64>>>(a, sum_step));
        prop_assert!(monad_left_identity::<PairKind<Product<i64>>>(a, product_step));
        prop_assert!(monad_right_identity::<PairKind<Log>>(Pair::new(a, log)));
    }

    #[test]
    fn chain_is_associative(a in any::<i32>(), log in any::<Log>(), cost in -1_000_000i64..1_000_000) {
        prop_assert!(chain_associativity::<PairKind<Log>>(Pair::new(a, log), log_step, log_double));
        prop_assert!(chain_associativity::<PairKind<Sum<i64>>>(
            Pair::new(a, Sum(cost)),
            sum_step,
            sum_step
        ));
    }

    #[test]
    fn apply_composes(a: i32, s1: Log, s2: Log, s3: Log) {
        let ff: Pair<fn(i32) -> i32, Log> = Pair::new(|x| x.wrapping_add(1), s1);
        let fg: Pair<fn(i32) -> i32, Log> = Pair::new(|x| x.wrapping_mul(5), s2);
        prop_assert!(apply_composition::<PairKind<Log>>(Pair::new(a, s3), ff, fg));
    }

    #[test]
    fn tail_rec_agrees_with_recursive_chain(limit in 0u8..64) {
        prop_assert!(tail_rec_matches_chain::<PairKind<Log>>(limit, count_up));
        prop_assert!(tail_rec_matches_chain::<PairKind<Sum<u64>>>(limit, count_cost));
    }

    #[test]
    fn comonad_laws_hold(a: i32, log: Log) {
        prop_assert!(comonad_laws::<PairKind<Log>>(Pair::new(a, log)));
    }

    #[test]
    fn folds_see_only_the_value(a in any::<i32>(), init in -1_000_000i64..1_000_000, log in any::<Log>()) {
        prop_assert!(foldable_reduce_is_single_call::<PairKind<Log>>(Pair::new(a, log.clone()), init));
        let folded = PairKind::<Log>::reduce(Pair::new(a, log), init, |b, a| b + i64::from(a));
        prop_assert_eq!(folded, init + i64::from(a));
    }

    #[test]
    fn bifunctor_laws_hold(a: i32, s: u16) {
        let p = Pair::new(a, s);
        prop_assert_eq!(PairKind2::bimap(p, |s| s, |a| a), p);

        let composed = PairKind2::bimap(PairKind2::bimap(p, u32::from, i64::from), |s| s * 2, |a| a - 1);
        prop_assert_eq!(composed, PairKind2::bimap(p, |s| u32::from(s) * 2, |a| i64::from(a) - 1));
        prop_assert_eq!(PairKind2::map_left(p, u32::from), PairKind2::bimap(p, u32::from, |a| a));
    }

    #[test]
    fn semigroupoid_is_associative(a: i32, b: u8, c: bool, d: char) {
        let cd = Pair::new(d, c);
        let bc = Pair::new(c, b);
        let ab = Pair::new(b, a);
        prop_assert_eq!(
            PairKind2::compose(PairKind2::compose(cd, bc), ab),
            PairKind2::compose(cd, PairKind2::compose(bc, ab))
        );
    }
}
