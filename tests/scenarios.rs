//! End-to-end scenarios for annotated computations
//!
//! These mirror how a caller strings pairs together: a trace that grows as steps run,
//! costs that add up, and loops that run for a long time.

use tidemark::accumulate::{merge_with, monoid_with, Accumulating};
use tidemark::kind::{OptionKind, ResultKind};
use tidemark::monoid::Sum;
use tidemark::{assert_annotation, assert_value, Either, Pair};

type Traced<A> = Pair<A, Vec<String>>;

fn trace(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

#[test]
fn counting_loop_builds_ordered_trace() {
    let result: Traced<u32> = Pair::tail_rec(0, |n| {
        if n < 3 {
            Pair::new(Either::left(n + 1), vec![n.to_string()])
        } else {
            Pair::new(Either::right(n), trace(&["end"]))
        }
    });

    assert_eq!(result, Pair::new(3, trace(&["0", "1", "2", "end"])));
}

#[test]
fn swap_exchanges_components() {
    assert_eq!(Pair::new(1, "a").swap(), Pair::new("a", 1));
    let p = Pair::new(vec![1, 2], "b".to_string());
    assert_eq!(p.clone().swap().swap(), p);
}

#[test]
fn reduce_never_sees_annotation() {
    let result = Pair::new(5, "x").reduce(10, |b, a| b + a);
    assert_eq!(result, 15);
}

#[test]
fn pipeline_accumulates_trace_in_call_order() {
    fn parse(input: &str) -> Traced<Option<i64>> {
        Pair::new(input.parse().ok(), vec![format!("parse {input:?}")])
    }

    fn validate(n: Option<i64>) -> Traced<i64> {
        match n {
            Some(n) if n >= 0 => Pair::new(n, trace(&["valid"])),
            _ => Pair::new(0, trace(&["invalid, defaulted to 0"])),
        }
    }

    fn square(n: i64) -> Traced<i64> {
        Pair::new(n * n, vec![format!("squared {n}")])
    }

    let ok = parse("12").and_then(validate).and_then(square);
    assert_value!(ok, 144);
    assert_annotation!(ok, trace(&["parse \"12\"", "valid", "squared 12"]));

    let bad = parse("-3").and_then(validate).and_then(square);
    assert_value!(bad, 0);
    assert_annotation!(bad, trace(&["parse \"-3\"", "invalid, defaulted to 0", "squared 0"]));
}

#[test]
fn independent_steps_merge_left_to_right() {
    let price = Pair::new(40u32, Sum(3u32));
    let shipping = Pair::new(5u32, Sum(1u32));
    let total = price.zip_with(shipping, |p, s| p + s);
    assert_eq!(total, Pair::new(45, Sum(4)));

    let pf = Pair::new(|s: &str| s.to_uppercase(), trace(&["fn"]));
    let pa = Pair::new("arg", trace(&["arg"]));
    assert_eq!(pf.ap(pa).into_second(), trace(&["fn", "arg"]));
}

#[test]
fn cost_budget_loop_with_explicit_dictionary() {
    // Cost per step is capped; only the most expensive step is recorded.
    let worst = Accumulating::new(monoid_with(|a: u32, b: u32| a.max(b), || 0));
    let costs = [3, 9, 2, 7];

    let result = worst.tail_rec(0usize, |i| {
        let next = if i + 1 < costs.len() { Either::left(i + 1) } else { Either::right(i) };
        Pair::new(next, costs[i])
    });
    assert_eq!(result, Pair::new(3, 9));
}

#[test]
fn semigroup_only_dictionary_still_chains() {
    let joined = Accumulating::new(merge_with(|a: String, b: String| format!("{a} -> {b}")));
    let p = joined.chain(Pair::new(1, "load".to_string()), |n| Pair::new(n + 1, "save".to_string()));
    assert_eq!(p, Pair::new(2, "load -> save".to_string()));
}

#[test]
fn long_loop_is_stack_safe() {
    const STEPS: u64 = 2_000_000;

    let result: Pair<u64, Sum<u64>> = Pair::tail_rec(0u64, |n| {
        if n < STEPS {
            Pair::new(Either::left(n + 1), Sum(2))
        } else {
            Pair::new(Either::right(n), Sum(1))
        }
    });
    assert_eq!(result, Pair::new(STEPS, Sum(2 * STEPS + 1)));
}

#[test]
fn traversal_keeps_annotation_through_effects() {
    let parsed = Pair::new("42", trace(&["read"]))
        .traverse::<ResultKind<std::num::ParseIntError>, i32, _>(|s| s.parse());
    assert_eq!(parsed, Ok(Pair::new(42, trace(&["read"]))));

    let missing = Pair::new(None::<u8>, trace(&["read"])).sequence::<OptionKind, _>();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn traversal_into_async_step() {
    let fetched = Pair::new(7u32, trace(&["queued"]))
        .traverse_future(|id| async move { format!("record-{id}") })
        .await
        .tell(trace(&["fetched"]));

    assert_eq!(fetched, Pair::new("record-7".to_string(), trace(&["queued", "fetched"])));
}
