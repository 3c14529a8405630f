//! The bind algebra's law sheet: identities, associativity, and the
//! short-circuit guarantee, checked over value, reason list, and order.

use std::cell::Cell;

use reason_rail::{Outcome, Reason};

fn grow(n: i32) -> Outcome<i32> {
    Outcome::ok(n + 1).with_success("grew")
}

fn halve(n: i32) -> Outcome<i32> {
    if n % 2 == 0 {
        Outcome::ok(n / 2).with_success("halved")
    } else {
        Outcome::fail("odd")
    }
}

#[test]
fn left_identity() {
    // ok(x).bind(f) == f(x)
    assert_eq!(Outcome::ok(5).bind(grow), grow(5));
    assert_eq!(Outcome::ok(5).bind(halve), halve(5));
    assert_eq!(Outcome::ok(4).bind(halve), halve(4));
}

#[test]
fn right_identity_on_a_value_carrying_success() {
    // r.bind(ok) == r
    let outcome = Outcome::ok(5).with_success("note");
    assert_eq!(outcome.clone().bind(Outcome::ok), outcome);
}

#[test]
fn right_identity_on_a_failure() {
    let outcome = Outcome::<i32>::fail("boom").with_success("note");
    assert_eq!(outcome.clone().bind(Outcome::ok), outcome);
}

#[test]
fn right_identity_on_a_valueless_success() {
    let outcome = Outcome::<i32>::new().with_success("note");
    assert_eq!(outcome.clone().bind(Outcome::ok), outcome);
}

#[test]
fn associativity() {
    // r.bind(f).bind(g) == r.bind(|x| f(x).bind(g))
    for seed in [Outcome::ok(8), Outcome::ok(7), Outcome::<i32>::fail("seed")] {
        let left = seed.clone().bind(grow).bind(halve);
        let right = seed.bind(|x| grow(x).bind(halve));
        assert_eq!(left, right);
    }
}

#[test]
fn associativity_preserves_reason_order() {
    let left = Outcome::ok(3).with_success("base").bind(grow).bind(halve);
    let right = Outcome::ok(3)
        .with_success("base")
        .bind(|x| grow(x).bind(halve));

    let order = |outcome: &Outcome<i32>| -> Vec<String> {
        outcome
            .reasons()
            .iter()
            .map(|reason| reason.message().to_string())
            .collect()
    };
    assert_eq!(order(&left), order(&right));
    assert_eq!(order(&left), vec!["base", "grew", "halved"]);
}

#[test]
fn a_failing_outcome_never_invokes_the_bound_function() {
    let ran = Cell::new(false);
    let failed = Outcome::<i32>::fail("boom").with_success("note");
    let reasons_before: Vec<Reason> = failed.reasons().to_vec();

    let bound = failed.bind(|n| {
        ran.set(true);
        Outcome::ok(n)
    });

    assert!(!ran.get());
    assert_eq!(bound.reasons(), reasons_before.as_slice());
}

#[test]
fn chained_binds_match_a_single_multi_arity_bind() {
    let chained = Outcome::ok(6).bind(|n| {
        let a = n + 1;
        Outcome::ok(a).bind(move |a| Outcome::ok((n, a, n * 2)))
    });

    let combined = Outcome::ok(6).bind2(
        |n| Outcome::ok(n + 1),
        |n| Outcome::ok(n * 2),
        |n, a, b| (n, a, b),
    );

    assert_eq!(chained.value(), combined.value());
}
