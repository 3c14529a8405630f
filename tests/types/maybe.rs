use std::cell::Cell;

use reason_rail::Maybe;

#[test]
fn fold_runs_exactly_one_branch() {
    assert_eq!(Maybe::some(5).fold(|value| value * 2, || -1), 10);
    assert_eq!(Maybe::<i32>::none().fold(|value| value * 2, || -1), -1);
}

#[test]
fn equality_is_structural() {
    assert_eq!(Maybe::some(1), Maybe::some(1));
    assert_ne!(Maybe::some(1), Maybe::some(2));
    assert_eq!(Maybe::<i32>::none(), Maybe::<i32>::none());
    assert_ne!(Maybe::some(1), Maybe::none());
}

#[test]
fn map_and_bind_skip_absent_values() {
    assert_eq!(Maybe::some(2).map(|n| n + 1), Maybe::Some(3));
    assert_eq!(Maybe::<i32>::none().map(|n| n + 1), Maybe::None);

    let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    assert_eq!(Maybe::some(4).bind(half), Maybe::Some(2));
    assert_eq!(Maybe::some(3).bind(half), Maybe::None);
    assert_eq!(Maybe::<i32>::none().bind(half), Maybe::None);
}

#[test]
fn combine2_projects_when_everything_is_present() {
    let combined = Maybe::some(3).combine2(
        |original| original.map(|n| n * 2),
        |original| original.map(|n| n + 1),
        |original, doubled, grown| original + doubled + grown,
    );
    assert_eq!(combined, Maybe::Some(13));
}

#[test]
fn combine2_runs_every_combinator_but_skips_the_selector() {
    let calls = Cell::new(0);
    let combined = Maybe::some(3).combine2(
        |_| {
            calls.set(calls.get() + 1);
            Maybe::<i32>::none()
        },
        |_| {
            calls.set(calls.get() + 1);
            Maybe::some(1)
        },
        |_, _, _| -> i32 { panic!("selector must not run when a combinator is absent") },
    );

    assert_eq!(combined, Maybe::None);
    assert_eq!(calls.get(), 2);
}

#[test]
fn combine2_runs_combinators_even_on_an_absent_original() {
    let calls = Cell::new(0);
    let combined = Maybe::<i32>::none().combine2(
        |original| {
            calls.set(calls.get() + 1);
            original.map(|n| n * 2)
        },
        |original| {
            calls.set(calls.get() + 1);
            original.map(|n| n + 1)
        },
        |_, _, _| -> i32 { panic!("selector must not run on an absent original") },
    );

    assert_eq!(combined, Maybe::None);
    assert_eq!(calls.get(), 2);
}

#[test]
fn combine3_and_combine4_follow_the_same_contract() {
    let combined = Maybe::some(2).combine3(
        |original| original.map(|n| n + 1),
        |original| original.map(|n| n + 2),
        |original| original.map(|n| n + 3),
        |original, a, b, c| original + a + b + c,
    );
    assert_eq!(combined, Maybe::Some(14));

    let combined = Maybe::some(1).combine4(
        |original| original.map(|n| n + 1),
        |_| Maybe::<i32>::none(),
        |original| original.map(|n| n + 3),
        |original| original.map(|n| n + 4),
        |_, _, _, _, _| -> i32 { panic!("selector must not run") },
    );
    assert_eq!(combined, Maybe::None);
}

#[test]
fn defaults_and_unwraps() {
    assert_eq!(Maybe::some(7).unwrap_or(0), 7);
    assert_eq!(Maybe::<i32>::none().unwrap_or(9), 9);
    assert_eq!(Maybe::<i32>::none().unwrap_or_default(), 0);
    assert_eq!(Maybe::<i32>::default(), Maybe::None);
}

#[test]
fn converts_to_and_from_option() {
    assert_eq!(Maybe::from(Some(1)), Maybe::Some(1));
    assert_eq!(Maybe::from(None::<i32>), Maybe::None);
    assert_eq!(Maybe::some(1).into_option(), Some(1));
    assert_eq!(Option::<i32>::from(Maybe::<i32>::none()), None);
}
