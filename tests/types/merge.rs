use reason_rail::{merge, merge_values, Error, Outcome, Reason};

#[test]
fn empty_merge_is_a_success_with_an_empty_vector() {
    let merged = merge_values(Vec::<Outcome<i32>>::new());
    assert!(merged.is_success());
    assert_eq!(*merged.value(), Vec::<i32>::new());
}

#[test]
fn values_collect_in_input_order() {
    let merged = merge_values([Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)]);
    assert_eq!(*merged.value(), vec![1, 2, 3]);
}

#[test]
fn one_failure_poisons_the_merged_value() {
    let merged = merge_values([Outcome::ok(1), Outcome::<i32>::fail("e")]);

    assert!(merged.is_failed());
    assert_eq!(merged.iter_errors().count(), 1);
    assert!(merged.maybe().is_none());
}

#[test]
fn reasons_union_in_sequence_order() {
    let merged = merge_values([
        Outcome::ok(1).with_success("first"),
        Outcome::<i32>::fail("broke"),
        Outcome::ok(3).with_success("third"),
    ]);

    let messages: Vec<&str> = merged.reasons().iter().map(Reason::message).collect();
    assert_eq!(messages, vec!["first", "broke", "third"]);
}

#[test]
fn a_valueless_success_input_leaves_the_merged_value_absent() {
    let merged = merge_values([Outcome::ok(1), Outcome::<i32>::new()]);

    assert!(merged.is_success());
    assert!(merged.maybe().is_none());
}

#[test]
fn reason_merge_drops_values_but_keeps_every_reason() {
    let merged = merge([
        Outcome::ok(1).with_success("kept"),
        Outcome::<i32>::fail(Error::new("broke")),
    ]);

    assert!(merged.is_failed());
    assert_eq!(merged.reasons().len(), 2);
}

#[test]
fn reason_merge_of_successes_is_a_success() {
    let merged = merge([Outcome::ok(1), Outcome::ok(2)]);
    assert!(merged.is_success());
    assert!(merged.reasons().is_empty());
}

#[test]
fn outcomes_collect_like_merge_values() {
    let merged: Outcome<Vec<i32>> = [Outcome::ok(1), Outcome::ok(2)].into_iter().collect();
    assert_eq!(*merged.value(), vec![1, 2]);

    let failed: Outcome<Vec<i32>> =
        [Outcome::ok(1), Outcome::<i32>::fail("e")].into_iter().collect();
    assert!(failed.is_failed());
}

#[test]
fn outcomes_collect_into_a_valueless_union_too() {
    let merged: Outcome<()> = [Outcome::ok(1), Outcome::<i32>::fail("e")]
        .into_iter()
        .collect();
    assert!(merged.is_failed());
    assert_eq!(merged.reasons().len(), 1);
}
