use reason_rail::{Error, Maybe, Outcome, Success};

#[test]
fn into_result_splits_on_success() {
    let result = Outcome::ok(5).into_result();
    assert_eq!(result.unwrap(), Maybe::Some(5));

    let valueless = Outcome::<i32>::new().with_success("note").into_result();
    assert_eq!(valueless.unwrap(), Maybe::None);
}

#[test]
fn into_result_collects_errors_in_order() {
    let result = Outcome::<i32>::new()
        .with_error("first")
        .with_success("kept out")
        .with_error("second")
        .into_result();

    let errors = result.unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message(), "first");
    assert_eq!(errors[1].message(), "second");
}

#[test]
fn an_error_converts_into_a_failed_outcome() {
    let outcome: Outcome<i32> = Error::new("nope").into();
    assert!(outcome.is_failed());
}

#[test]
fn a_success_converts_into_a_valueless_success_outcome() {
    let outcome: Outcome<i32> = Success::new("warmed").into();
    assert!(outcome.is_success());
    assert!(outcome.maybe().is_none());
    assert_eq!(outcome.reasons().len(), 1);
}

#[test]
fn a_maybe_converts_into_a_reasonless_outcome() {
    let present: Outcome<i32> = Maybe::some(4).into();
    assert_eq!(*present.value(), 4);

    let absent: Outcome<i32> = Maybe::none().into();
    assert!(absent.is_success());
    assert!(absent.reasons().is_empty());
}
