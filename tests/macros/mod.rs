use reason_rail::{fail, metadata, outcome, Metadata, MetadataValue, Outcome};

#[test]
fn fail_macro_formats_the_message() {
    let outcome: Outcome<i32> = fail!("user {} not found", 7);

    assert!(outcome.is_failed());
    assert_eq!(outcome.reasons()[0].message(), "user 7 not found");
}

#[test]
fn fail_macro_accepts_a_plain_literal() {
    let outcome: Outcome<()> = fail!("boom");
    assert_eq!(outcome.reasons()[0].message(), "boom");
}

#[test]
fn metadata_macro_builds_an_ordered_map() {
    let map = metadata! { "retries" => 3, "transient" => true, "host" => "db-3" };

    assert_eq!(map.len(), 3);
    assert_eq!(map.get("retries"), Some(&MetadataValue::Int(3)));
    assert_eq!(map.to_string(), "retries=3; transient=true; host=db-3");
}

#[test]
fn metadata_macro_empty_form() {
    let map: Metadata = metadata! {};
    assert!(map.is_empty());
}

#[test]
fn outcome_macro_captures_fallible_expressions() {
    let parsed: Outcome<i32> = outcome!("42".parse::<i32>());
    assert_eq!(*parsed.value(), 42);

    let failed: Outcome<i32> = outcome!("x".parse::<i32>());
    assert!(failed.is_failed());
    assert!(failed.iter_errors().next().unwrap().source_error().is_some());
}
