use reason_rail::prelude::*;

mod convert;
mod laws;
mod macros;
mod types;

#[cfg(feature = "async")]
mod async_ext;

fn parse_port(raw: &str) -> Outcome<u16> {
    raw.parse::<u16>().into_outcome()
}

fn check_range(port: u16) -> Outcome<u16> {
    if port >= 1024 {
        Outcome::ok(port).with_success("unprivileged port")
    } else {
        Outcome::fail(Error::new("privileged port").with_code("E_PORT"))
    }
}

#[test]
fn pipeline_accumulates_success_notes() {
    let outcome = parse_port("8080").bind(check_range);

    assert!(outcome.is_success());
    assert_eq!(*outcome.value(), 8080);
    assert_eq!(outcome.iter_successes().count(), 1);
}

#[test]
fn pipeline_short_circuits_on_parse_failure() {
    let outcome = parse_port("eighty").bind(check_range);

    assert!(outcome.is_failed());
    // check_range never ran, so its reasons are absent.
    assert_eq!(outcome.reasons().len(), 1);
    assert_eq!(outcome.iter_successes().count(), 0);
}

#[test]
fn pipeline_keeps_domain_error_details() {
    let outcome = parse_port("80").bind(check_range);

    assert!(outcome.is_failed());
    assert!(outcome.has_error_matching(|error| error.code() == Some("E_PORT")));
}

#[test]
fn merged_pipeline_collects_every_port() {
    let merged = merge_values(["8080", "9090"].iter().map(|raw| parse_port(raw)));

    assert!(merged.is_success());
    assert_eq!(*merged.value(), vec![8080, 9090]);
}
