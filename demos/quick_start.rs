//! Parse-and-validate walkthrough: chaining, merging, and reason inspection.
//!
//! Run with: `cargo run --example quick_start`

use reason_rail::prelude::*;

struct OutOfRange;

fn parse_port(raw: &str) -> Outcome<u16> {
    raw.parse::<u16>().into_outcome()
}

fn check_range(port: u16) -> Outcome<u16> {
    if port >= 1024 {
        Outcome::ok(port).with_success("unprivileged port")
    } else {
        Outcome::fail(
            Error::new("privileged port")
                .with_code("E_PORT")
                .with_metadata("port", i64::from(port))
                .mark::<OutOfRange>(),
        )
    }
}

fn main() {
    let inputs = ["8080", "80", "not-a-port", "9090"];

    let outcomes: Vec<Outcome<u16>> = inputs
        .iter()
        .map(|raw| parse_port(raw).bind(check_range))
        .collect();

    for (raw, outcome) in inputs.iter().zip(&outcomes) {
        if outcome.is_success() {
            println!("{raw:>10} -> ok({})", outcome.value());
        } else {
            for error in outcome.iter_errors() {
                println!("{raw:>10} -> {error}");
            }
        }
    }

    let merged = merge_values(outcomes);
    println!(
        "\nmerged: {} failed, {} reasons total",
        merged.is_failed(),
        merged.reasons().len()
    );
    println!("range violation present: {}", merged.has_error_of::<OutOfRange>());

    // A failed merge carries no value; fall back explicitly.
    let ports = merged.value_or_default();
    println!("collected ports: {ports:?}");
}
