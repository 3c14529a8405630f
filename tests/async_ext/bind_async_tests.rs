use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use reason_rail::{Outcome, Reason};

async fn double(n: i32) -> Outcome<i32> {
    Outcome::ok(n * 2).with_success("doubled")
}

async fn reject(_: i32) -> Outcome<i32> {
    Outcome::fail("rejected")
}

#[tokio::test]
async fn bind_async_appends_reasons_after_the_originals() {
    let outcome = Outcome::ok(21).with_success("seeded").bind_async(double).await;

    assert_eq!(*outcome.value(), 42);
    let messages: Vec<&str> = outcome.reasons().iter().map(Reason::message).collect();
    assert_eq!(messages, vec!["seeded", "doubled"]);
}

#[tokio::test]
async fn bind_async_short_circuits_a_failure() {
    static RAN: AtomicBool = AtomicBool::new(false);

    async fn observed(n: i32) -> Outcome<i32> {
        RAN.store(true, Ordering::SeqCst);
        Outcome::ok(n)
    }

    let outcome = Outcome::<i32>::fail("boom").bind_async(observed).await;

    assert!(!RAN.load(Ordering::SeqCst));
    assert!(outcome.is_failed());
    assert_eq!(outcome.reasons().len(), 1);
}

#[tokio::test]
async fn bind_async_into_a_failure_unions_reasons() {
    let outcome = Outcome::ok(1).with_success("before").bind_async(reject).await;

    assert!(outcome.is_failed());
    assert_eq!(outcome.reasons().len(), 2);
}

#[tokio::test]
async fn map_async_projects_only_present_values() {
    let outcome = Outcome::ok(20).map_async(|n| async move { n + 2 }).await;
    assert_eq!(*outcome.value(), 22);

    let valueless = Outcome::<i32>::new().map_async(|n| async move { n + 2 }).await;
    assert!(valueless.maybe().is_none());
}

#[tokio::test]
async fn bind_or_else_async_falls_back_on_absent_values() {
    let outcome = Outcome::<i32>::new()
        .bind_or_else_async(
            |n| async move { Outcome::ok(n) },
            || async { Outcome::ok(-1).with_success("defaulted") },
        )
        .await;

    assert_eq!(*outcome.value(), -1);
    assert_eq!(outcome.reasons().len(), 1);
}

#[tokio::test]
async fn bind2_async_resolves_combinators_in_declared_order() {
    static ORDER: AtomicUsize = AtomicUsize::new(0);

    let outcome = Outcome::ok(10)
        .bind2_async(
            |n| {
                let n = *n;
                async move {
                    assert_eq!(ORDER.fetch_add(1, Ordering::SeqCst), 0);
                    Outcome::ok(n + 1)
                }
            },
            |n| {
                let n = *n;
                async move {
                    assert_eq!(ORDER.fetch_add(1, Ordering::SeqCst), 1);
                    Outcome::ok(n * 2)
                }
            },
            |n, a, b| (n, a, b),
        )
        .await;

    assert_eq!(*outcome.value(), (10, 11, 20));
}

#[tokio::test]
async fn bind2_async_skips_later_combinators_after_a_failure() {
    static SECOND_RAN: AtomicBool = AtomicBool::new(false);

    let outcome = Outcome::ok(1)
        .bind2_async(
            |_| async { Outcome::<i32>::fail("first broke") },
            |n| {
                let n = *n;
                async move {
                    SECOND_RAN.store(true, Ordering::SeqCst);
                    Outcome::ok(n)
                }
            },
            |_, _, _| -> i32 { panic!("selector must not run") },
        )
        .await;

    assert!(!SECOND_RAN.load(Ordering::SeqCst));
    assert!(outcome.is_failed());
}

#[tokio::test]
async fn bind3_async_combines_three_derivations() {
    let outcome = Outcome::ok(1)
        .bind3_async(
            |n| { let n = *n; async move { Outcome::ok(n + 1) } },
            |n| { let n = *n; async move { Outcome::ok(n + 2) } },
            |n| { let n = *n; async move { Outcome::ok(n + 3) } },
            |n, a, b, c| n + a + b + c,
        )
        .await;

    assert_eq!(*outcome.value(), 10);
}

#[tokio::test]
async fn bind4_async_combines_four_derivations() {
    let outcome = Outcome::ok(1)
        .bind4_async(
            |n| { let n = *n; async move { Outcome::ok(n + 1) } },
            |n| { let n = *n; async move { Outcome::ok(n + 2) } },
            |n| { let n = *n; async move { Outcome::ok(n + 3) } },
            |n| { let n = *n; async move { Outcome::ok(n + 4) } },
            |n, a, b, c, d| n + a + b + c + d,
        )
        .await;

    assert_eq!(*outcome.value(), 15);
}

#[tokio::test]
async fn capture_async_wraps_errors_as_sources() {
    let outcome = Outcome::capture_async(|| async { "42".parse::<i32>() }).await;
    assert_eq!(*outcome.value(), 42);

    let failed = Outcome::capture_async(|| async { "x".parse::<i32>() }).await;
    assert!(failed.is_failed());
    assert!(failed.iter_errors().next().unwrap().source_error().is_some());
}
