//! Extension trait for `Future<Output = Outcome<T>>`.
//!
//! Provides `.on_fail()` and `.on_fail_with()` for futures, mirroring the
//! sync methods on `Outcome`.

use core::future::Future;

use crate::traits::IntoErrorReason;
use crate::types::outcome::Outcome;

use super::reason_future::ReasonFuture;

/// Attaches failure annotations to outcome-returning futures.
///
/// Mirrors the sync [`Outcome::on_fail`](crate::Outcome::on_fail) /
/// [`Outcome::on_fail_with`](crate::Outcome::on_fail_with) pair: the reason
/// is built only when the resolved outcome is failed, and nothing is
/// allocated on the success path.
///
/// # Examples
///
/// ```
/// use reason_rail::prelude_async::*;
/// use reason_rail::{Error, Outcome};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// async fn lookup(id: u64) -> Outcome<u64> {
///     if id == 0 { Outcome::fail("unknown id") } else { Outcome::ok(id) }
/// }
///
/// let outcome = lookup(0)
///     .on_fail_with(|| Error::new("while resolving account"))
///     .await;
/// assert_eq!(outcome.reasons().len(), 2);
/// # }
/// ```
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Appends an error reason when the resolved outcome is failed.
    ///
    /// The reason is converted only on the failure path, keeping evaluation
    /// lazy.
    fn on_fail<C>(self, reason: C) -> ReasonFuture<Self, impl FnOnce() -> C>
    where
        C: IntoErrorReason,
    {
        self.on_fail_with(move || reason)
    }

    /// Appends a lazily-built error reason when the resolved outcome is
    /// failed.
    fn on_fail_with<F, C>(self, f: F) -> ReasonFuture<Self, F>
    where
        F: FnOnce() -> C,
        C: IntoErrorReason;
}

impl<Fut, T> OutcomeFutureExt<T> for Fut
where
    Fut: Future<Output = Outcome<T>>,
{
    #[inline]
    fn on_fail_with<F, C>(self, f: F) -> ReasonFuture<Self, F>
    where
        F: FnOnce() -> C,
        C: IntoErrorReason,
    {
        ReasonFuture::new(self, f)
    }
}
