//! Future wrapper that appends a failure reason lazily.
//!
//! `ReasonFuture` wraps a `Future<Output = Outcome<T>>` and attaches an error
//! reason only when the resolved outcome is failed, keeping the success path
//! free of reason construction.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::IntoErrorReason;
use crate::types::outcome::Outcome;

pin_project! {
    /// A future that annotates failed outcomes lazily.
    ///
    /// The reason closure runs only when the inner future resolves to a
    /// failed outcome.
    ///
    /// # Cancel Safety
    ///
    /// `ReasonFuture` is cancel-safe if the inner future is cancel-safe. The
    /// reason closure runs only when `poll` returns a failed outcome.
    #[must_use = "futures do nothing unless polled"]
    pub struct ReasonFuture<Fut, F> {
        #[pin]
        future: Fut,
        reason_fn: Option<F>,
    }
}

impl<Fut, F> ReasonFuture<Fut, F> {
    /// Creates a new `ReasonFuture` with the given future and reason
    /// generator.
    #[inline]
    pub fn new(future: Fut, reason_fn: F) -> Self {
        Self { future, reason_fn: Some(reason_fn) }
    }
}

impl<Fut, F, C, T> Future for ReasonFuture<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce() -> C,
    C: IntoErrorReason,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| {
            if outcome.is_failed() {
                let reason_fn = this
                    .reason_fn
                    .take()
                    .expect("ReasonFuture polled after completion; this is a bug");
                outcome.with_error(reason_fn())
            } else {
                outcome
            }
        })
    }
}

impl<Fut, F, C, T> FusedFuture for ReasonFuture<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T>>,
    F: FnOnce() -> C,
    C: IntoErrorReason,
{
    fn is_terminated(&self) -> bool {
        // Also check reason_fn since it's taken on failed completion
        self.reason_fn.is_none() || self.future.is_terminated()
    }
}
