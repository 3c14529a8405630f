//! Inherent async combinators on `Outcome`.

use core::future::Future;

use crate::types::maybe::Maybe;
use crate::types::outcome::Outcome;
use crate::types::reason::{Error, Reason};

impl<T> Outcome<T> {
    /// Async form of [`map`](Outcome::map): the projection future runs only
    /// on a success carrying a value.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        let (value, reasons) = self.into_parts();
        if reasons.iter().any(Reason::is_error) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let value = match value {
            Maybe::Some(value) => Maybe::Some(f(value).await),
            Maybe::None => Maybe::None,
        };
        Outcome::from_parts(value, reasons)
    }

    /// Async form of [`bind`](Outcome::bind).
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// async fn double(n: i32) -> Outcome<i32> {
    ///     Outcome::ok(n * 2)
    /// }
    ///
    /// let outcome = Outcome::ok(21).bind_async(double).await;
    /// assert_eq!(*outcome.value(), 42);
    /// # }
    /// ```
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        let (value, mut reasons) = self.into_parts();
        if reasons.iter().any(Reason::is_error) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        match value {
            Maybe::Some(value) => {
                let (next_value, next_reasons) = f(value).await.into_parts();
                reasons.extend(next_reasons);
                Outcome::from_parts(next_value, reasons)
            }
            Maybe::None => Outcome::from_parts(Maybe::None, reasons),
        }
    }

    /// Async form of [`bind_or_else`](Outcome::bind_or_else).
    pub async fn bind_or_else_async<U, F, FutF, N, FutN>(self, f: F, on_none: N) -> Outcome<U>
    where
        F: FnOnce(T) -> FutF,
        FutF: Future<Output = Outcome<U>>,
        N: FnOnce() -> FutN,
        FutN: Future<Output = Outcome<U>>,
    {
        let (value, mut reasons) = self.into_parts();
        if reasons.iter().any(Reason::is_error) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let next = match value {
            Maybe::Some(value) => f(value).await,
            Maybe::None => on_none().await,
        };
        let (next_value, next_reasons) = next.into_parts();
        reasons.extend(next_reasons);
        Outcome::from_parts(next_value, reasons)
    }

    /// Async form of [`bind2`](Outcome::bind2). Combinators resolve one after
    /// another; the first failure or absent value stops the chain.
    pub async fn bind2_async<U1, U2, R, F1, Fut1, F2, Fut2, S>(
        self,
        first: F1,
        second: F2,
        select: S,
    ) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Outcome<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Outcome<U2>>,
        S: FnOnce(T, U1, U2) -> R,
    {
        let (value, mut reasons) = self.into_parts();
        if reasons.iter().any(Reason::is_error) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let value = match value {
            Maybe::Some(value) => value,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let a = match fold_step(first(&value).await, &mut reasons) {
            Maybe::Some(a) => a,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let b = match fold_step(second(&value).await, &mut reasons) {
            Maybe::Some(b) => b,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        Outcome::from_parts(Maybe::Some(select(value, a, b)), reasons)
    }

    /// Async form of [`bind3`](Outcome::bind3).
    pub async fn bind3_async<U1, U2, U3, R, F1, Fut1, F2, Fut2, F3, Fut3, S>(
        self,
        first: F1,
        second: F2,
        third: F3,
        select: S,
    ) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Outcome<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Outcome<U2>>,
        F3: FnOnce(&T) -> Fut3,
        Fut3: Future<Output = Outcome<U3>>,
        S: FnOnce(T, U1, U2, U3) -> R,
    {
        let (value, mut reasons) = self.into_parts();
        if reasons.iter().any(Reason::is_error) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let value = match value {
            Maybe::Some(value) => value,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let a = match fold_step(first(&value).await, &mut reasons) {
            Maybe::Some(a) => a,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let b = match fold_step(second(&value).await, &mut reasons) {
            Maybe::Some(b) => b,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let c = match fold_step(third(&value).await, &mut reasons) {
            Maybe::Some(c) => c,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        Outcome::from_parts(Maybe::Some(select(value, a, b, c)), reasons)
    }

    /// Async form of [`bind4`](Outcome::bind4).
    pub async fn bind4_async<U1, U2, U3, U4, R, F1, Fut1, F2, Fut2, F3, Fut3, F4, Fut4, S>(
        self,
        first: F1,
        second: F2,
        third: F3,
        fourth: F4,
        select: S,
    ) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Outcome<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Outcome<U2>>,
        F3: FnOnce(&T) -> Fut3,
        Fut3: Future<Output = Outcome<U3>>,
        F4: FnOnce(&T) -> Fut4,
        Fut4: Future<Output = Outcome<U4>>,
        S: FnOnce(T, U1, U2, U3, U4) -> R,
    {
        let (value, mut reasons) = self.into_parts();
        if reasons.iter().any(Reason::is_error) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let value = match value {
            Maybe::Some(value) => value,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let a = match fold_step(first(&value).await, &mut reasons) {
            Maybe::Some(a) => a,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let b = match fold_step(second(&value).await, &mut reasons) {
            Maybe::Some(b) => b,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let c = match fold_step(third(&value).await, &mut reasons) {
            Maybe::Some(c) => c,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let d = match fold_step(fourth(&value).await, &mut reasons) {
            Maybe::Some(d) => d,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        Outcome::from_parts(Maybe::Some(select(value, a, b, c, d)), reasons)
    }

    /// Runs a fallible async action, converting its error into a failure
    /// reason the way [`capture`](Outcome::capture) does.
    pub async fn capture_async<E, F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: core::error::Error + Send + Sync + 'static,
    {
        match action().await {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail(Error::from_source(error)),
        }
    }
}

fn fold_step<U>(
    outcome: Outcome<U>,
    reasons: &mut crate::types::ReasonVec<Reason>,
) -> Maybe<U> {
    let (value, step_reasons) = outcome.into_parts();
    let failed = step_reasons.iter().any(Reason::is_error);
    reasons.extend(step_reasons);
    if failed {
        return Maybe::None;
    }
    value
}
