//! Projection and bind combinators.
//!
//! Every combinator follows the same short-circuit contract: a failed input
//! never runs the supplied function and carries its reasons over unchanged; a
//! successful bind appends the produced reasons after the originals.

use crate::types::maybe::Maybe;
use crate::types::outcome::Outcome;
use crate::types::reason::Reason;
use crate::types::ReasonVec;

fn any_error(reasons: &[Reason]) -> bool {
    reasons.iter().any(Reason::is_error)
}

impl<T> Outcome<T> {
    /// Projects the carried value, keeping reasons unchanged.
    ///
    /// On a failed input `f` never runs and the output carries the same
    /// reasons with no value. A valueless success stays valueless.
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// let outcome = Outcome::ok(21).map(|n| n * 2);
    /// assert_eq!(*outcome.value(), 42);
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        let (value, reasons) = self.into_parts();
        if any_error(&reasons) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        Outcome::from_parts(value.map(f), reasons)
    }

    /// Flattening projection.
    ///
    /// On a success carrying a value, `f` runs exactly once and its reasons
    /// are appended after the originals; the produced value becomes the
    /// output value. Failed and valueless inputs short-circuit without
    /// running `f`.
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// fn checked(n: i32) -> Outcome<i32> {
    ///     if n > 0 { Outcome::ok(n).with_success("positive") } else { Outcome::fail("negative") }
    /// }
    ///
    /// let outcome = Outcome::ok(3).with_success("parsed").bind(checked);
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.reasons().len(), 2);
    /// ```
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        let (value, mut reasons) = self.into_parts();
        if any_error(&reasons) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        match value {
            Maybe::Some(value) => {
                let (next_value, next_reasons) = f(value).into_parts();
                reasons.extend(next_reasons);
                Outcome::from_parts(next_value, reasons)
            }
            Maybe::None => Outcome::from_parts(Maybe::None, reasons),
        }
    }

    /// [`bind`](Outcome::bind) with an explicit fallback for the valueless
    /// success case. The fallback outcome's reasons are appended after the
    /// accumulated ones.
    pub fn bind_or_else<U, F, N>(self, f: F, on_none: N) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
        N: FnOnce() -> Outcome<U>,
    {
        let (value, mut reasons) = self.into_parts();
        if any_error(&reasons) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let next = match value {
            Maybe::Some(value) => f(value),
            Maybe::None => on_none(),
        };
        let (next_value, next_reasons) = next.into_parts();
        reasons.extend(next_reasons);
        Outcome::from_parts(next_value, reasons)
    }

    /// Carries the reasons over to a different value type, with no value.
    ///
    /// This is the converter-less projection: useful for re-typing a failure
    /// or a valueless success. A success that carries a value needs a
    /// converter; use [`map`](Outcome::map) there.
    ///
    /// # Panics
    ///
    /// Panics when called on a successful outcome that carries a value.
    pub fn retype<U>(self) -> Outcome<U> {
        let (value, reasons) = self.into_parts();
        if value.is_some() && !any_error(&reasons) {
            panic!("retype called on a successful Outcome that carries a value; use map");
        }
        Outcome::from_parts(Maybe::None, reasons)
    }

    /// Runs two combinators against the original value and projects through
    /// a selector.
    ///
    /// Each combinator borrows the original value, runs only after everything
    /// before it succeeded, and appends its reasons in order. The first
    /// failure or absent value short-circuits with the reasons accumulated so
    /// far; the selector runs only when every step carried a value.
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// let outcome = Outcome::ok(10).bind2(
    ///     |n| Outcome::ok(n + 1),
    ///     |n| Outcome::ok(n * 2),
    ///     |n, plus, times| n + plus + times,
    /// );
    /// assert_eq!(*outcome.value(), 41);
    /// ```
    pub fn bind2<U1, U2, R, F1, F2, S>(self, first: F1, second: F2, select: S) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Outcome<U1>,
        F2: FnOnce(&T) -> Outcome<U2>,
        S: FnOnce(T, U1, U2) -> R,
    {
        let (value, mut reasons) = self.into_parts();
        if any_error(&reasons) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let value = match value {
            Maybe::Some(value) => value,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let a = match step(first(&value), &mut reasons) {
            Maybe::Some(a) => a,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let b = match step(second(&value), &mut reasons) {
            Maybe::Some(b) => b,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        Outcome::from_parts(Maybe::Some(select(value, a, b)), reasons)
    }

    /// [`bind2`](Outcome::bind2) with an explicit fallback for any absent
    /// intermediate value.
    pub fn bind2_or_else<U1, U2, R, F1, F2, S, N>(
        self,
        first: F1,
        second: F2,
        select: S,
        on_none: N,
    ) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Outcome<U1>,
        F2: FnOnce(&T) -> Outcome<U2>,
        S: FnOnce(T, U1, U2) -> R,
        N: FnOnce() -> Outcome<R>,
    {
        let (value, mut reasons) = self.into_parts();
        if any_error(&reasons) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let value = match value {
            Maybe::Some(value) => value,
            Maybe::None => return fallback(on_none, reasons),
        };
        let a = match step(first(&value), &mut reasons) {
            Maybe::Some(a) => a,
            Maybe::None if any_error(&reasons) => {
                return Outcome::from_parts(Maybe::None, reasons)
            }
            Maybe::None => return fallback(on_none, reasons),
        };
        let b = match step(second(&value), &mut reasons) {
            Maybe::Some(b) => b,
            Maybe::None if any_error(&reasons) => {
                return Outcome::from_parts(Maybe::None, reasons)
            }
            Maybe::None => return fallback(on_none, reasons),
        };
        Outcome::from_parts(Maybe::Some(select(value, a, b)), reasons)
    }

    /// Three-combinator form of [`bind2`](Outcome::bind2).
    pub fn bind3<U1, U2, U3, R, F1, F2, F3, S>(
        self,
        first: F1,
        second: F2,
        third: F3,
        select: S,
    ) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Outcome<U1>,
        F2: FnOnce(&T) -> Outcome<U2>,
        F3: FnOnce(&T) -> Outcome<U3>,
        S: FnOnce(T, U1, U2, U3) -> R,
    {
        let (value, mut reasons) = self.into_parts();
        if any_error(&reasons) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let value = match value {
            Maybe::Some(value) => value,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let a = match step(first(&value), &mut reasons) {
            Maybe::Some(a) => a,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let b = match step(second(&value), &mut reasons) {
            Maybe::Some(b) => b,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let c = match step(third(&value), &mut reasons) {
            Maybe::Some(c) => c,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        Outcome::from_parts(Maybe::Some(select(value, a, b, c)), reasons)
    }

    /// Four-combinator form of [`bind2`](Outcome::bind2).
    pub fn bind4<U1, U2, U3, U4, R, F1, F2, F3, F4, S>(
        self,
        first: F1,
        second: F2,
        third: F3,
        fourth: F4,
        select: S,
    ) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Outcome<U1>,
        F2: FnOnce(&T) -> Outcome<U2>,
        F3: FnOnce(&T) -> Outcome<U3>,
        F4: FnOnce(&T) -> Outcome<U4>,
        S: FnOnce(T, U1, U2, U3, U4) -> R,
    {
        let (value, mut reasons) = self.into_parts();
        if any_error(&reasons) {
            return Outcome::from_parts(Maybe::None, reasons);
        }
        let value = match value {
            Maybe::Some(value) => value,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let a = match step(first(&value), &mut reasons) {
            Maybe::Some(a) => a,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let b = match step(second(&value), &mut reasons) {
            Maybe::Some(b) => b,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let c = match step(third(&value), &mut reasons) {
            Maybe::Some(c) => c,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        let d = match step(fourth(&value), &mut reasons) {
            Maybe::Some(d) => d,
            Maybe::None => return Outcome::from_parts(Maybe::None, reasons),
        };
        Outcome::from_parts(Maybe::Some(select(value, a, b, c, d)), reasons)
    }
}

/// Folds one combinator result into the running reason list. Returns the
/// carried value, or `None` when the step failed or carried nothing.
fn step<U>(outcome: Outcome<U>, reasons: &mut ReasonVec<Reason>) -> Maybe<U> {
    let (value, step_reasons) = outcome.into_parts();
    let failed = any_error(&step_reasons);
    reasons.extend(step_reasons);
    if failed {
        return Maybe::None;
    }
    value
}

fn fallback<R, N>(on_none: N, mut reasons: ReasonVec<Reason>) -> Outcome<R>
where
    N: FnOnce() -> Outcome<R>,
{
    let (value, fallback_reasons) = on_none().into_parts();
    reasons.extend(fallback_reasons);
    Outcome::from_parts(value, reasons)
}
