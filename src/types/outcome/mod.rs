//! The `Outcome` container: an optional value plus ordered reasons.
//!
//! Success or failure is never stored; it is derived by scanning the reason
//! list for errors. The `errors`/`successes` accessors are filtered views of
//! the one list, so errors and success notes interleave in insertion order.

use smallvec::smallvec;

use crate::settings::OutcomeSettings;
use crate::traits::{IntoErrorReason, IntoSuccessReason};
use crate::types::alloc_type::Vec;
use crate::types::maybe::Maybe;
use crate::types::reason::{Error, Reason, Success};
use crate::types::ReasonVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod bind;
mod merge;

pub use merge::{merge, merge_values};

/// Result of an operation: a [`Maybe`] value plus ordered [`Reason`]s.
///
/// Outcomes are persistent values. Every `with_*` call consumes `self` and
/// returns a new outcome; nothing is mutated in place after construction.
///
/// # Examples
///
/// ```
/// use reason_rail::Outcome;
///
/// let outcome = Outcome::ok(7)
///     .with_success("validated")
///     .with_success("normalized");
///
/// assert!(outcome.is_success());
/// assert_eq!(outcome.reasons().len(), 2);
/// assert_eq!(*outcome.value(), 7);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    value: Maybe<T>,
    reasons: ReasonVec<Reason>,
}

impl<T> Outcome<T> {
    /// A success carrying no value and no reasons.
    #[inline]
    pub fn new() -> Self {
        Self { value: Maybe::None, reasons: ReasonVec::new() }
    }

    /// A success carrying `value`.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { value: Maybe::Some(value), reasons: ReasonVec::new() }
    }

    /// A failure carrying one error reason.
    ///
    /// Accepts a message or a prebuilt [`Error`]; an error with nested causes
    /// keeps its cause tree intact under the one top-level reason.
    #[inline]
    pub fn fail(error: impl IntoErrorReason) -> Self {
        Self {
            value: Maybe::None,
            reasons: smallvec![Reason::Error(error.into_error_reason())],
        }
    }

    /// A valueless outcome built from existing reasons.
    pub fn from_reasons<I>(reasons: I) -> Self
    where
        I: IntoIterator<Item = Reason>,
    {
        Self { value: Maybe::None, reasons: reasons.into_iter().collect() }
    }

    pub(crate) fn from_parts(value: Maybe<T>, reasons: ReasonVec<Reason>) -> Self {
        Self { value, reasons }
    }

    /// Splits the outcome into its value and reason list.
    pub fn into_parts(self) -> (Maybe<T>, ReasonVec<Reason>) {
        (self.value, self.reasons)
    }

    /// Runs a fallible action, converting its error into a failure reason.
    ///
    /// The error is wrapped through [`Error::from_source`], so the original
    /// stays reachable via the reason's source. Never panics on the error
    /// path.
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// let parsed = Outcome::capture(|| "42".parse::<i32>());
    /// assert_eq!(*parsed.value(), 42);
    ///
    /// let failed = Outcome::capture(|| "x".parse::<i32>());
    /// assert!(failed.is_failed());
    /// ```
    pub fn capture<E, F>(action: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: core::error::Error + Send + Sync + 'static,
    {
        match action() {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail(Error::from_source(error)),
        }
    }

    /// Runs a fallible action, converting its error through `handler`.
    pub fn capture_with<E, F, H>(action: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        H: FnOnce(E) -> Error,
    {
        match action() {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail(handler(error)),
        }
    }

    /// Returns `true` when no error reason is present.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// Returns `true` when at least one error reason is present.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.reasons.iter().any(Reason::is_error)
    }

    /// Returns every reason in insertion order.
    #[must_use]
    #[inline]
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Consumes the outcome, returning its reasons.
    pub fn into_reasons(self) -> ReasonVec<Reason> {
        self.reasons
    }

    /// Iterates the error reasons, shallow (nested causes are not expanded).
    pub fn iter_errors(&self) -> impl Iterator<Item = &Error> {
        self.reasons.iter().filter_map(Reason::as_error)
    }

    /// Iterates the success reasons, shallow.
    pub fn iter_successes(&self) -> impl Iterator<Item = &Success> {
        self.reasons.iter().filter_map(Reason::as_success)
    }

    /// Borrows the carried value.
    ///
    /// # Panics
    ///
    /// Panics on a failed or valueless outcome. A failed outcome's value was
    /// never set; reading it is a caller bug, not a domain failure. Check
    /// [`is_success`](Outcome::is_success) or use
    /// [`value_or_default`](Outcome::value_or_default) instead.
    #[must_use]
    pub fn value(&self) -> &T {
        if self.is_failed() {
            panic!("value read from a failed Outcome; check is_success first");
        }
        match &self.value {
            Maybe::Some(value) => value,
            Maybe::None => panic!("value read from an Outcome that carries no value"),
        }
    }

    /// Borrows the payload as a [`Maybe`].
    #[inline]
    pub fn maybe(&self) -> &Maybe<T> {
        &self.value
    }

    /// Consumes the outcome, returning the payload.
    pub fn into_maybe(self) -> Maybe<T> {
        self.value
    }

    /// Returns the value, or `default` on failure or absence. Never panics.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        if self.is_failed() {
            return default;
        }
        self.value.unwrap_or(default)
    }

    /// Returns the value, or `T::default()` on failure or absence. Never
    /// panics.
    #[must_use]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        if self.is_failed() {
            return T::default();
        }
        self.value.unwrap_or_default()
    }

    /// Attaches a value to a successful outcome.
    ///
    /// # Panics
    ///
    /// Panics on a failed outcome: a failure must never appear to carry a
    /// result.
    pub fn with_value(mut self, value: T) -> Self {
        if self.is_failed() {
            panic!("value set on a failed Outcome");
        }
        self.value = Maybe::Some(value);
        self
    }

    /// Appends one reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Reason>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    /// Appends reasons in iteration order.
    pub fn with_reasons<I>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = Reason>,
    {
        self.reasons.extend(reasons);
        self
    }

    /// Appends one error reason, turning the outcome into a failure.
    #[inline]
    pub fn with_error(mut self, error: impl IntoErrorReason) -> Self {
        self.reasons.push(Reason::Error(error.into_error_reason()));
        self
    }

    /// Appends error reasons in iteration order.
    pub fn with_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoErrorReason,
    {
        self.reasons
            .extend(errors.into_iter().map(|error| Reason::Error(error.into_error_reason())));
        self
    }

    /// Appends one success note.
    #[inline]
    pub fn with_success(mut self, success: impl IntoSuccessReason) -> Self {
        self.reasons.push(Reason::Success(success.into_success_reason()));
        self
    }

    /// Appends success notes in iteration order.
    pub fn with_successes<I>(mut self, successes: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoSuccessReason,
    {
        self.reasons.extend(
            successes
                .into_iter()
                .map(|success| Reason::Success(success.into_success_reason())),
        );
        self
    }

    /// Appends an error reason only when the outcome is already failed.
    pub fn on_fail(self, error: impl IntoErrorReason) -> Self {
        if self.is_failed() {
            self.with_error(error)
        } else {
            self
        }
    }

    /// Like [`on_fail`](Outcome::on_fail), but the reason is built lazily so
    /// the success path pays nothing.
    ///
    /// ```
    /// use reason_rail::{Error, Outcome};
    ///
    /// let outcome = Outcome::<i32>::fail("lookup failed")
    ///     .on_fail_with(|| Error::new("while loading profile"));
    /// assert_eq!(outcome.reasons().len(), 2);
    /// ```
    pub fn on_fail_with<F, C>(self, f: F) -> Self
    where
        F: FnOnce() -> C,
        C: IntoErrorReason,
    {
        if self.is_failed() {
            self.with_error(f())
        } else {
            self
        }
    }

    /// Searches errors recursively, including every nested cause.
    ///
    /// The predicate is tried against each top-level error reason and then
    /// against its whole cause tree; the search stops at the first match.
    ///
    /// ```
    /// use reason_rail::{Error, Outcome};
    ///
    /// let outcome: Outcome<()> =
    ///     Outcome::fail(Error::new("main").caused_by(Error::new("root")));
    /// assert!(outcome.has_error_matching(|error| error.message() == "root"));
    /// ```
    #[must_use]
    pub fn has_error_matching(&self, predicate: impl Fn(&Error) -> bool) -> bool {
        let mut stack: Vec<&Error> = self.iter_errors().collect();
        while let Some(error) = stack.pop() {
            if predicate(error) {
                return true;
            }
            stack.extend(error.causes());
        }
        false
    }

    /// Searches for an error marked with `M`, recursively.
    #[must_use]
    pub fn has_error_of<M: 'static>(&self) -> bool {
        self.has_error_matching(|error| error.is::<M>())
    }

    /// Searches for an error marked with `M` that also satisfies `predicate`.
    #[must_use]
    pub fn has_error_of_matching<M: 'static>(&self, predicate: impl Fn(&Error) -> bool) -> bool {
        self.has_error_matching(|error| error.is::<M>() && predicate(error))
    }

    /// Searches success notes recursively, including every nested cause.
    #[must_use]
    pub fn has_success_matching(&self, predicate: impl Fn(&Success) -> bool) -> bool {
        let mut stack: Vec<&Success> = self.iter_successes().collect();
        while let Some(success) = stack.pop() {
            if predicate(success) {
                return true;
            }
            stack.extend(success.causes());
        }
        false
    }

    /// Searches for a success note marked with `M`, recursively.
    #[must_use]
    pub fn has_success_of<M: 'static>(&self) -> bool {
        self.has_success_matching(|success| success.is::<M>())
    }

    /// Searches for a success note marked with `M` that also satisfies
    /// `predicate`.
    #[must_use]
    pub fn has_success_of_matching<M: 'static>(
        &self,
        predicate: impl Fn(&Success) -> bool,
    ) -> bool {
        self.has_success_matching(|success| success.is::<M>() && predicate(success))
    }

    /// Hands the reasons to the configured logger, if any. No-op otherwise.
    pub fn log(&self, settings: &OutcomeSettings, context: &str) -> &Self {
        if let Some(logger) = settings.logger() {
            logger.log(context, self.reasons());
        }
        self
    }
}

impl<T> Default for Outcome<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
