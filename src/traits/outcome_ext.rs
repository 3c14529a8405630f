//! Extension trait lifting standard `Result`s into outcomes.
//!
//! # Examples
//!
//! ```
//! use reason_rail::traits::OutcomeExt;
//!
//! let outcome = "17".parse::<i32>().into_outcome();
//! assert_eq!(*outcome.value(), 17);
//!
//! let failed = "x".parse::<i32>().into_outcome();
//! assert!(failed.is_failed());
//! ```

use core::fmt::Display;

use alloc::string::ToString;

use crate::types::outcome::Outcome;
use crate::types::reason::Error;

/// Converts a `Result<T, E>` into an [`Outcome<T>`].
///
/// Two routes are offered depending on what the error type supports:
///
/// - [`into_outcome`](OutcomeExt::into_outcome) keeps the original error
///   reachable as the reason's source
/// - [`outcome_msg`](OutcomeExt::outcome_msg) flattens the error into a
///   message through `Display`
pub trait OutcomeExt<T, E>: Sized {
    /// Converts the result, wrapping any error as the reason's source.
    fn into_outcome(self) -> Outcome<T>
    where
        E: core::error::Error + Send + Sync + 'static;

    /// Converts the result, rendering any error through its `Display` output.
    fn outcome_msg(self) -> Outcome<T>
    where
        E: Display;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::fail(Error::from_source(error)),
        }
    }

    #[inline]
    fn outcome_msg(self) -> Outcome<T>
    where
        E: Display,
    {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::fail(Error::new(error.to_string())),
        }
    }
}
