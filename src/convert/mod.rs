//! Conversions between outcomes, reasons, and the standard `Result`.
//!
//! # Examples
//!
//! ```
//! use reason_rail::{Error, Maybe, Outcome};
//!
//! // A reason converts straight into a failed outcome.
//! let outcome: Outcome<i32> = Error::new("nope").into();
//! assert!(outcome.is_failed());
//!
//! // And an outcome splits back into a Result over its errors.
//! let result = outcome.into_result();
//! assert_eq!(result.unwrap_err().len(), 1);
//!
//! let result = Outcome::ok(5).into_result();
//! assert_eq!(result.unwrap(), Maybe::Some(5));
//! ```

use crate::types::maybe::Maybe;
use crate::types::outcome::Outcome;
use crate::types::reason::{Error, Reason, Success};
use crate::types::ReasonVec;

impl<T> Outcome<T> {
    /// Splits into `Ok(payload)` on success or `Err(errors)` on failure.
    ///
    /// Success notes are dropped on the error path; the error list preserves
    /// insertion order.
    pub fn into_result(self) -> Result<Maybe<T>, ReasonVec<Error>> {
        let (value, reasons) = self.into_parts();
        let mut errors = ReasonVec::new();
        for reason in reasons {
            if let Reason::Error(error) = reason {
                errors.push(error);
            }
        }
        if errors.is_empty() {
            Ok(value)
        } else {
            Err(errors)
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    /// A failure carrying the error as its one reason.
    #[inline]
    fn from(error: Error) -> Self {
        Outcome::fail(error)
    }
}

impl<T> From<Success> for Outcome<T> {
    /// A valueless success carrying the note as its one reason.
    #[inline]
    fn from(success: Success) -> Self {
        Outcome::new().with_success(success)
    }
}

impl<T> From<Maybe<T>> for Outcome<T> {
    /// A reasonless success; present values are carried over.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Outcome::ok(value),
            Maybe::None => Outcome::new(),
        }
    }
}
