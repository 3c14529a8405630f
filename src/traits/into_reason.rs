//! Conversion traits for building reasons from flexible inputs.
//!
//! Factory and builder methods take `impl IntoErrorReason` (or the success
//! twin) so a call site can pass a message where it has nothing structured to
//! say, and a full reason where it does.

use crate::types::alloc_type::{Cow, String};
use crate::types::reason::{Error, Success};

/// Converts a value into an [`Error`] reason.
///
/// Implemented for string-ish types (producing a message-only error) and for
/// `Error` itself (identity). External error types convert through the
/// explicit [`Error::from_source`] path instead, so wrapping stays visible at
/// the call site.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a failure reason",
    label = "this type does not implement `IntoErrorReason`",
    note = "pass a message string, an `Error`, or wrap an external error with `Error::from_source`"
)]
pub trait IntoErrorReason {
    /// Converts `self` into an [`Error`].
    fn into_error_reason(self) -> Error;
}

impl IntoErrorReason for Error {
    /// Identity conversion (no-op).
    #[inline]
    fn into_error_reason(self) -> Error {
        self
    }
}

impl IntoErrorReason for String {
    #[inline]
    fn into_error_reason(self) -> Error {
        Error::new(self)
    }
}

impl IntoErrorReason for &'static str {
    #[inline]
    fn into_error_reason(self) -> Error {
        Error::new(self)
    }
}

impl IntoErrorReason for Cow<'static, str> {
    #[inline]
    fn into_error_reason(self) -> Error {
        Error::new(self)
    }
}

/// Converts a value into a [`Success`] reason.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a success note",
    label = "this type does not implement `IntoSuccessReason`",
    note = "pass a message string or a `Success`"
)]
pub trait IntoSuccessReason {
    /// Converts `self` into a [`Success`].
    fn into_success_reason(self) -> Success;
}

impl IntoSuccessReason for Success {
    /// Identity conversion (no-op).
    #[inline]
    fn into_success_reason(self) -> Success {
        self
    }
}

impl IntoSuccessReason for String {
    #[inline]
    fn into_success_reason(self) -> Success {
        Success::new(self)
    }
}

impl IntoSuccessReason for &'static str {
    #[inline]
    fn into_success_reason(self) -> Success {
        Success::new(self)
    }
}

impl IntoSuccessReason for Cow<'static, str> {
    #[inline]
    fn into_success_reason(self) -> Success {
        Success::new(self)
    }
}
