//! Core conversion traits.
//!
//! - [`IntoErrorReason`] / [`IntoSuccessReason`]: accept a plain message or a
//!   prebuilt reason wherever a reason is expected
//! - [`OutcomeExt`]: lift a standard `Result` into an [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use reason_rail::{Error, Outcome};
//!
//! // The same factory accepts both shapes.
//! let from_message: Outcome<()> = Outcome::fail("flat tire");
//! let from_error: Outcome<()> = Outcome::fail(Error::new("flat tire").with_code("E_TIRE"));
//!
//! assert!(from_message.is_failed());
//! assert!(from_error.is_failed());
//! ```

pub mod into_reason;
pub mod outcome_ext;

pub use into_reason::{IntoErrorReason, IntoSuccessReason};
pub use outcome_ext::OutcomeExt;
