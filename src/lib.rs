//! Railway-oriented results that carry structured reasons.
//!
//! An [`Outcome`] holds an optional value plus an ordered list of [`Reason`]s.
//! Failure is never a thrown error: it is data, an [`Error`] reason sitting in
//! the list next to any [`Success`] notes collected along the way. Chaining
//! combinators short-circuit past failed outcomes without running downstream
//! code.
//!
//! # Examples
//!
//! ## Building and inspecting an outcome
//!
//! ```
//! use reason_rail::{Error, Outcome};
//!
//! let outcome = Outcome::ok(42)
//!     .with_success("loaded from cache")
//!     .with_error(Error::new("stale entry").with_code("E_STALE"));
//!
//! assert!(outcome.is_failed());
//! assert_eq!(outcome.reasons().len(), 2);
//! assert_eq!(outcome.iter_errors().count(), 1);
//! ```
//!
//! ## Chaining
//!
//! ```
//! use reason_rail::Outcome;
//!
//! fn half(n: i32) -> Outcome<i32> {
//!     if n % 2 == 0 { Outcome::ok(n / 2) } else { Outcome::fail("odd input") }
//! }
//!
//! let outcome = Outcome::ok(8).bind(half).bind(half);
//! assert_eq!(*outcome.value(), 2);
//!
//! let failed = Outcome::ok(7).bind(half).bind(half);
//! assert!(failed.is_failed());
//! ```
//!
//! ## Merging many outcomes
//!
//! ```
//! use reason_rail::{merge_values, Outcome};
//!
//! let merged = merge_values([Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)]);
//! assert_eq!(*merged.value(), vec![1, 2, 3]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome` and the standard `Result`
pub mod convert;
/// Ergonomic macros for building outcomes and metadata
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Explicit configuration: reason factories, exception mapping, logging
pub mod settings;
/// Core conversion traits for reasons and results
pub mod traits;
/// Reason hierarchy, `Maybe`, and the `Outcome` container
pub mod types;

/// Async combinators and future adapters (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use settings::{OutcomeLogger, OutcomeSettings};
pub use traits::{IntoErrorReason, IntoSuccessReason, OutcomeExt};
pub use types::{
    merge, merge_values, Error, ErrorSource, Maybe, Metadata, MetadataValue, Outcome, Reason,
    ReasonVec, Success,
};

#[cfg(feature = "tracing")]
pub use settings::TracingLogger;
