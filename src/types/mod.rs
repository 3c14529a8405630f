//! Reason hierarchy and result containers.
//!
//! The data model is small and closed: a [`Reason`] is either an [`Error`] or
//! a [`Success`], an [`Outcome`] owns an ordered list of reasons plus a
//! [`Maybe`] value, and [`Metadata`] attaches ordered key/value entries to
//! any reason.
//!
//! # Examples
//!
//! ```
//! use reason_rail::{Error, Outcome};
//!
//! let outcome: Outcome<()> = Outcome::fail(
//!     Error::new("payment rejected")
//!         .with_code("E_PAY")
//!         .with_metadata("order", 991),
//! );
//!
//! assert!(outcome.is_failed());
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod maybe;
pub mod metadata;
pub mod outcome;
pub mod reason;

pub use maybe::Maybe;
pub use metadata::{Metadata, MetadataValue};
pub use outcome::{merge, merge_values, Outcome};
pub use reason::{Error, ErrorSource, Reason, Success};

/// SmallVec-backed collection used for accumulating reasons.
///
/// Uses inline storage for one element so the common single-reason outcome
/// stays off the heap.
pub type ReasonVec<T> = SmallVec<[T; 1]>;
