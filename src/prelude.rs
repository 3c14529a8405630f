//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use reason_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`metadata!`], [`outcome!`]
//! - **Types**: [`Outcome`], [`Error`], [`Success`], [`Reason`], [`Maybe`],
//!   [`Metadata`], [`OutcomeSettings`]
//! - **Traits**: [`IntoErrorReason`], [`IntoSuccessReason`], [`OutcomeExt`]
//! - **Functions**: [`merge`], [`merge_values`]
//!
//! # Examples
//!
//! ```
//! use reason_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().into_outcome()
//! }
//!
//! assert!(parse_port("8080").is_success());
//! assert!(parse_port("eighty").is_failed());
//! ```

// Macros
pub use crate::{fail, metadata, outcome};

// Core types
pub use crate::settings::{OutcomeLogger, OutcomeSettings};
pub use crate::types::{Error, Maybe, Metadata, Outcome, Reason, Success};

// Traits
pub use crate::traits::{IntoErrorReason, IntoSuccessReason, OutcomeExt};

// Merge combinators
pub use crate::types::{merge, merge_values};
