//! Ergonomic macros for building outcomes and metadata.
//!
//! - [`macro@crate::fail`] - Builds a failed [`Outcome`](crate::Outcome) from
//!   a format string.
//! - [`macro@crate::metadata`] - Builds a [`Metadata`](crate::Metadata) map
//!   from `key => value` pairs.
//! - [`macro@crate::outcome`] - Runs a `Result`-producing expression through
//!   [`Outcome::capture`](crate::Outcome::capture).
//!
//! # Examples
//!
//! ```
//! use reason_rail::{fail, metadata, outcome, Outcome};
//!
//! let missing: Outcome<i32> = fail!("user {} not found", 7);
//! assert!(missing.is_failed());
//!
//! let map = metadata! { "attempt" => 2, "host" => "db-3" };
//! assert_eq!(map.len(), 2);
//!
//! let parsed: Outcome<i32> = outcome!("42".parse::<i32>());
//! assert_eq!(*parsed.value(), 42);
//! ```

/// Builds a failed [`Outcome`](crate::Outcome) from a format string.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use reason_rail::{fail, Outcome};
///
/// let outcome: Outcome<()> = fail!("missing field '{}'", "email");
/// assert_eq!(outcome.reasons()[0].message(), "missing field 'email'");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::fail($crate::Error::new(
            $crate::types::alloc_type::format!($($arg)*),
        ))
    };
}

/// Builds a [`Metadata`](crate::Metadata) map from `key => value` pairs.
///
/// Later writes to the same key win, matching
/// [`Metadata::insert`](crate::Metadata::insert).
///
/// # Examples
///
/// ```
/// use reason_rail::{metadata, MetadataValue};
///
/// let map = metadata! { "retries" => 3, "transient" => true };
/// assert_eq!(map.get("retries"), Some(&MetadataValue::Int(3)));
/// ```
#[macro_export]
macro_rules! metadata {
    () => { $crate::Metadata::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Metadata::new();
        $( map.insert($key, $value); )+
        map
    }};
}

/// Runs a `Result`-producing expression through
/// [`Outcome::capture`](crate::Outcome::capture).
///
/// The expression's error type must be a real error
/// (`core::error::Error + Send + Sync + 'static`); it stays reachable as the
/// failure reason's source.
///
/// # Examples
///
/// ```
/// use reason_rail::{outcome, Outcome};
///
/// let failed: Outcome<i32> = outcome!("not a number".parse::<i32>());
/// assert!(failed.is_failed());
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::capture(|| $expr)
    };
}
