//! Async combinators for outcomes.
//!
//! The short-circuit contract is identical to the sync algebra; the only
//! difference is that bound functions return futures and the chain suspends
//! until each one resolves. Sibling combinators run in declared order, each
//! after the previous has resolved.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! reason-rail = { version = "0.4", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use reason_rail::prelude_async::*;
//!
//! async fn load_user(id: u64) -> Outcome<User> {
//!     fetch(id)
//!         .on_fail_with(|| Error::new("loading user profile"))
//!         .await
//! }
//! ```

mod future_ext;
mod outcome_async;
mod reason_future;

pub use future_ext::OutcomeFutureExt;
pub use reason_future::ReasonFuture;
