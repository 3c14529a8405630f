//! Async prelude - everything from [`prelude`](crate::prelude) plus the
//! async adapters.
//!
//! ```
//! use reason_rail::prelude_async::*;
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{OutcomeFutureExt, ReasonFuture};
