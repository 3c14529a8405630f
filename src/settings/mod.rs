//! Explicit configuration for reason construction and logging.
//!
//! There is no global state: call sites that want configured factories, a
//! custom exception mapping, or logging thread an [`OutcomeSettings`] value
//! through explicitly.
//!
//! # Examples
//!
//! ```
//! use reason_rail::{Error, OutcomeSettings};
//!
//! struct Domain;
//!
//! let settings = OutcomeSettings::default()
//!     .with_error_factory(|message| Error::new(message).mark::<Domain>());
//!
//! let outcome: reason_rail::Outcome<i32> = settings.fail("quota exceeded");
//! assert!(outcome.has_error_of::<Domain>());
//! ```

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::types::alloc_type::Cow;
use crate::types::outcome::Outcome;
use crate::types::reason::{Error, ErrorSource, Reason, Success};

type ErrorFactory = Box<dyn Fn(Cow<'static, str>) -> Error + Send + Sync>;
type SuccessFactory = Box<dyn Fn(Cow<'static, str>) -> Success + Send + Sync>;
type ExceptionMapper = Box<dyn Fn(ErrorSource) -> Error + Send + Sync>;

/// Hook invoked by [`Outcome::log`]. No logger is configured by default.
pub trait OutcomeLogger: Send + Sync {
    /// Receives the caller-supplied context string and the outcome's reasons.
    fn log(&self, context: &str, reasons: &[Reason]);
}

/// Pluggable factories and hooks, threaded explicitly.
///
/// - the error/success factories turn plain messages into the configured
///   reason shapes
/// - the exception mapper is the default conversion used by
///   [`capture`](OutcomeSettings::capture)
/// - the logger backs [`Outcome::log`]
#[must_use]
pub struct OutcomeSettings {
    error_factory: ErrorFactory,
    success_factory: SuccessFactory,
    exception_mapper: ExceptionMapper,
    logger: Option<Box<dyn OutcomeLogger>>,
}

impl Default for OutcomeSettings {
    fn default() -> Self {
        Self {
            error_factory: Box::new(|message| Error::new(message)),
            success_factory: Box::new(|message| Success::new(message)),
            exception_mapper: Box::new(Error::from_shared),
            logger: None,
        }
    }
}

impl OutcomeSettings {
    /// Replaces the error factory.
    pub fn with_error_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(Cow<'static, str>) -> Error + Send + Sync + 'static,
    {
        self.error_factory = Box::new(factory);
        self
    }

    /// Replaces the success factory.
    pub fn with_success_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(Cow<'static, str>) -> Success + Send + Sync + 'static,
    {
        self.success_factory = Box::new(factory);
        self
    }

    /// Replaces the default exception-to-error mapping.
    pub fn with_exception_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(ErrorSource) -> Error + Send + Sync + 'static,
    {
        self.exception_mapper = Box::new(mapper);
        self
    }

    /// Installs a logger behind [`Outcome::log`].
    pub fn with_logger(mut self, logger: impl OutcomeLogger + 'static) -> Self {
        self.logger = Some(Box::new(logger));
        self
    }

    /// Builds an error through the configured factory.
    pub fn error(&self, message: impl Into<Cow<'static, str>>) -> Error {
        (self.error_factory)(message.into())
    }

    /// Builds a success note through the configured factory.
    pub fn success(&self, message: impl Into<Cow<'static, str>>) -> Success {
        (self.success_factory)(message.into())
    }

    /// A failure whose reason comes from the configured error factory.
    pub fn fail<T>(&self, message: impl Into<Cow<'static, str>>) -> Outcome<T> {
        Outcome::fail(self.error(message))
    }

    /// Runs a fallible action, mapping any error through the configured
    /// exception mapper. Never panics on the error path.
    pub fn capture<T, E, F>(&self, action: F) -> Outcome<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: core::error::Error + Send + Sync + 'static,
    {
        match action() {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::fail((self.exception_mapper)(Arc::new(error))),
        }
    }

    /// Returns the installed logger, if any.
    #[must_use]
    pub fn logger(&self) -> Option<&dyn OutcomeLogger> {
        self.logger.as_deref()
    }
}

impl fmt::Debug for OutcomeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutcomeSettings")
            .field("logger", &self.logger.is_some())
            .finish_non_exhaustive()
    }
}

/// Logger backend emitting `tracing` events: failures at error level,
/// everything else at info.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl OutcomeLogger for TracingLogger {
    fn log(&self, context: &str, reasons: &[Reason]) {
        let summary = render_reasons(reasons);
        if reasons.iter().any(Reason::is_error) {
            tracing::error!(context, reasons = %summary, "outcome recorded a failure");
        } else {
            tracing::info!(context, reasons = %summary, "outcome recorded");
        }
    }
}

#[cfg(feature = "tracing")]
fn render_reasons(reasons: &[Reason]) -> crate::types::alloc_type::String {
    use core::fmt::Write;

    let mut rendered = crate::types::alloc_type::String::new();
    for (index, reason) in reasons.iter().enumerate() {
        if index > 0 {
            rendered.push_str("; ");
        }
        let _ = write!(rendered, "{reason}");
    }
    rendered
}
