//! The reason hierarchy: `Error`, `Success`, and the `Reason` union.
//!
//! Reasons are structural value types. Builders consume `self` and return a
//! new value, so a reason is never observed half-built.

use core::any::TypeId;
use core::fmt;

use alloc::string::ToString;
use alloc::sync::Arc;

use crate::traits::{IntoErrorReason, IntoSuccessReason};
use crate::types::alloc_type::{Cow, String, Vec};
use crate::types::metadata::{Metadata, MetadataValue};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shared handle to the external error that triggered a failure.
pub type ErrorSource = Arc<dyn core::error::Error + Send + Sync + 'static>;

/// A failure reason.
///
/// Carries a message, ordered [`Metadata`], nested causes, an optional error
/// code and HTTP status, and an optional external source error. Everything is
/// built through consuming `with_*` calls:
///
/// ```
/// use reason_rail::Error;
///
/// let error = Error::new("payment rejected")
///     .with_code("E_PAY_01")
///     .with_status(402)
///     .with_metadata("order", 991)
///     .caused_by("card expired");
///
/// assert_eq!(error.message(), "payment rejected");
/// assert_eq!(error.causes().len(), 1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Error {
    message: Cow<'static, str>,
    metadata: Metadata,
    causes: Vec<Error>,
    code: Option<Cow<'static, str>>,
    status: Option<u16>,
    #[cfg_attr(feature = "serde", serde(skip))]
    source: Option<ErrorSource>,
    #[cfg_attr(feature = "serde", serde(skip))]
    marker: Option<TypeId>,
}

impl Error {
    /// Creates an error with the given message.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
            causes: Vec::new(),
            code: None,
            status: None,
            source: None,
            marker: None,
        }
    }

    /// Wraps an external error. The message defaults to the source's
    /// `Display` output.
    pub fn from_source<E>(source: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(source))
    }

    /// Wraps an already-shared external error.
    pub fn from_shared(source: ErrorSource) -> Self {
        let message = source.to_string();
        let mut error = Self::new(message);
        error.source = Some(source);
        error
    }

    /// Replaces the message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Adds one metadata entry. Writing an existing key replaces its value.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    /// Merges a whole metadata map into this error.
    #[inline]
    pub fn with_metadata_all(mut self, metadata: Metadata) -> Self {
        self.metadata.merge(metadata);
        self
    }

    /// Sets the error code.
    #[inline]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the HTTP status hint.
    #[inline]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Appends a nested cause built from a message or another error.
    #[inline]
    pub fn caused_by<C: IntoErrorReason>(mut self, cause: C) -> Self {
        self.causes.push(cause.into_error_reason());
        self
    }

    /// Appends a nested cause wrapping an external error.
    pub fn caused_by_source<E>(self, source: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        self.caused_by(Error::from_source(source))
    }

    /// Appends several nested causes in order.
    pub fn caused_by_many<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        self.causes.extend(causes);
        self
    }

    /// Records `M` as this error's marker type for typed searches.
    ///
    /// ```
    /// use reason_rail::Error;
    ///
    /// struct NotFound;
    ///
    /// let error = Error::new("no such user").mark::<NotFound>();
    /// assert!(error.is::<NotFound>());
    /// ```
    #[inline]
    pub fn mark<M: 'static>(mut self) -> Self {
        self.marker = Some(TypeId::of::<M>());
        self
    }

    /// Returns `true` when this error was marked with `M`.
    #[must_use]
    #[inline]
    pub fn is<M: 'static>(&self) -> bool {
        self.marker == Some(TypeId::of::<M>())
    }

    /// Returns the message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the metadata entries.
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the nested causes in insertion order.
    #[must_use]
    #[inline]
    pub fn causes(&self) -> &[Error] {
        &self.causes
    }

    /// Returns the error code, if set.
    #[must_use]
    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the HTTP status hint, if set.
    #[must_use]
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the wrapped external error, if any.
    #[must_use]
    pub fn source_error(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn core::error::Error + 'static))
    }

    fn source_text(&self) -> Option<String> {
        self.source.as_ref().map(|source| source.to_string())
    }
}

impl Default for Error {
    #[inline]
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.metadata == other.metadata
            && self.causes == other.causes
            && self.code == other.code
            && self.status == other.status
            && self.marker == other.marker
            && self.source_text() == other.source_text()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_reason(f, "Error", &self.message, &self.metadata, &self.causes)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source_error()
    }
}

/// An auxiliary success note.
///
/// Mirror of [`Error`] without code, status, or source: a message, metadata,
/// and nested causes of the same shape.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Success {
    message: Cow<'static, str>,
    metadata: Metadata,
    causes: Vec<Success>,
    #[cfg_attr(feature = "serde", serde(skip))]
    marker: Option<TypeId>,
}

impl Success {
    /// Creates a success note with the given message.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
            causes: Vec::new(),
            marker: None,
        }
    }

    /// Replaces the message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Adds one metadata entry.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    /// Appends a nested cause built from a message or another success.
    #[inline]
    pub fn caused_by<C: IntoSuccessReason>(mut self, cause: C) -> Self {
        self.causes.push(cause.into_success_reason());
        self
    }

    /// Appends several nested causes in order.
    pub fn caused_by_many<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = Success>,
    {
        self.causes.extend(causes);
        self
    }

    /// Records `M` as this note's marker type for typed searches.
    #[inline]
    pub fn mark<M: 'static>(mut self) -> Self {
        self.marker = Some(TypeId::of::<M>());
        self
    }

    /// Returns `true` when this note was marked with `M`.
    #[must_use]
    #[inline]
    pub fn is<M: 'static>(&self) -> bool {
        self.marker == Some(TypeId::of::<M>())
    }

    /// Returns the message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the metadata entries.
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the nested causes in insertion order.
    #[must_use]
    #[inline]
    pub fn causes(&self) -> &[Success] {
        &self.causes
    }
}

impl Default for Success {
    #[inline]
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_reason(f, "Success", &self.message, &self.metadata, &self.causes)
    }
}

/// Either an [`Error`] or a [`Success`].
///
/// The union is closed: success or failure of an outcome is derived by
/// scanning its reasons for the `Error` variant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Reason {
    Error(Error),
    Success(Success),
}

impl Reason {
    /// Returns the message of either variant.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Error(error) => error.message(),
            Self::Success(success) => success.message(),
        }
    }

    /// Returns the metadata of either variant.
    pub fn metadata(&self) -> &Metadata {
        match self {
            Self::Error(error) => error.metadata(),
            Self::Success(success) => success.metadata(),
        }
    }

    /// Returns `true` for the `Error` variant.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` for the `Success` variant.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrows the `Error` payload, if this is one.
    #[must_use]
    #[inline]
    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Self::Error(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Borrows the `Success` payload, if this is one.
    #[must_use]
    #[inline]
    pub fn as_success(&self) -> Option<&Success> {
        match self {
            Self::Error(_) => None,
            Self::Success(success) => Some(success),
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => error.fmt(f),
            Self::Success(success) => success.fmt(f),
        }
    }
}

impl From<Error> for Reason {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Error(error)
    }
}

impl From<Success> for Reason {
    #[inline]
    fn from(success: Success) -> Self {
        Self::Success(success)
    }
}

/// Renders `<Type>`, then `with Message='..'`, `Metadata='..'`, `Causes='..'`
/// segments for whichever parts are present. Causes recurse through the same
/// format joined by `"; "`.
fn fmt_reason<C: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    type_name: &str,
    message: &str,
    metadata: &Metadata,
    causes: &[C],
) -> fmt::Result {
    f.write_str(type_name)?;
    let mut separator = " with ";
    if !message.is_empty() {
        write!(f, "{separator}Message='{message}'")?;
        separator = ", ";
    }
    if !metadata.is_empty() {
        write!(f, "{separator}Metadata='{metadata}'")?;
        separator = ", ";
    }
    if !causes.is_empty() {
        write!(f, "{separator}Causes='")?;
        for (index, cause) in causes.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{cause}")?;
        }
        f.write_str("'")?;
    }
    Ok(())
}
