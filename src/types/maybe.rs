//! A first-class presence/absence sum type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Presence (`Some`) or absence (`None`) of a value.
///
/// Unlike a nullable slot, extraction is always explicit: pattern match on
/// the public enum or go through [`fold`](Maybe::fold), which forces both
/// branches to be handled.
///
/// ```
/// use reason_rail::Maybe;
///
/// let doubled = Maybe::some(5).fold(|value| value * 2, || -1);
/// assert_eq!(doubled, 10);
///
/// let absent = Maybe::<i32>::none().fold(|value| value * 2, || -1);
/// assert_eq!(absent, -1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// The absent value.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Returns `true` when a value is present.
    #[must_use]
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` when no value is present.
    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Total extraction: exactly one of the two branches runs.
    #[inline]
    pub fn fold<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Projects the present value, keeping absence as-is.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Flattening projection: `f` runs only on a present value.
    #[inline]
    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    /// Borrows the payload.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns the value or the supplied default.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value or `T::default()`.
    #[must_use]
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Returns the value or computes a default.
    #[must_use]
    #[inline]
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    /// Combines two derived options and projects through a selector.
    ///
    /// Both combinators receive the original option and both always run; the
    /// selector runs only when the original and every combinator result are
    /// present.
    ///
    /// ```
    /// use reason_rail::Maybe;
    ///
    /// let area = Maybe::some(3).combine2(
    ///     |side| side.map(|s| s * 2),
    ///     |side| side.as_ref().map(|s| *s + 1),
    ///     |side, doubled, grown| side * doubled * grown,
    /// );
    /// assert_eq!(area, Maybe::Some(72));
    /// ```
    pub fn combine2<U1, U2, R>(
        &self,
        first: impl FnOnce(&Maybe<T>) -> Maybe<U1>,
        second: impl FnOnce(&Maybe<T>) -> Maybe<U2>,
        select: impl FnOnce(&T, U1, U2) -> R,
    ) -> Maybe<R> {
        let first = first(self);
        let second = second(self);
        match (self, first, second) {
            (Maybe::Some(value), Maybe::Some(a), Maybe::Some(b)) => Maybe::Some(select(value, a, b)),
            _ => Maybe::None,
        }
    }

    /// Three-way form of [`combine2`](Maybe::combine2).
    pub fn combine3<U1, U2, U3, R>(
        &self,
        first: impl FnOnce(&Maybe<T>) -> Maybe<U1>,
        second: impl FnOnce(&Maybe<T>) -> Maybe<U2>,
        third: impl FnOnce(&Maybe<T>) -> Maybe<U3>,
        select: impl FnOnce(&T, U1, U2, U3) -> R,
    ) -> Maybe<R> {
        let first = first(self);
        let second = second(self);
        let third = third(self);
        match (self, first, second, third) {
            (Maybe::Some(value), Maybe::Some(a), Maybe::Some(b), Maybe::Some(c)) => {
                Maybe::Some(select(value, a, b, c))
            }
            _ => Maybe::None,
        }
    }

    /// Four-way form of [`combine2`](Maybe::combine2).
    pub fn combine4<U1, U2, U3, U4, R>(
        &self,
        first: impl FnOnce(&Maybe<T>) -> Maybe<U1>,
        second: impl FnOnce(&Maybe<T>) -> Maybe<U2>,
        third: impl FnOnce(&Maybe<T>) -> Maybe<U3>,
        fourth: impl FnOnce(&Maybe<T>) -> Maybe<U4>,
        select: impl FnOnce(&T, U1, U2, U3, U4) -> R,
    ) -> Maybe<R> {
        let first = first(self);
        let second = second(self);
        let third = third(self);
        let fourth = fourth(self);
        match (self, first, second, third, fourth) {
            (Maybe::Some(value), Maybe::Some(a), Maybe::Some(b), Maybe::Some(c), Maybe::Some(d)) => {
                Maybe::Some(select(value, a, b, c, d))
            }
            _ => Maybe::None,
        }
    }

    /// Converts into the standard `Option`.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
