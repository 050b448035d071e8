//! Optional values without an error channel
//!
//! `Maybe<T>` is a two-variant container: `Present(value)` or `Absent`.
//! Transformations whose closures may be synchronous or asynchronous
//! normalize through [`Eventual`], so callers await the result either way.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::future::FutureExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CapturedError, UnwrapError, UnwrapResult};
use crate::eventual::Eventual;

/// A value that is present or absent
///
/// ```rust
/// use matchbook_types::{Absent, Maybe, Present};
///
/// let port: Maybe<u16> = Present(8080);
/// assert_eq!(port.unwrap_or(80), 8080);
/// assert_eq!(Absent.unwrap_or(80), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    /// Accept a value unless it fails self-comparison (NaN-like values do)
    pub fn non_nan(value: T) -> Self
    where
        T: PartialEq,
    {
        #[allow(clippy::eq_op)]
        let well_formed = value == value;
        if well_formed {
            Self::Present(value)
        } else {
            Self::Absent
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True iff both sides are present and their payloads are equal
    ///
    /// Unlike `==`, two absent values do not count as a match here.
    pub fn is(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        match (self, other) {
            (Self::Present(a), Self::Present(b)) => a == b,
            _ => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Present(held) if held == value)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Zero-or-one iterator over the payload, re-derivable on each call
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_option().into_iter()
    }

    /// The payload, or an `UnwrapError` carrying `message`
    pub fn expect(self, message: impl Into<String>) -> UnwrapResult<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::Expectation(message.into())),
        }
    }

    /// The payload, or the canonical absent-unwrap error
    pub fn unwrap(self) -> UnwrapResult<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::FoundAbsent),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// The payload, or the lazily computed fallback (sync or async)
    pub fn unwrap_or_else<V, F>(self, fallback: F) -> Eventual<T>
    where
        F: FnOnce() -> V,
        V: Into<Eventual<T>>,
    {
        match self {
            Self::Present(value) => Eventual::Ready(value),
            Self::Absent => fallback().into(),
        }
    }

    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => other,
        }
    }

    /// Keep a present value, otherwise take the fallback's container
    pub fn or_else<V, F>(self, fallback: F) -> Eventual<Self>
    where
        F: FnOnce() -> V,
        V: Into<Eventual<Self>>,
    {
        match self {
            Self::Present(value) => Eventual::Ready(Self::Present(value)),
            Self::Absent => fallback().into(),
        }
    }

    /// Discard a present payload in favor of `other`; absent stays absent
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chain a container-producing transformation over a present payload
    pub fn and_then<U, V, F>(self, f: F) -> Eventual<Maybe<U>>
    where
        F: FnOnce(T) -> V,
        V: Into<Eventual<Maybe<U>>>,
    {
        match self {
            Self::Present(value) => f(value).into(),
            Self::Absent => Eventual::Ready(Maybe::Absent),
        }
    }

    /// Transform a present payload, rewrapping the result in `Present`
    ///
    /// Absent short-circuits without invoking `f`. The closure may hand
    /// back a plain value or deferred work; both resolve to a container.
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use matchbook_types::{Maybe, Present};
    ///
    /// let doubled = Present(4).map(|v| v * 2);
    /// assert_eq!(block_on(async { doubled.await }), Present(8));
    /// ```
    pub fn map<U, V, F>(self, f: F) -> Eventual<Maybe<U>>
    where
        F: FnOnce(T) -> V,
        V: Into<Eventual<U>>,
        U: 'static,
    {
        match self {
            Self::Present(value) => match f(value).into() {
                Eventual::Ready(mapped) => Eventual::Ready(Maybe::Present(mapped)),
                Eventual::Deferred(fut) => Eventual::Deferred(fut.map(Maybe::Present).boxed()),
            },
            Self::Absent => Eventual::Ready(Maybe::Absent),
        }
    }

    /// Transform a present payload, or fall back to `default` unwrapped
    pub fn map_or<U, V, F>(self, default: U, f: F) -> Eventual<U>
    where
        F: FnOnce(T) -> V,
        V: Into<Eventual<U>>,
    {
        match self {
            Self::Present(value) => f(value).into(),
            Self::Absent => Eventual::Ready(default),
        }
    }

    /// Run `f`, converting a panic into `Absent`
    ///
    /// The panic payload is intentionally discarded: this container has no
    /// error channel. Use `Outcome::safe` to keep the captured error.
    ///
    /// ```rust
    /// use matchbook_types::{Absent, Maybe, Present};
    ///
    /// assert_eq!(Maybe::safe(|| 5), Present(5));
    /// assert_eq!(Maybe::safe(|| -> i32 { panic!("boom") }), Absent);
    /// ```
    pub fn safe<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Self::Present(value),
            Err(payload) => {
                let reason = CapturedError::from_panic(payload);
                debug!(%reason, "panic captured, treating as absent");
                Self::Absent
            }
        }
    }

    /// Await `future`, converting a panic into `Absent`
    pub fn safe_future<F>(future: F) -> Eventual<Self>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        Eventual::deferred(AssertUnwindSafe(future).catch_unwind().map(
            |caught| match caught {
                Ok(value) => Self::Present(value),
                Err(payload) => {
                    let reason = CapturedError::from_panic(payload);
                    debug!(%reason, "panic captured, treating as absent");
                    Self::Absent
                }
            },
        ))
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapse one level of nesting; absent-of-absent collapses to absent
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_option().into_iter()
    }
}
