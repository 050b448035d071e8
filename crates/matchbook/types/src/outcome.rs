//! Fallible results with an explicit error channel
//!
//! `Outcome<T, E>` mirrors [`Maybe`](crate::Maybe) but carries an error
//! payload on the negative branch. The `safe` constructors capture panics
//! as [`CapturedError`] values instead of discarding them.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::future::FutureExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CapturedError, UnwrapError, UnwrapResult};
use crate::eventual::Eventual;
use crate::maybe::Maybe;

/// A computation result that succeeded or failed
///
/// ```rust
/// use matchbook_types::{Failure, Outcome, Success};
///
/// let parsed: Outcome<i32, String> = Success(42);
/// assert_eq!(parsed.unwrap_or(0), 42);
/// assert_eq!(Failure::<i32, _>("bad digit").unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// True iff both sides succeeded with equal payloads
    pub fn is(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        match (self, other) {
            (Self::Success(a), Self::Success(b)) => a == b,
            _ => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Success(held) if held == value)
    }

    /// The success payload as an optional value
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
    }

    /// The error payload as an optional value
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::Absent,
            Self::Failure(error) => Maybe::Present(error),
        }
    }

    pub fn as_result(&self) -> Result<&T, &E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Zero-or-one iterator over the success payload
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_result().ok().into_iter()
    }

    /// The success payload, or an `UnwrapError` carrying `message`
    pub fn expect(self, message: impl Into<String>) -> UnwrapResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(UnwrapError::Expectation(message.into())),
        }
    }

    /// The error payload, or an `UnwrapError` carrying `message`
    pub fn expect_err(self, message: impl Into<String>) -> UnwrapResult<E> {
        match self {
            Self::Success(_) => Err(UnwrapError::Expectation(message.into())),
            Self::Failure(error) => Ok(error),
        }
    }

    /// The success payload, or the canonical failed-unwrap error
    pub fn unwrap(self) -> UnwrapResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(UnwrapError::FoundFailure),
        }
    }

    /// The error payload, or the canonical succeeded-unwrap error
    pub fn unwrap_err(self) -> UnwrapResult<E> {
        match self {
            Self::Success(_) => Err(UnwrapError::FoundSuccess),
            Self::Failure(error) => Ok(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The success payload, or the fallback computed from the error
    pub fn unwrap_or_else<V, F>(self, fallback: F) -> Eventual<T>
    where
        F: FnOnce(E) -> V,
        V: Into<Eventual<T>>,
    {
        match self {
            Self::Success(value) => Eventual::Ready(value),
            Self::Failure(error) => fallback(error).into(),
        }
    }

    /// Keep a success, otherwise take `other` with its own error type
    pub fn or<F2>(self, other: Outcome<T, F2>) -> Outcome<T, F2> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Keep a success, otherwise build a replacement from the error
    pub fn or_else<F2, V, F>(self, fallback: F) -> Eventual<Outcome<T, F2>>
    where
        F: FnOnce(E) -> V,
        V: Into<Eventual<Outcome<T, F2>>>,
    {
        match self {
            Self::Success(value) => Eventual::Ready(Outcome::Success(value)),
            Self::Failure(error) => fallback(error).into(),
        }
    }

    /// Discard a success payload in favor of `other`; failures pass through
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a container-producing transformation over a success payload
    pub fn and_then<U, V, F>(self, f: F) -> Eventual<Outcome<U, E>>
    where
        F: FnOnce(T) -> V,
        V: Into<Eventual<Outcome<U, E>>>,
    {
        match self {
            Self::Success(value) => f(value).into(),
            Self::Failure(error) => Eventual::Ready(Outcome::Failure(error)),
        }
    }

    /// Transform a success payload, rewrapping the result in `Success`
    ///
    /// Failures short-circuit without invoking `f`.
    pub fn map<U, V, F>(self, f: F) -> Eventual<Outcome<U, E>>
    where
        F: FnOnce(T) -> V,
        V: Into<Eventual<U>>,
        U: 'static,
        E: 'static,
    {
        match self {
            Self::Success(value) => match f(value).into() {
                Eventual::Ready(mapped) => Eventual::Ready(Outcome::Success(mapped)),
                Eventual::Deferred(fut) => Eventual::Deferred(fut.map(Outcome::Success).boxed()),
            },
            Self::Failure(error) => Eventual::Ready(Outcome::Failure(error)),
        }
    }

    /// Transform a success payload, or fall back to `default` unwrapped
    pub fn map_or<U, V, F>(self, default: U, f: F) -> Eventual<U>
    where
        F: FnOnce(T) -> V,
        V: Into<Eventual<U>>,
    {
        match self {
            Self::Success(value) => f(value).into(),
            Self::Failure(_) => Eventual::Ready(default),
        }
    }

    /// Transform the error payload only, leaving successes untouched
    pub fn map_err<F2, V, F>(self, f: F) -> Eventual<Outcome<T, F2>>
    where
        F: FnOnce(E) -> V,
        V: Into<Eventual<F2>>,
        F2: 'static,
        T: 'static,
    {
        match self {
            Self::Success(value) => Eventual::Ready(Outcome::Success(value)),
            Self::Failure(error) => match f(error).into() {
                Eventual::Ready(mapped) => Eventual::Ready(Outcome::Failure(mapped)),
                Eventual::Deferred(fut) => Eventual::Deferred(fut.map(Outcome::Failure).boxed()),
            },
        }
    }
}

impl<T> Outcome<T, CapturedError> {
    /// Run `f`, capturing a panic as `Failure(CapturedError)`
    ///
    /// ```rust
    /// use matchbook_types::{CapturedError, Failure, Outcome, Success};
    ///
    /// assert_eq!(Outcome::safe(|| 5), Success(5));
    /// assert_eq!(
    ///     Outcome::safe(|| -> i32 { panic!("boom") }),
    ///     Failure(CapturedError::new("boom")),
    /// );
    /// ```
    pub fn safe<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let error = CapturedError::from_panic(payload);
                debug!(%error, "panic captured as failure");
                Self::Failure(error)
            }
        }
    }

    /// Await `future`, capturing a panic as `Failure(CapturedError)`
    pub fn safe_future<F>(future: F) -> Eventual<Self>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        Eventual::deferred(AssertUnwindSafe(future).catch_unwind().map(
            |caught| match caught {
                Ok(value) => Self::Success(value),
                Err(payload) => {
                    let error = CapturedError::from_panic(payload);
                    debug!(%error, "panic captured as failure");
                    Self::Failure(error)
                }
            },
        ))
    }

    /// Accept a value unless it fails self-comparison (NaN-like values do)
    pub fn non_nan(value: T) -> Self
    where
        T: PartialEq,
    {
        #[allow(clippy::eq_op)]
        let well_formed = value == value;
        if well_formed {
            Self::Success(value)
        } else {
            Self::Failure(CapturedError::new("Value is not equal to itself"))
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapse one level of success nesting
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_result().ok().into_iter()
    }
}
