//! Immediate-or-deferred values
//!
//! Every combinator in this crate accepts closures that return either a
//! plain value or pending work. `Eventual` is the sum of those two cases,
//! and `Into<Eventual<T>>` is the single normalization seam: plain values
//! convert via `From`, async work is wrapped with [`defer`]. Callers treat
//! both uniformly by awaiting the result.

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::future::{self, BoxFuture, FutureExt};

/// A value that is either available now or still being produced
pub enum Eventual<T> {
    /// The value is available immediately
    Ready(T),
    /// The value is pending behind a future
    Deferred(BoxFuture<'static, T>),
}

impl<T> Eventual<T> {
    pub fn ready(value: T) -> Self {
        Self::Ready(value)
    }

    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::Deferred(future.boxed())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Extract the value without waiting. Deferred values yield `None`.
    pub fn now(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// Apply `f` to the value, keeping a ready value ready
    pub fn map<U, F>(self, f: F) -> Eventual<U>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: 'static,
        T: 'static,
    {
        match self {
            Self::Ready(value) => Eventual::Ready(f(value)),
            Self::Deferred(fut) => Eventual::Deferred(fut.map(f).boxed()),
        }
    }
}

impl<T> From<T> for Eventual<T> {
    fn from(value: T) -> Self {
        Self::Ready(value)
    }
}

impl<T: Send + 'static> IntoFuture for Eventual<T> {
    type Output = T;
    type IntoFuture = BoxFuture<'static, T>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(value) => future::ready(value).boxed(),
            Self::Deferred(fut) => fut,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Eventual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Deferred(_) => f.debug_tuple("Deferred").finish(),
        }
    }
}

/// Wrap pending work so a combinator closure can hand back a future
pub fn defer<T, F>(future: F) -> Eventual<T>
where
    F: Future<Output = T> + Send + 'static,
{
    Eventual::deferred(future)
}
