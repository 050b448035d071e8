//! Branch patterns and the structural test that decides a match
//!
//! Matching is a pure recursive function over (pattern, subject) pairs and
//! produces no side effects. It is total: a shape the pattern cannot be
//! applied to (a missing field, a scalar where an object was expected) is
//! simply no match, never an error.

use std::fmt;

use tracing::trace;

use matchbook_types::{Maybe, Outcome};

use crate::subject::Matchable;

type GuardFn<S> = dyn Fn(&S) -> bool + Send + Sync;

/// What a branch tests the subject against
pub enum Pattern<S> {
    /// Matches any subject; doubles as the variant-only payload marker
    Any,
    /// Matches when the subject equals this literal
    Equals(S),
    /// Matches when the predicate returns true
    Guard(Box<GuardFn<S>>),
    /// Matches when every named field of the subject satisfies its
    /// sub-pattern; fields the pattern does not name are ignored
    Fields(Vec<(String, Pattern<S>)>),
}

impl<S: Matchable> Pattern<S> {
    /// Recursive structural test
    pub fn matches(&self, subject: &S) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Equals(literal) => literal.literal_eq(subject),
            Pattern::Guard(predicate) => predicate(subject),
            Pattern::Fields(fields) => {
                fields
                    .iter()
                    .all(|(key, nested)| match subject.project(key) {
                        Some(field) => nested.matches(field),
                        None => {
                            trace!(%key, "subject has no such field, no match");
                            false
                        }
                    })
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Pattern<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Any => write!(f, "Any"),
            Pattern::Equals(literal) => f.debug_tuple("Equals").field(literal).finish(),
            Pattern::Guard(_) => write!(f, "Guard(..)"),
            Pattern::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
        }
    }
}

/// The wildcard: matches any subject
pub fn any<S>() -> Pattern<S> {
    Pattern::Any
}

/// Match a subject equal to `literal`
pub fn eq<S>(literal: S) -> Pattern<S> {
    Pattern::Equals(literal)
}

/// Match subjects satisfying `predicate`
pub fn guard<S, F>(predicate: F) -> Pattern<S>
where
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    Pattern::Guard(Box::new(predicate))
}

/// Match object-shaped subjects field by field; unnamed fields are ignored
pub fn fields<S, K>(entries: Vec<(K, Pattern<S>)>) -> Pattern<S>
where
    K: Into<String>,
{
    Pattern::Fields(
        entries
            .into_iter()
            .map(|(key, pattern)| (key.into(), pattern))
            .collect(),
    )
}

/// Match a present container whose payload satisfies `payload`
///
/// `present(any())` matches the variant alone, ignoring the payload.
pub fn present<S>(payload: Pattern<S>) -> Pattern<Maybe<S>>
where
    S: Matchable + Send + Sync + 'static,
{
    guard(move |subject: &Maybe<S>| match subject {
        Maybe::Present(value) => payload.matches(value),
        Maybe::Absent => false,
    })
}

/// Match the absent container
pub fn absent<S>() -> Pattern<Maybe<S>>
where
    S: Matchable + Send + Sync + 'static,
{
    guard(|subject: &Maybe<S>| subject.is_absent())
}

/// Match a successful container whose payload satisfies `payload`
pub fn success<S, F>(payload: Pattern<S>) -> Pattern<Outcome<S, F>>
where
    S: Matchable + Send + Sync + 'static,
    F: Matchable + Send + Sync + 'static,
{
    guard(move |subject: &Outcome<S, F>| match subject {
        Outcome::Success(value) => payload.matches(value),
        Outcome::Failure(_) => false,
    })
}

/// Match a failed container whose error satisfies `payload`
pub fn failure<S, F>(payload: Pattern<F>) -> Pattern<Outcome<S, F>>
where
    S: Matchable + Send + Sync + 'static,
    F: Matchable + Send + Sync + 'static,
{
    guard(move |subject: &Outcome<S, F>| match subject {
        Outcome::Success(_) => false,
        Outcome::Failure(error) => payload.matches(error),
    })
}
