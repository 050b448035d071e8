//! Branches and variant-keyed arm sets
//!
//! A branch pairs a pattern with an action: either a literal result or a
//! handler receiving the matched subject. Arm sets are the variant-keyed
//! alternative for container subjects; payload arms receive the payload
//! itself, and a nested branch list re-enters ordered matching on the
//! whole container for multi-level refinement.

use matchbook_types::{Maybe, Outcome};

use crate::pattern::{any, Pattern};
use crate::select::dispatch_ordered;
use crate::subject::Matchable;

type Handler<S, R> = Box<dyn FnOnce(S) -> R + Send>;
type Thunk<R> = Box<dyn FnOnce() -> R + Send>;

pub(crate) enum Action<S, R> {
    Literal(R),
    Handler(Handler<S, R>),
}

/// A pattern paired with the action to take when it matches
pub struct Branch<S, R> {
    pattern: Pattern<S>,
    action: Action<S, R>,
}

impl<S, R> Branch<S, R> {
    pub(crate) fn matches(&self, subject: &S) -> bool
    where
        S: Matchable,
    {
        self.pattern.matches(subject)
    }

    pub(crate) fn resolve(self, subject: S) -> R {
        match self.action {
            Action::Literal(value) => value,
            Action::Handler(handler) => handler(subject),
        }
    }
}

impl<S> Pattern<S> {
    /// Pair this pattern with a literal result
    pub fn to<R>(self, value: R) -> Branch<S, R> {
        Branch {
            pattern: self,
            action: Action::Literal(value),
        }
    }

    /// Pair this pattern with a handler receiving the matched subject
    pub fn then<R, F>(self, handler: F) -> Branch<S, R>
    where
        F: FnOnce(S) -> R + Send + 'static,
    {
        Branch {
            pattern: self,
            action: Action::Handler(Box::new(handler)),
        }
    }
}

/// The trailing default: matches anything, handler receives the subject
pub fn otherwise<S, R, F>(handler: F) -> Branch<S, R>
where
    F: FnOnce(S) -> R + Send + 'static,
{
    any().then(handler)
}

/// A variant arm: a payload handler, or a nested ordered refinement
pub(crate) enum PayloadArm<P, C, R> {
    Handler(Box<dyn FnOnce(P) -> R + Send>),
    Nested(Box<dyn FnOnce(C) -> Option<R> + Send>),
}

/// Variant-keyed arms for `Maybe` subjects
///
/// The arm matching the subject's variant runs with the payload; `absent`
/// and `otherwise` arms take no arguments. A variant with no dedicated arm
/// falls through to `otherwise`, and with no `otherwise` the whole set
/// reports no match.
pub struct MaybeArms<T, R> {
    pub(crate) on_present: Option<PayloadArm<T, Maybe<T>, R>>,
    pub(crate) on_absent: Option<Thunk<R>>,
    pub(crate) catch_all: Option<Thunk<R>>,
}

impl<T, R> MaybeArms<T, R> {
    pub fn new() -> Self {
        Self {
            on_present: None,
            on_absent: None,
            catch_all: None,
        }
    }

    /// Handle a present payload
    pub fn present<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(T) -> R + Send + 'static,
    {
        self.on_present = Some(PayloadArm::Handler(Box::new(handler)));
        self
    }

    /// Refine present containers against nested ordered branches
    ///
    /// The nested list sees the whole container; a miss inside it
    /// propagates as no-match to the outermost selection.
    pub fn present_where(mut self, branches: Vec<Branch<Maybe<T>, R>>) -> Self
    where
        T: Matchable + Send + 'static,
        R: Send + 'static,
    {
        self.on_present = Some(PayloadArm::Nested(Box::new(move |container| {
            dispatch_ordered(container, branches)
        })));
        self
    }

    /// Handle the absent variant
    pub fn absent<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
    {
        self.on_absent = Some(Box::new(handler));
        self
    }

    /// Handle any variant no dedicated arm claimed
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
    {
        self.catch_all = Some(Box::new(handler));
        self
    }
}

impl<T, R> Default for MaybeArms<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Variant-keyed arms for `Outcome` subjects
pub struct OutcomeArms<T, E, R> {
    pub(crate) on_success: Option<PayloadArm<T, Outcome<T, E>, R>>,
    pub(crate) on_failure: Option<PayloadArm<E, Outcome<T, E>, R>>,
    pub(crate) catch_all: Option<Thunk<R>>,
}

impl<T, E, R> OutcomeArms<T, E, R> {
    pub fn new() -> Self {
        Self {
            on_success: None,
            on_failure: None,
            catch_all: None,
        }
    }

    /// Handle a success payload
    pub fn success<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(T) -> R + Send + 'static,
    {
        self.on_success = Some(PayloadArm::Handler(Box::new(handler)));
        self
    }

    /// Refine successful containers against nested ordered branches
    pub fn success_where(mut self, branches: Vec<Branch<Outcome<T, E>, R>>) -> Self
    where
        T: Matchable + Send + 'static,
        E: Matchable + Send + 'static,
        R: Send + 'static,
    {
        self.on_success = Some(PayloadArm::Nested(Box::new(move |container| {
            dispatch_ordered(container, branches)
        })));
        self
    }

    /// Handle a failure payload
    pub fn failure<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(E) -> R + Send + 'static,
    {
        self.on_failure = Some(PayloadArm::Handler(Box::new(handler)));
        self
    }

    /// Refine failed containers against nested ordered branches
    pub fn failure_where(mut self, branches: Vec<Branch<Outcome<T, E>, R>>) -> Self
    where
        T: Matchable + Send + 'static,
        E: Matchable + Send + 'static,
        R: Send + 'static,
    {
        self.on_failure = Some(PayloadArm::Nested(Box::new(move |container| {
            dispatch_ordered(container, branches)
        })));
        self
    }

    /// Handle any variant no dedicated arm claimed
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
    {
        self.catch_all = Some(Box::new(handler));
        self
    }
}

impl<T, E, R> Default for OutcomeArms<T, E, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{eq, guard};

    #[test]
    fn literal_branches_ignore_the_subject() {
        let branch = eq(1_i64).to("one");
        assert!(branch.matches(&1));
        assert_eq!(branch.resolve(1), "one");
    }

    #[test]
    fn handler_branches_receive_the_subject() {
        let branch = guard(|v: &i64| *v > 0).then(|v| v * 10);
        assert!(branch.matches(&4));
        assert!(!branch.matches(&-4));
        assert_eq!(branch.resolve(4), 40);
    }

    #[test]
    fn otherwise_matches_anything() {
        let branch = otherwise(|v: i64| v + 1);
        assert!(branch.matches(&-99));
        assert_eq!(branch.resolve(-99), -98);
    }
}
