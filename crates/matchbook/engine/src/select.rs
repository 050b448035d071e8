//! Branch selection
//!
//! Two dispatch shapes share one entry point. Ordered lists walk their
//! branches top to bottom and resolve the first pattern that claims the
//! subject. Variant-keyed arm sets route container subjects by variant
//! first and consult their own fallback only when the variant has no
//! dedicated arm. A miss inside a nested refinement list is a miss for
//! the whole selection, so recovery happens at the outermost call.

use matchbook_types::{Maybe, Outcome};
use tracing::debug;

use crate::branch::{Branch, MaybeArms, OutcomeArms, PayloadArm};
use crate::error::{NoMatchError, SelectResult};
use crate::subject::Matchable;

/// Walk the branch list in order and resolve the first match
pub(crate) fn dispatch_ordered<S, R>(subject: S, branches: Vec<Branch<S, R>>) -> Option<R>
where
    S: Matchable,
{
    for (index, branch) in branches.into_iter().enumerate() {
        if branch.matches(&subject) {
            debug!(index, "branch matched");
            return Some(branch.resolve(subject));
        }
    }
    None
}

/// Anything a subject can be dispatched against
///
/// Implemented by ordered branch lists and by the variant-keyed arm sets,
/// so [`select`] and [`select_or`] accept either shape.
pub trait BranchSet<S, R> {
    /// Dispatch the subject, resolving the branch that claims it
    fn dispatch(self, subject: S) -> Option<R>;
}

impl<S, R> BranchSet<S, R> for Vec<Branch<S, R>>
where
    S: Matchable,
{
    fn dispatch(self, subject: S) -> Option<R> {
        dispatch_ordered(subject, self)
    }
}

impl<T, R> BranchSet<Maybe<T>, R> for MaybeArms<T, R> {
    fn dispatch(self, subject: Maybe<T>) -> Option<R> {
        let MaybeArms {
            on_present,
            on_absent,
            catch_all,
        } = self;
        match subject {
            Maybe::Present(payload) => match on_present {
                Some(PayloadArm::Handler(handler)) => Some(handler(payload)),
                Some(PayloadArm::Nested(nested)) => nested(Maybe::Present(payload)),
                None => catch_all.map(|fallback| fallback()),
            },
            Maybe::Absent => match on_absent {
                Some(handler) => Some(handler()),
                None => catch_all.map(|fallback| fallback()),
            },
        }
    }
}

impl<T, E, R> BranchSet<Outcome<T, E>, R> for OutcomeArms<T, E, R> {
    fn dispatch(self, subject: Outcome<T, E>) -> Option<R> {
        let OutcomeArms {
            on_success,
            on_failure,
            catch_all,
        } = self;
        match subject {
            Outcome::Success(payload) => match on_success {
                Some(PayloadArm::Handler(handler)) => Some(handler(payload)),
                Some(PayloadArm::Nested(nested)) => nested(Outcome::Success(payload)),
                None => catch_all.map(|fallback| fallback()),
            },
            Outcome::Failure(error) => match on_failure {
                Some(PayloadArm::Handler(handler)) => Some(handler(error)),
                Some(PayloadArm::Nested(nested)) => nested(Outcome::Failure(error)),
                None => catch_all.map(|fallback| fallback()),
            },
        }
    }
}

/// Dispatch a subject against a branch set
///
/// Returns [`NoMatchError`] when no branch claims the subject.
pub fn select<S, R, B>(subject: S, branches: B) -> SelectResult<R>
where
    B: BranchSet<S, R>,
{
    branches.dispatch(subject).ok_or(NoMatchError)
}

/// Dispatch a subject against a branch set, falling back on a miss
pub fn select_or<S, R, B, F>(subject: S, branches: B, fallback: F) -> R
where
    B: BranchSet<S, R>,
    F: FnOnce() -> R,
{
    match branches.dispatch(subject) {
        Some(result) => result,
        None => {
            debug!("no branch matched, using fallback");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::otherwise;
    use crate::pattern::{eq, guard, present};

    #[test]
    fn test_ordered_first_match_wins() {
        let branches = vec![
            guard(|v: &i64| *v > 0).to("positive"),
            guard(|v: &i64| *v > 10).to("big"),
            otherwise(|_| "rest"),
        ];
        assert_eq!(select(25, branches), Ok("positive"));
    }

    #[test]
    fn test_keyed_arms_route_payloads() {
        let doubled = select(
            Maybe::Present(21),
            MaybeArms::new().present(|v: i32| v * 2).absent(|| 0),
        );
        assert_eq!(doubled, Ok(42));
    }

    #[test]
    fn test_missing_arm_falls_back_to_otherwise() {
        let label = select(
            Maybe::<i32>::Absent,
            MaybeArms::new().present(|_| "here").otherwise(|| "elsewhere"),
        );
        assert_eq!(label, Ok("elsewhere"));
    }

    #[test]
    fn test_no_match_is_an_error() {
        let result: SelectResult<&str> =
            select(Maybe::<i32>::Absent, MaybeArms::new().present(|_| "here"));
        assert_eq!(result, Err(NoMatchError));
    }

    #[test]
    fn test_select_or_recovers_from_a_miss() {
        let label = select_or(
            Outcome::<i32, String>::Failure("boom".into()),
            OutcomeArms::new().success(|v| format!("got {v}")),
            || "recovered".to_string(),
        );
        assert_eq!(label, "recovered");
    }

    #[test]
    fn test_nested_miss_skips_the_sibling_catch_all() {
        let result: SelectResult<&str> = select(
            Maybe::Present(3),
            MaybeArms::new()
                .present_where(vec![present(eq(10)).to("ten")])
                .otherwise(|| "caught"),
        );
        assert_eq!(result, Err(NoMatchError));
    }
}
