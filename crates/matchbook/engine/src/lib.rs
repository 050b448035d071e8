//! Structural pattern matching over values and containers
//!
//! The engine dispatches a subject against a branch set. Ordered lists
//! pair [`Pattern`]s with actions and resolve the first match; the
//! variant-keyed [`MaybeArms`] and [`OutcomeArms`] route container
//! subjects by variant and hand the payload to the matching arm.
//! Patterns test structure: literals compare whole values, guards run
//! predicates, and field patterns recurse into keyed subjects such as
//! `serde_json::Value` objects.
//!
//! # Usage
//!
//! ```rust
//! use matchbook_engine::{guard, otherwise, select, OutcomeArms};
//! use matchbook_types::Outcome;
//!
//! // Ordered: first matching branch wins.
//! let branches = vec![
//!     guard(|n: &i64| n % 2 == 0).then(|n| format!("{n} is even")),
//!     otherwise(|n| format!("{n} is odd")),
//! ];
//! assert_eq!(select(7, branches).as_deref(), Ok("7 is odd"));
//!
//! // Variant-keyed: arms receive the payload.
//! let verdict = select(
//!     Outcome::<i32, String>::Success(5),
//!     OutcomeArms::new().success(|n| n * 2).failure(|_| -1),
//! );
//! assert_eq!(verdict, Ok(10));
//! ```

#![deny(unsafe_code)]

mod branch;
mod error;
mod pattern;
mod select;
mod subject;

pub use branch::{otherwise, Branch, MaybeArms, OutcomeArms};
pub use error::{NoMatchError, SelectResult};
pub use pattern::{absent, any, eq, failure, fields, guard, present, success, Pattern};
pub use select::{select, select_or, BranchSet};
pub use subject::Matchable;
