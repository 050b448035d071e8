//! Container algebra for matchbook
//!
//! Two algebraic containers with a shared vocabulary of transformations:
//!
//! - [`Maybe<T>`]: a value that is `Present` or `Absent`, with no error
//!   channel. Failures inside `safe` collapse to `Absent`.
//! - [`Outcome<T, E>`]: a computation that ended in `Success` or `Failure`,
//!   carrying an error payload on the negative branch. Failures inside
//!   `safe` are kept as [`CapturedError`] values.
//!
//! Combinator closures may be synchronous or asynchronous; results
//! normalize through [`Eventual`], the explicit immediate-or-deferred sum
//! type, so callers await the result either way.
//!
//! # Usage
//!
//! ```rust
//! use futures::executor::block_on;
//! use matchbook_types::{defer, Absent, Maybe, Present};
//!
//! let config: Maybe<&str> = Present("reader.toml");
//!
//! // Synchronous closure: the result is ready immediately.
//! let label = config.map(|path| format!("loaded {path}"));
//! assert!(label.is_ready());
//!
//! // Asynchronous closure: same call shape, awaited the same way.
//! let fetched = Present(7).map(|v| defer(async move { v * 6 }));
//! assert_eq!(block_on(async { fetched.await }), Present(42));
//! assert_eq!(block_on(async { Absent.map(|v: i32| v).await }), Absent);
//! ```

#![deny(unsafe_code)]

mod error;
mod eventual;
mod maybe;
mod outcome;

pub use error::{CapturedError, UnwrapError, UnwrapResult};
pub use eventual::{defer, Eventual};
pub use maybe::Maybe;
pub use maybe::Maybe::{Absent, Present};
pub use outcome::Outcome;
pub use outcome::Outcome::{Failure, Success};
