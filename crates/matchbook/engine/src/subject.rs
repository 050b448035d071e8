//! The capability subjects need before the engine can test them
//!
//! Scalars only support literal comparison. Object-shaped subjects
//! (`serde_json::Value`) additionally support field projection, which is
//! what recursive field patterns descend through. Containers compare
//! variant-first, then payload.

use matchbook_types::{Maybe, Outcome};

/// A value the engine can test patterns against
pub trait Matchable {
    /// Literal equality between a pattern payload and a subject
    fn literal_eq(&self, other: &Self) -> bool;

    /// Project a named field for structural descent; scalars have none
    fn project(&self, _key: &str) -> Option<&Self> {
        None
    }
}

macro_rules! impl_matchable_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Matchable for $ty {
                fn literal_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_matchable_scalar!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    &'static str, ()
);

impl Matchable for serde_json::Value {
    fn literal_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn project(&self, key: &str) -> Option<&Self> {
        self.get(key)
    }
}

impl<S: Matchable> Matchable for Maybe<S> {
    fn literal_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => a.literal_eq(b),
            (Maybe::Absent, Maybe::Absent) => true,
            _ => false,
        }
    }
}

impl<S: Matchable, F: Matchable> Matchable for Outcome<S, F> {
    fn literal_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => a.literal_eq(b),
            (Outcome::Failure(a), Outcome::Failure(b)) => a.literal_eq(b),
            _ => false,
        }
    }
}
