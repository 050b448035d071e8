//! Selection errors

use thiserror::Error;

/// No branch claimed the subject and no fallback was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No matching branch found")]
pub struct NoMatchError;

/// Convenience alias for selection results
pub type SelectResult<T> = Result<T, NoMatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_error_message() {
        assert_eq!(NoMatchError.to_string(), "No matching branch found");
    }
}
