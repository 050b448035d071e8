//! Error types for the container algebra

use std::any::Any;

/// Errors that can occur when extracting a payload from the wrong variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnwrapError {
    #[error("Failed to unwrap Maybe (found Absent)")]
    FoundAbsent,

    #[error("Failed to unwrap Outcome (found Failure)")]
    FoundFailure,

    #[error("Failed to unwrap_err Outcome (found Success)")]
    FoundSuccess,

    #[error("{0}")]
    Expectation(String),
}

/// Result type alias for payload extraction
pub type UnwrapResult<T> = Result<T, UnwrapError>;

/// An error coerced from a captured panic payload
///
/// The `safe` constructors convert panics into values. String payloads keep
/// their text; any other payload type is replaced with a generic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CapturedError {
    message: String,
}

impl CapturedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Coerce a panic payload into an error, keeping string payloads readable
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        if let Some(text) = payload.downcast_ref::<&str>() {
            Self::new(*text)
        } else if let Some(text) = payload.downcast_ref::<String>() {
            Self::new(text.clone())
        } else {
            Self::new("Captured a non-string panic payload")
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_str_payload_keeps_text() {
        let error = CapturedError::from_panic(Box::new("boom"));
        assert_eq!(error.message(), "boom");
    }

    #[test]
    fn string_payload_keeps_text() {
        let error = CapturedError::from_panic(Box::new(String::from("formatted boom")));
        assert_eq!(error.message(), "formatted boom");
    }

    #[test]
    fn opaque_payload_gets_generic_message() {
        let error = CapturedError::from_panic(Box::new(42_u32));
        assert_eq!(error.message(), "Captured a non-string panic payload");
    }

    #[test]
    fn unwrap_error_messages() {
        assert_eq!(
            UnwrapError::FoundAbsent.to_string(),
            "Failed to unwrap Maybe (found Absent)"
        );
        assert_eq!(
            UnwrapError::Expectation("wanted a port".into()).to_string(),
            "wanted a port"
        );
    }
}
