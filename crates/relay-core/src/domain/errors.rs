//! Errors raised while dispatching tasks.

use std::fmt;

use thiserror::Error;

/// Which dispatch argument failed shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Positional arguments; must be an array.
    Args,
    /// Keyword arguments; must be an object.
    Kwargs,
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentKind::Args => f.write_str("args"),
            ArgumentKind::Kwargs => f.write_str("kwargs"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    /// Caller input had the wrong JSON shape. Raised before anything is enqueued.
    #[error("invalid argument shape: {argument} must be {expected}, got {found}")]
    InvalidArgumentShape {
        argument: ArgumentKind,
        expected: &'static str,
        found: &'static str,
    },

    /// The publisher refused or failed to enqueue the job.
    #[error("publish failed: {0}")]
    Publish(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RelayError {
    pub fn publish(msg: impl Into<String>) -> Self {
        Self::Publish(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_invalid_argument_shape(&self) -> bool {
        matches!(self, Self::InvalidArgumentShape { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_error_message_names_the_argument() {
        let err = RelayError::InvalidArgumentShape {
            argument: ArgumentKind::Kwargs,
            expected: "an object",
            found: "an array",
        };
        assert_eq!(
            err.to_string(),
            "invalid argument shape: kwargs must be an object, got an array"
        );
        assert!(err.is_invalid_argument_shape());
        assert!(!RelayError::publish("broker down").is_invalid_argument_shape());
    }
}
