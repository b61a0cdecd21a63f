//! Error types for Euclidean value types.

use thiserror::Error;

/// Errors raised while building Euclidean value types.
#[derive(Debug, Error)]
pub enum EuclideanError {
    /// A precision context was requested with an unusable epsilon.
    #[error("invalid epsilon: {epsilon} (must be finite and > 0)")]
    InvalidEpsilon {
        /// The rejected epsilon
        epsilon: f64,
    },

    /// A textual coordinate representation could not be parsed.
    #[error("failed to parse '{input}': {reason}")]
    Parse {
        /// The input string
        input: String,
        /// What went wrong
        reason: String,
    },
}

/// A specialized `Result` type for Euclidean operations.
pub type Result<T> = std::result::Result<T, EuclideanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EuclideanError::InvalidEpsilon { epsilon: -1.0 };
        assert_eq!(err.to_string(), "invalid epsilon: -1 (must be finite and > 0)");

        let err = EuclideanError::Parse {
            input: "(1".to_string(),
            reason: "missing ')'".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse '(1': missing ')'");
    }
}
