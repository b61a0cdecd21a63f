//! Error types for enclosing ball computations.
//!
//! Every failure is reported synchronously to the caller of `enclose`; the
//! engine never retries, perturbs points or returns a partial result.

use math_euclidean::EuclideanError;
use thiserror::Error;

/// Errors that can occur while computing an enclosing ball.
#[derive(Debug, Error)]
pub enum EnclosingError {
    /// No points were given.
    #[error("unable to generate enclosing ball: no points given")]
    EmptyInput,

    /// The support points do not define a unique ball (coincident, collinear
    /// or coplanar within tolerance).
    #[error("degenerate support configuration: {reason}")]
    DegenerateConfiguration {
        /// Which degeneracy was detected
        reason: String,
    },

    /// A generator was asked for a ball on an unsupported number of points.
    #[error("invalid support size: {size} (must be in [1, {max}])")]
    InvalidSupportSize {
        /// Number of points given
        size: usize,
        /// Maximum support size for the dimension
        max: usize,
    },

    /// An input point has a NaN or infinite coordinate.
    #[error("point at index {index} has non-finite coordinates")]
    NonFinitePoint {
        /// Index of the point in the caller's input order
        index: usize,
    },

    /// A pivoting step produced a smaller ball than the previous one.
    #[error("enclosing ball radius decreased from {previous} to {current}")]
    RadiusDecreased {
        /// Radius before the pivot
        previous: f64,
        /// Radius after the pivot
        current: f64,
    },

    /// The pivoting loop did not converge.
    #[error("maximum iterations exceeded ({iterations})")]
    MaxIterationsExceeded {
        /// Number of pivot steps performed
        iterations: usize,
    },

    /// Encloser configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("precision error: {0}")]
    Precision(#[from] EuclideanError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for enclosing ball operations.
pub type Result<T> = std::result::Result<T, EnclosingError>;

impl EnclosingError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        EnclosingError::DegenerateConfiguration {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error is caused by the points handed to the
    /// encloser or generator.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EnclosingError::EmptyInput
                | EnclosingError::NonFinitePoint { .. }
                | EnclosingError::InvalidSupportSize { .. }
        )
    }

    /// Returns `true` if the error signals an ill-conditioned point set.
    pub fn is_numerical_error(&self) -> bool {
        matches!(
            self,
            EnclosingError::DegenerateConfiguration { .. }
                | EnclosingError::RadiusDecreased { .. }
                | EnclosingError::MaxIterationsExceeded { .. }
        )
    }

    /// Returns `true` if the error comes from configuration loading or validation.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EnclosingError::InvalidConfig(_)
                | EnclosingError::Precision(_)
                | EnclosingError::Io(_)
                | EnclosingError::Json(_)
        )
    }
}
