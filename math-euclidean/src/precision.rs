//! Tolerance-aware floating point comparisons.
//!
//! Every geometric decision (containment, degeneracy, coincidence) goes
//! through a single [`Precision`] value so that callers and algorithms agree
//! on what "equal" means.

use crate::{EuclideanError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default absolute epsilon used by [`Precision::default`].
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Absolute-epsilon equivalence relation on `f64` values.
///
/// Two values are equivalent when they are exactly equal (this covers equal
/// infinities) or when their difference does not exceed `epsilon`. NaN is
/// never equivalent to anything, itself included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Precision {
    epsilon: f64,
}

impl Precision {
    /// Create a precision context with the given absolute epsilon.
    ///
    /// Fails unless `epsilon` is finite and strictly positive. Exact
    /// comparisons are not supported: `epsilon` must exceed the rounding
    /// error of distances at the scale of the data, so coordinates around
    /// `1e6` need an epsilon well above `1e-10`.
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(EuclideanError::InvalidEpsilon { epsilon });
        }
        Ok(Self { epsilon })
    }

    /// The absolute epsilon of this context.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Compare two values under this tolerance.
    ///
    /// Returns `Equal` for equivalent values, `Less` when `a` is strictly
    /// below `b` and `Greater` otherwise (NaN on either side included).
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        if self.eq(a, b) {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    #[inline]
    pub fn eq(&self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() <= self.epsilon
    }

    #[inline]
    pub fn eq_zero(&self, a: f64) -> bool {
        self.eq(a, 0.0)
    }

    #[inline]
    pub fn lt(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    #[inline]
    pub fn lte(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    #[inline]
    pub fn gt(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    #[inline]
    pub fn gte(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// Sign of `a` under this tolerance: `0.0` for values equivalent to zero,
    /// `1.0` or `-1.0` otherwise. NaN is returned unchanged.
    pub fn sign(&self, a: f64) -> f64 {
        if a.is_nan() {
            a
        } else if self.eq_zero(a) {
            0.0
        } else {
            a.signum()
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl TryFrom<f64> for Precision {
    type Error = EuclideanError;

    fn try_from(epsilon: f64) -> Result<Self> {
        Self::new(epsilon)
    }
}

impl From<Precision> for f64 {
    fn from(precision: Precision) -> Self {
        precision.epsilon
    }
}
