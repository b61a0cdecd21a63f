//! Point capability shared by dimension-generic algorithms.

use std::fmt::Debug;

/// A point in a Euclidean space of fixed dimension.
///
/// Generic geometry algorithms only need a dimension, a metric and a way to
/// reject non-finite input; everything else stays with the concrete type.
pub trait EuclideanPoint: Copy + Debug + PartialEq + Send + Sync {
    /// Dimension of the space the point lives in.
    const DIMENSION: usize;

    /// Euclidean distance to `other`.
    fn distance(&self, other: &Self) -> f64;

    /// True if any coordinate is NaN.
    fn is_nan(&self) -> bool;

    /// True if all coordinates are finite.
    fn is_finite(&self) -> bool;
}
