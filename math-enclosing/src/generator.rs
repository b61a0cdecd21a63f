//! Support ball generator capability.

use crate::{EnclosingBall, Result};
use math_euclidean::EuclideanPoint;

/// Builds the smallest ball having a small set of points on its boundary.
///
/// For a space of dimension `D` the support holds between 1 and `D + 1`
/// points:
///
/// - 1 point: zero radius ball centered on it
/// - 2 points: the two points are diameter endpoints
/// - up to `D + 1` points: the circumscribed ball, centered in the affine
///   hull of the points
///
/// Implementations must return
/// [`EnclosingError::DegenerateConfiguration`](crate::EnclosingError::DegenerateConfiguration)
/// when the points do not define a unique ball and
/// [`EnclosingError::InvalidSupportSize`](crate::EnclosingError::InvalidSupportSize)
/// for an empty or oversized support. They must not approximate.
pub trait SupportBallGenerator<P: EuclideanPoint> {
    /// Create the ball defined by `support`; the returned ball records the
    /// support points in the given order.
    fn ball_on_support(&self, support: &[P]) -> Result<EnclosingBall<P>>;
}

impl<P: EuclideanPoint, G: SupportBallGenerator<P> + ?Sized> SupportBallGenerator<P> for &G {
    fn ball_on_support(&self, support: &[P]) -> Result<EnclosingBall<P>> {
        (**self).ball_on_support(support)
    }
}
