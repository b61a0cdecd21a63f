//! Enclosing ball value type

use math_euclidean::{EuclideanPoint, Precision};
use serde::Serialize;
use std::fmt;

/// A ball (disk in 2D, sphere in 3D) together with the support points that
/// define it.
///
/// Balls returned by generators and by the encloser always have a
/// non-negative radius and every support point lies on their boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnclosingBall<P> {
    center: P,
    radius: f64,
    support: Vec<P>,
}

impl<P: EuclideanPoint> EnclosingBall<P> {
    /// Create a ball. Intended for [`crate::SupportBallGenerator`] implementations.
    pub fn new(center: P, radius: f64, support: impl Into<Vec<P>>) -> Self {
        debug_assert!(radius >= 0.0 || radius.is_nan(), "negative radius {radius}");
        Self {
            center,
            radius,
            support: support.into(),
        }
    }

    pub fn center(&self) -> &P {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Points lying on the boundary that define this ball
    pub fn support(&self) -> &[P] {
        &self.support
    }

    pub fn support_size(&self) -> usize {
        self.support.len()
    }

    /// True if `point` is inside the ball or on its boundary within `precision`.
    pub fn contains(&self, point: &P, precision: &Precision) -> bool {
        precision.lte(point.distance(&self.center), self.radius)
    }

    /// Exact containment test, without tolerance.
    pub fn contains_exact(&self, point: &P) -> bool {
        point.distance(&self.center) <= self.radius
    }

    /// True if `point` lies on the boundary within `precision`.
    pub fn is_on_boundary(&self, point: &P, precision: &Precision) -> bool {
        precision.eq(point.distance(&self.center), self.radius)
    }

    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl<P: fmt::Display> fmt::Display for EnclosingBall<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EnclosingBall[center= {}, radius= {}, support= {}]",
            self.center,
            self.radius,
            self.support.len()
        )
    }
}
