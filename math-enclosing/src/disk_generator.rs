//! Support ball generator for the Euclidean plane

use crate::{EnclosingBall, EnclosingError, Result, SupportBallGenerator};
use math_euclidean::{Precision, Vector2D};

/// Maximum support size in 2D
const MAX_SUPPORT: usize = 3;

/// Computes disks through 1, 2 or 3 support points.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskGenerator {
    precision: Precision,
}

impl DiskGenerator {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    /// Circumscribed disk of a triangle
    fn circumscribed(&self, a: Vector2D, b: Vector2D, c: Vector2D) -> Result<EnclosingBall<Vector2D>> {
        let u = b - a;
        let v = c - a;
        let cross = u.signed_area(&v);

        // smallest triangle height: twice the area over the longest edge
        let longest = u.norm().max(v.norm()).max(b.distance(&c));
        if longest == 0.0 || self.precision.eq_zero(cross.abs() / longest) {
            return Err(EnclosingError::degenerate(format!(
                "support points {}, {} and {} are collinear",
                a, b, c
            )));
        }

        let u_sq = u.norm_sq();
        let v_sq = v.norm_sq();
        let d = 2.0 * cross;
        let offset = Vector2D::new((v.y() * u_sq - u.y() * v_sq) / d, (u.x() * v_sq - v.x() * u_sq) / d);
        let center = a + offset;

        let radius = center
            .distance(&a)
            .max(center.distance(&b))
            .max(center.distance(&c));

        Ok(EnclosingBall::new(center, radius, [a, b, c]))
    }
}

impl SupportBallGenerator<Vector2D> for DiskGenerator {
    fn ball_on_support(&self, support: &[Vector2D]) -> Result<EnclosingBall<Vector2D>> {
        match *support {
            [a] => Ok(EnclosingBall::new(a, 0.0, [a])),
            [a, b] => Ok(EnclosingBall::new(a.midpoint(&b), 0.5 * a.distance(&b), [a, b])),
            [a, b, c] => self.circumscribed(a, b, c),
            _ => Err(EnclosingError::InvalidSupportSize {
                size: support.len(),
                max: MAX_SUPPORT,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> DiskGenerator {
        DiskGenerator::new(Precision::new(1e-10).unwrap())
    }

    #[test]
    fn test_support_0_point() {
        let err = generator().ball_on_support(&[]).unwrap_err();
        assert!(matches!(err, EnclosingError::InvalidSupportSize { size: 0, max: 3 }));
    }

    #[test]
    fn test_support_1_point() {
        let p = Vector2D::new(1.0, 2.0);
        let disk = generator().ball_on_support(&[p]).unwrap();

        assert_eq!(disk.radius(), 0.0);
        assert_eq!(*disk.center(), p);
        assert_eq!(disk.support(), &[p]);
        assert!(disk.contains_exact(&p));
        assert!(!disk.contains_exact(&Vector2D::new(1.1, 2.0)));
    }

    #[test]
    fn test_support_2_points() {
        let a = Vector2D::new(1.0, 0.0);
        let b = Vector2D::new(3.0, 0.0);
        let disk = generator().ball_on_support(&[a, b]).unwrap();

        assert!((disk.radius() - 1.0).abs() < 1e-15);
        assert_eq!(*disk.center(), Vector2D::new(2.0, 0.0));
        assert_eq!(disk.support_size(), 2);
        assert!(disk.contains_exact(&Vector2D::new(2.0, 0.9)));
        assert!(!disk.contains_exact(&Vector2D::new(2.0, 1.1)));
    }

    #[test]
    fn test_support_3_points() {
        let a = Vector2D::new(1.0, 0.0);
        let b = Vector2D::new(3.0, 0.0);
        let c = Vector2D::new(2.0, 2.0);
        let disk = generator().ball_on_support(&[a, b, c]).unwrap();

        assert!((disk.radius() - 1.25).abs() < 1e-12);
        assert!(disk.center().eq_with(&Vector2D::new(2.0, 0.75), &Precision::new(1e-12).unwrap()));
        assert_eq!(disk.support_size(), 3);
        for p in [a, b, c] {
            assert!(disk.is_on_boundary(&p, generator().precision()));
        }
    }

    #[test]
    fn test_right_triangle_hypotenuse_is_diameter() {
        let disk = generator()
            .ball_on_support(&[Vector2D::new(0.0, 0.0), Vector2D::new(4.0, 0.0), Vector2D::new(0.0, 3.0)])
            .unwrap();
        assert!((disk.radius() - 2.5).abs() < 1e-12);
        assert!(disk.center().eq_with(&Vector2D::new(2.0, 1.5), &Precision::new(1e-12).unwrap()));
    }

    #[test]
    fn test_collinear_points_are_degenerate() {
        let err = generator()
            .ball_on_support(&[Vector2D::new(0.0, 0.0), Vector2D::new(1.0, 1.0), Vector2D::new(3.0, 3.0)])
            .unwrap_err();
        assert!(matches!(err, EnclosingError::DegenerateConfiguration { .. }));
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        let p = Vector2D::new(2.0, -1.0);
        let err = generator().ball_on_support(&[p, p, Vector2D::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, EnclosingError::DegenerateConfiguration { .. }));

        let err = generator().ball_on_support(&[p, p, p]).unwrap_err();
        assert!(matches!(err, EnclosingError::DegenerateConfiguration { .. }));
    }

    #[test]
    fn test_nearly_collinear_within_tolerance() {
        let loose = DiskGenerator::new(Precision::new(1e-3).unwrap());
        let support = [Vector2D::new(0.0, 0.0), Vector2D::new(1.0, 1e-5), Vector2D::new(2.0, 0.0)];

        assert!(loose.ball_on_support(&support).is_err());
        assert!(generator().ball_on_support(&support).is_ok());
    }

    #[test]
    fn test_too_many_points() {
        let p = Vector2D::ZERO;
        let err = generator().ball_on_support(&[p, p, p, p]).unwrap_err();
        assert!(matches!(err, EnclosingError::InvalidSupportSize { size: 4, max: 3 }));
    }
}
