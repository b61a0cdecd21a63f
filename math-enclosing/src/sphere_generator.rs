//! Support ball generator for 3D Euclidean space

use crate::{EnclosingBall, EnclosingError, Result, SupportBallGenerator};
use math_euclidean::{Precision, Vector3D};

/// Maximum support size in 3D
const MAX_SUPPORT: usize = 4;

/// Computes spheres through 1 to 4 support points.
///
/// Three points give the sphere whose great circle is the circumscribed
/// circle of the triangle; four points give the circumscribed sphere of the
/// tetrahedron.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereGenerator {
    precision: Precision,
}

impl SphereGenerator {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    fn circumscribed_circle(&self, a: Vector3D, b: Vector3D, c: Vector3D) -> Result<EnclosingBall<Vector3D>> {
        let u = b - a;
        let v = c - a;
        let w = u.cross(&v);
        let w_norm = w.norm();

        let longest = u.norm().max(v.norm()).max(b.distance(&c));
        if longest == 0.0 || self.precision.eq_zero(w_norm / longest) {
            return Err(EnclosingError::degenerate(format!(
                "support points {}, {} and {} are collinear",
                a, b, c
            )));
        }

        // center lies in the plane of the triangle
        let offset = (v * u.norm_sq() - u * v.norm_sq()).cross(&w) / (2.0 * w.norm_sq());
        let center = a + offset;

        let radius = [a, b, c]
            .iter()
            .map(|p| center.distance(p))
            .fold(0.0, f64::max);

        Ok(EnclosingBall::new(center, radius, [a, b, c]))
    }

    fn circumscribed_sphere(
        &self,
        a: Vector3D,
        b: Vector3D,
        c: Vector3D,
        d: Vector3D,
    ) -> Result<EnclosingBall<Vector3D>> {
        let u1 = b - a;
        let u2 = c - a;
        let u3 = d - a;

        let c23 = u2.cross(&u3);
        let c31 = u3.cross(&u1);
        let c12 = u1.cross(&u2);
        let det = u1.dot(&c23);

        // smallest tetrahedron height: |det| over the largest doubled face area
        let largest_face = c23
            .norm()
            .max(c31.norm())
            .max(c12.norm())
            .max((c - b).cross(&(d - b)).norm());
        if largest_face == 0.0 || self.precision.eq_zero(det.abs() / largest_face) {
            return Err(EnclosingError::degenerate(format!(
                "support points {}, {}, {} and {} are coplanar",
                a, b, c, d
            )));
        }

        let offset = (c23 * u1.norm_sq() + c31 * u2.norm_sq() + c12 * u3.norm_sq()) / (2.0 * det);
        let center = a + offset;

        let radius = [a, b, c, d]
            .iter()
            .map(|p| center.distance(p))
            .fold(0.0, f64::max);

        Ok(EnclosingBall::new(center, radius, [a, b, c, d]))
    }
}

impl SupportBallGenerator<Vector3D> for SphereGenerator {
    fn ball_on_support(&self, support: &[Vector3D]) -> Result<EnclosingBall<Vector3D>> {
        match *support {
            [a] => Ok(EnclosingBall::new(a, 0.0, [a])),
            [a, b] => Ok(EnclosingBall::new(a.midpoint(&b), 0.5 * a.distance(&b), [a, b])),
            [a, b, c] => self.circumscribed_circle(a, b, c),
            [a, b, c, d] => self.circumscribed_sphere(a, b, c, d),
            _ => Err(EnclosingError::InvalidSupportSize {
                size: support.len(),
                max: MAX_SUPPORT,
            }),
        }
    }
}
