//! Three dimensional Euclidean vectors and points

use crate::{EuclideanError, EuclideanPoint, Precision, hash_f64, parse_tuple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// A 3D vector, also used to represent points.
///
/// Any NaN coordinate makes the whole vector NaN: all NaN vectors are equal
/// to each other (and to [`Vector3D::NAN`]) and never equal to a regular one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vector3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3D {
    /// The origin
    pub const ZERO: Vector3D = Vector3D::new(0.0, 0.0, 0.0);

    /// Canonical NaN vector
    pub const NAN: Vector3D = Vector3D::new(f64::NAN, f64::NAN, f64::NAN);

    pub const PLUS_X: Vector3D = Vector3D::new(1.0, 0.0, 0.0);
    pub const PLUS_Y: Vector3D = Vector3D::new(0.0, 1.0, 0.0);
    pub const PLUS_Z: Vector3D = Vector3D::new(0.0, 0.0, 1.0);

    /// Create a new vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Coordinates as an array
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector
    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        Vector3D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared Euclidean norm
    pub fn norm_sq(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vector3D) -> f64 {
        (*self - *other).norm()
    }

    /// Squared distance to another point
    pub fn distance_sq(&self, other: &Vector3D) -> f64 {
        (*self - *other).norm_sq()
    }

    /// Unit vector with the same direction, or `None` for zero, NaN or
    /// infinite vectors.
    pub fn normalize(&self) -> Option<Vector3D> {
        let norm = self.norm();
        if norm > 0.0 && norm.is_finite() {
            Some(*self / norm)
        } else {
            None
        }
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    pub fn lerp(&self, other: &Vector3D, t: f64) -> Vector3D {
        *self * (1.0 - t) + *other * t
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(&self, other: &Vector3D) -> Vector3D {
        self.lerp(other, 0.5)
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// True if no coordinate is NaN and at least one is infinite
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.x.is_infinite() || self.y.is_infinite() || self.z.is_infinite())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Coordinate-wise equality under the given precision
    pub fn eq_with(&self, other: &Vector3D, precision: &Precision) -> bool {
        precision.eq(self.x, other.x) && precision.eq(self.y, other.y) && precision.eq(self.z, other.z)
    }
}

impl EuclideanPoint for Vector3D {
    const DIMENSION: usize = 3;

    fn distance(&self, other: &Self) -> f64 {
        Vector3D::distance(self, other)
    }

    fn is_nan(&self) -> bool {
        Vector3D::is_nan(self)
    }

    fn is_finite(&self) -> bool {
        Vector3D::is_finite(self)
    }
}

impl PartialEq for Vector3D {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return self.is_nan() && other.is_nan();
        }
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Eq for Vector3D {}

impl Hash for Vector3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_nan() {
            state.write_u8(0x7f);
            return;
        }
        hash_f64(self.x, state);
        hash_f64(self.y, state);
        hash_f64(self.z, state);
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, s: f64) -> Vector3D {
        Vector3D::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, s: f64) -> Vector3D {
        Vector3D::new(self.x / s, self.y / s, self.z / s)
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(c: [f64; 3]) -> Self {
        Vector3D::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3D {
    type Err = EuclideanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tuple::<3>(s).map(Vector3D::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: &Vector3D) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_algebra() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(-1.0, 0.5, 2.0);

        assert_eq!(a + b, Vector3D::new(0.0, 2.5, 5.0));
        assert_eq!(a - b, Vector3D::new(2.0, 1.5, 1.0));
        assert_eq!(-a, Vector3D::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vector3D::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vector3D::new(0.5, 1.0, 1.5));
        assert!((a.dot(&b) - 6.0).abs() < 1e-12);
        assert_eq!(Vector3D::PLUS_X.cross(&Vector3D::PLUS_Y), Vector3D::PLUS_Z);
    }

    #[test]
    fn test_norm_and_distance() {
        let a = Vector3D::new(1.0, 2.0, 2.0);
        assert!((a.norm() - 3.0).abs() < 1e-12);
        assert!((a.norm_sq() - 9.0).abs() < 1e-12);
        assert!((a.distance(&Vector3D::ZERO) - 3.0).abs() < 1e-12);

        let n = a.normalize().unwrap();
        assert!((n.norm() - 1.0).abs() < 1e-12);
        assert!(Vector3D::ZERO.normalize().is_none());
        assert!(Vector3D::NAN.normalize().is_none());
    }

    #[test]
    fn test_nan_equality_and_hash() {
        let a = Vector3D::new(f64::NAN, 1.0, 2.0);
        let b = Vector3D::new(0.0, 0.0, f64::NAN);

        assert_eq!(a, b);
        assert_eq!(a, Vector3D::NAN);
        assert_ne!(a, Vector3D::ZERO);
        assert_ne!(Vector3D::ZERO, a);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(&Vector3D::NAN));
    }

    #[test]
    fn test_signed_zero() {
        let a = Vector3D::new(0.0, -0.0, 1.0);
        let b = Vector3D::new(-0.0, 0.0, 1.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_infinite() {
        let v = Vector3D::new(f64::INFINITY, 0.0, 0.0);
        assert!(v.is_infinite());
        assert!(!v.is_finite());
        assert!(!Vector3D::new(f64::INFINITY, f64::NAN, 0.0).is_infinite());
    }

    #[test]
    fn test_display_parse() {
        let v = Vector3D::new(1.5, -2.0, 0.25);
        assert_eq!(v.to_string(), "(1.5, -2, 0.25)");
        assert_eq!(v.to_string().parse::<Vector3D>().unwrap(), v);
        assert!("(1, 2)".parse::<Vector3D>().is_err());
    }

    #[test]
    fn test_eq_with_precision() {
        let p = Precision::new(1e-6).unwrap();
        let a = Vector3D::new(1.0, 1.0, 1.0);
        assert!(a.eq_with(&Vector3D::new(1.0 + 1e-7, 1.0, 1.0 - 1e-7), &p));
        assert!(!a.eq_with(&Vector3D::new(1.0 + 1e-5, 1.0, 1.0), &p));
    }
}
