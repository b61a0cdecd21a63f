//! Two dimensional Euclidean vectors and points

use crate::{EuclideanError, EuclideanPoint, Precision, hash_f64, parse_tuple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// A 2D vector, also used to represent points.
///
/// NaN handling follows [`crate::Vector3D`]: one NaN coordinate makes the
/// whole vector NaN, and all NaN vectors are equal and hash alike.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D::new(0.0, 0.0);
    pub const NAN: Vector2D = Vector2D::new(f64::NAN, f64::NAN);
    pub const PLUS_X: Vector2D = Vector2D::new(1.0, 0.0);
    pub const PLUS_Y: Vector2D = Vector2D::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of `self` and `other`, i.e. twice
    /// the signed area of the triangle they span.
    pub fn signed_area(&self, other: &Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn norm_sq(&self) -> f64 {
        self.dot(self)
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: &Vector2D) -> f64 {
        (*self - *other).norm()
    }

    pub fn distance_sq(&self, other: &Vector2D) -> f64 {
        (*self - *other).norm_sq()
    }

    pub fn normalize(&self) -> Option<Vector2D> {
        let norm = self.norm();
        if norm > 0.0 && norm.is_finite() {
            Some(*self / norm)
        } else {
            None
        }
    }

    pub fn lerp(&self, other: &Vector2D, t: f64) -> Vector2D {
        *self * (1.0 - t) + *other * t
    }

    pub fn midpoint(&self, other: &Vector2D) -> Vector2D {
        self.lerp(other, 0.5)
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.x.is_infinite() || self.y.is_infinite())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn eq_with(&self, other: &Vector2D, precision: &Precision) -> bool {
        precision.eq(self.x, other.x) && precision.eq(self.y, other.y)
    }
}

impl EuclideanPoint for Vector2D {
    const DIMENSION: usize = 2;

    fn distance(&self, other: &Self) -> f64 {
        Vector2D::distance(self, other)
    }

    fn is_nan(&self) -> bool {
        Vector2D::is_nan(self)
    }

    fn is_finite(&self) -> bool {
        Vector2D::is_finite(self)
    }
}

impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return self.is_nan() && other.is_nan();
        }
        self.x == other.x && self.y == other.y
    }
}

impl Hash for Vector2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_nan() {
            state.write_u8(0x7f);
            return;
        }
        hash_f64(self.x, state);
        hash_f64(self.y, state);
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, s: f64) -> Vector2D {
        Vector2D::new(self.x * s, self.y * s)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, s: f64) -> Vector2D {
        Vector2D::new(self.x / s, self.y / s)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(c: [f64; 2]) -> Self {
        Vector2D::new(c[0], c[1])
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Vector2D {
    type Err = EuclideanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tuple::<2>(s).map(Vector2D::from)
    }
}
