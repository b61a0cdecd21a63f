//! Spherical coordinates in 3D Euclidean space.

use crate::{EuclideanError, Vector3D, hash_f64, parse_tuple};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Wrap an angle into `[-pi, pi)`.
fn normalize_between_minus_pi_and_pi(angle: f64) -> f64 {
    angle - TAU * ((angle + PI) / TAU).floor()
}

/// A (radius, azimuth, polar) triple.
///
/// Values are always normalized: radius in `[0, +inf)`, azimuth (angle in the
/// x-y plane from +x, counter-clockwise) in `(-pi, pi]` and polar (angle from
/// +z) in `[0, pi]`. Non-finite angles are kept as given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SphericalCoordinates {
    radius: f64,
    azimuth: f64,
    polar: f64,
}

impl SphericalCoordinates {
    /// Build normalized spherical coordinates.
    pub fn of(radius: f64, azimuth: f64, polar: f64) -> Self {
        let (mut radius, mut azimuth, mut polar) = (radius, azimuth, polar);

        if radius < 0.0 {
            // flip through the origin
            radius = radius.abs();
            azimuth += PI;
            polar += PI;
        }

        if azimuth.is_finite() && (azimuth <= -PI || azimuth > PI) {
            azimuth = normalize_between_minus_pi_and_pi(azimuth);
            if azimuth <= -PI {
                azimuth += TAU;
            }
        }

        // polar is unsigned
        if polar.is_finite() {
            polar = normalize_between_minus_pi_and_pi(polar).abs();
        }

        Self {
            radius,
            azimuth,
            polar,
        }
    }

    /// Convert Cartesian coordinates. The polar angle is 0 at the origin.
    pub fn from_cartesian(x: f64, y: f64, z: f64) -> Self {
        let radius = (x * x + y * y + z * z).sqrt();
        let azimuth = y.atan2(x);
        let polar = if radius > 0.0 { (z / radius).acos() } else { 0.0 };
        Self::of(radius, azimuth, polar)
    }

    pub fn from_vector(v: &Vector3D) -> Self {
        Self::from_cartesian(v.x(), v.y(), v.z())
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    pub fn polar(&self) -> f64 {
        self.polar
    }

    pub fn is_nan(&self) -> bool {
        self.radius.is_nan() || self.azimuth.is_nan() || self.polar.is_nan()
    }

    pub fn is_infinite(&self) -> bool {
        !self.is_nan()
            && (self.radius.is_infinite() || self.azimuth.is_infinite() || self.polar.is_infinite())
    }

    /// Equivalent Cartesian vector
    pub fn to_vector(&self) -> Vector3D {
        to_cartesian(self.radius, self.azimuth, self.polar)
    }
}

/// Convert a (radius, azimuth, polar) triple to a Cartesian vector.
pub fn to_cartesian(radius: f64, azimuth: f64, polar: f64) -> Vector3D {
    let xy_length = radius * polar.sin();
    Vector3D::new(
        xy_length * azimuth.cos(),
        xy_length * azimuth.sin(),
        radius * polar.cos(),
    )
}

impl PartialEq for SphericalCoordinates {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return self.is_nan() && other.is_nan();
        }
        self.radius == other.radius && self.azimuth == other.azimuth && self.polar == other.polar
    }
}

impl Hash for SphericalCoordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_nan() {
            state.write_u8(0x7f);
            return;
        }
        hash_f64(self.radius, state);
        hash_f64(self.azimuth, state);
        hash_f64(self.polar, state);
    }
}

impl fmt::Display for SphericalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.radius, self.azimuth, self.polar)
    }
}

impl FromStr for SphericalCoordinates {
    type Err = EuclideanError;

    /// Parses `(radius, azimuth, polar)` and normalizes like [`SphericalCoordinates::of`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [radius, azimuth, polar] = parse_tuple::<3>(s)?;
        Ok(Self::of(radius, azimuth, polar))
    }
}
