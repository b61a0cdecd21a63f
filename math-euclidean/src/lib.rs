//! Euclidean value types for computational geometry
//!
//! This crate provides the small, immutable building blocks shared by the
//! geometry crates of the workspace:
//!
//! - [`Vector2D`] and [`Vector3D`]: coordinate tuples with the usual vector algebra
//! - [`SphericalCoordinates`]: normalized (radius, azimuth, polar) triples
//! - [`Precision`]: an absolute-epsilon comparison context through which all
//!   floating point decisions are routed
//! - [`EuclideanPoint`]: the point capability consumed by generic algorithms
//!
//! # Example
//! ```
//! use math_euclidean::{Precision, Vector3D};
//!
//! let precision = Precision::new(1e-10).unwrap();
//! let a = Vector3D::new(1.0, 0.0, 0.0);
//! let b = Vector3D::new(0.0, 1.0, 0.0);
//!
//! assert!(precision.eq(a.distance(&b), 2.0_f64.sqrt()));
//! assert_eq!(a.cross(&b), Vector3D::new(0.0, 0.0, 1.0));
//! ```

mod error;
mod point;
mod precision;
mod spherical;
mod vector2d;
mod vector3d;

pub use error::{EuclideanError, Result};
pub use point::EuclideanPoint;
pub use precision::{DEFAULT_EPSILON, Precision};
pub use spherical::{SphericalCoordinates, to_cartesian};
pub use vector2d::Vector2D;
pub use vector3d::Vector3D;

/// Parse a parenthesized, comma separated list of exactly `N` floating point
/// values, e.g. `"(1.0, -2, 3e-4)"`.
pub(crate) fn parse_tuple<const N: usize>(input: &str) -> Result<[f64; N]> {
    let parse_error = |reason: String| EuclideanError::Parse {
        input: input.to_string(),
        reason,
    };

    let inner = input
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| parse_error("expected a value enclosed in parentheses".to_string()))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(parse_error(format!(
            "expected {} components, found {}",
            N,
            parts.len()
        )));
    }

    let mut values = [0.0; N];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .parse::<f64>()
            .map_err(|e| parse_error(format!("invalid number '{}': {}", part, e)))?;
    }
    Ok(values)
}

/// Hash an `f64` so that `0.0` and `-0.0` collide, matching IEEE equality.
pub(crate) fn hash_f64<H: std::hash::Hasher>(value: f64, state: &mut H) {
    use std::hash::Hash;
    let normalized = if value == 0.0 { 0.0 } else { value };
    normalized.to_bits().hash(state);
}
