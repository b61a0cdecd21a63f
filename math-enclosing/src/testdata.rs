//! Point sets for enclosing ball tests and benchmarks
//!
//! Random generators take a seed so that failures can be replayed.

use math_euclidean::{SphericalCoordinates, Vector2D, Vector3D, to_cartesian};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random points in the axis aligned cube `[-half_size, half_size]^3`
pub fn random_cube_points(n: usize, half_size: f64, seed: u64) -> Vec<Vector3D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Vector3D::new(
                rng.random_range(-half_size..=half_size),
                rng.random_range(-half_size..=half_size),
                rng.random_range(-half_size..=half_size),
            )
        })
        .collect()
}

/// Random points on (`thickness == 0`) or just inside a sphere of the given
/// center and radius
pub fn random_sphere_points(n: usize, center: Vector3D, radius: f64, thickness: f64, seed: u64) -> Vec<Vector3D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let azimuth = rng.random::<f64>() * 2.0 * std::f64::consts::PI;
            let polar = (rng.random::<f64>() * 2.0 - 1.0).acos();
            let r = radius * (1.0 - thickness * rng.random::<f64>());
            center + to_cartesian(r, azimuth, polar)
        })
        .collect()
}

/// Uniform random points in the square `[-half_size, half_size]^2`
pub fn random_square_points(n: usize, half_size: f64, seed: u64) -> Vec<Vector2D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Vector2D::new(
                rng.random_range(-half_size..=half_size),
                rng.random_range(-half_size..=half_size),
            )
        })
        .collect()
}

/// Points spread on a sphere using a Fibonacci lattice
pub fn fibonacci_sphere_points(n: usize, radius: f64) -> Vec<Vector3D> {
    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;

    (0..n)
        .map(|i| {
            let azimuth = 2.0 * std::f64::consts::PI * (i as f64) / golden_ratio;
            let polar = ((2 * i + 1) as f64 / n as f64 - 1.0).acos();
            SphericalCoordinates::of(radius, azimuth, polar).to_vector()
        })
        .collect()
}

/// Corners of an axis aligned cube centered at the origin
pub fn cube_vertices(size: f64) -> Vec<Vector3D> {
    let s = size / 2.0;
    vec![
        Vector3D::new(-s, -s, -s),
        Vector3D::new(s, -s, -s),
        Vector3D::new(s, s, -s),
        Vector3D::new(-s, s, -s),
        Vector3D::new(-s, -s, s),
        Vector3D::new(s, -s, s),
        Vector3D::new(s, s, s),
        Vector3D::new(-s, s, s),
    ]
}
