//! Minimum enclosing balls for 2D and 3D point sets
//!
//! This library computes the smallest disk or sphere containing a finite
//! set of points using Welzl's randomized algorithm with the move-to-front
//! and pivoting heuristics.
//!
//! The engine, [`WelzlEncloser`], is generic over the point type and a
//! [`SupportBallGenerator`] that knows how to build the ball defined by up to
//! `D + 1` boundary points in a given dimension. [`DiskGenerator`] and
//! [`SphereGenerator`] cover the plane and 3D space; [`WelzlEncloser2D`] and
//! [`WelzlEncloser3D`] wire them up with a shared [`Precision`].
//!
//! # Example
//! ```
//! use math_enclosing::WelzlEncloser2D;
//! use math_euclidean::{Precision, Vector2D};
//!
//! let encloser = WelzlEncloser2D::new(Precision::new(1e-10).unwrap());
//! let disk = encloser
//!     .enclose(vec![
//!         Vector2D::new(0.0, 0.0),
//!         Vector2D::new(4.0, 0.0),
//!         Vector2D::new(0.0, 3.0),
//!         Vector2D::new(1.0, 1.0),
//!     ])
//!     .unwrap();
//!
//! // the hypotenuse of the right triangle is a diameter
//! assert!((disk.radius() - 2.5).abs() < 1e-10);
//! ```

mod ball;
mod config;
mod disk_generator;
mod encloser2d;
mod encloser3d;
mod error;
mod generator;
mod sphere_generator;
mod welzl;

// Make testdata publicly available for tests and benchmarks
pub mod testdata;

pub use ball::EnclosingBall;
pub use config::{EncloserConfig, EncloserConfigBuilder};
pub use disk_generator::DiskGenerator;
pub use encloser2d::WelzlEncloser2D;
pub use encloser3d::WelzlEncloser3D;
pub use error::{EnclosingError, Result};
pub use generator::SupportBallGenerator;
pub use sphere_generator::SphereGenerator;
pub use welzl::WelzlEncloser;

pub use math_euclidean::{EuclideanPoint, Precision};
