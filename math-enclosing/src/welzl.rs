//! Welzl's minimum enclosing ball algorithm
//!
//! Based on:
//! - Welzl, E., "Smallest enclosing disks (balls and ellipsoids)," in New
//!   Results and New Trends in Computer Science, LNCS 555, 1991.
//! - Gärtner, B., "Fast and robust smallest enclosing balls," Algorithms - ESA
//!   '99, LNCS 1643, 1999.
//!
//! The engine combines Gärtner's pivoting (restart from the farthest point)
//! with Welzl's move-to-front recursion on a small list of extreme points.
//! The recursion only ever grows the support set, so its depth is bounded by
//! `D + 1`. Input points are shuffled once per call to avoid adversarial
//! orderings.

use crate::{EnclosingBall, EnclosingError, EncloserConfig, Result, SupportBallGenerator};
use math_euclidean::{EuclideanPoint, Precision};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::marker::PhantomData;

/// Minimum enclosing ball engine, generic over the point type and the
/// dimension-specific support ball generator.
///
/// The encloser holds no per-call state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct WelzlEncloser<P, G> {
    generator: G,
    precision: Precision,
    seed: Option<u64>,
    max_iterations: usize,
    parallel_threshold: usize,
    _point: PhantomData<fn() -> P>,
}

impl<P, G> WelzlEncloser<P, G>
where
    P: EuclideanPoint,
    G: SupportBallGenerator<P>,
{
    /// Create an encloser with default settings and a fresh shuffle seed per call.
    ///
    /// `precision` should be the same context the generator uses so that
    /// containment and degeneracy decisions agree.
    pub fn new(generator: G, precision: Precision) -> Self {
        let defaults = EncloserConfig::default();
        Self {
            generator,
            precision,
            seed: None,
            max_iterations: defaults.max_iterations,
            parallel_threshold: defaults.parallel_threshold,
            _point: PhantomData,
        }
    }

    /// Create an encloser from a validated configuration.
    pub fn with_config(generator: G, config: &EncloserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            generator,
            precision: config.precision()?,
            seed: config.seed,
            max_iterations: config.max_iterations,
            parallel_threshold: config.parallel_threshold,
            _point: PhantomData,
        })
    }

    /// Use a fixed shuffle seed, making runs reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The generator building balls on support sets.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    /// Compute the smallest ball containing all `points`.
    ///
    /// The points are copied; the caller's collection is left untouched.
    pub fn enclose<I>(&self, points: I) -> Result<EnclosingBall<P>>
    where
        I: IntoIterator<Item = P>,
    {
        let mut rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };
        self.enclose_with_rng(points, &mut rng)
    }

    /// Same as [`enclose`](Self::enclose) with a caller supplied random source.
    pub fn enclose_with_rng<I, R>(&self, points: I, rng: &mut R) -> Result<EnclosingBall<P>>
    where
        I: IntoIterator<Item = P>,
        R: Rng + ?Sized,
    {
        let mut points: Vec<P> = points.into_iter().collect();
        if points.is_empty() {
            return Err(EnclosingError::EmptyInput);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(EnclosingError::NonFinitePoint { index });
        }

        points.shuffle(rng);
        self.pivoting_ball(&points)
    }

    fn pivoting_ball(&self, points: &[P]) -> Result<EnclosingBall<P>> {
        let first = points[0];
        let mut extreme: Vec<P> = Vec::with_capacity(P::DIMENSION + 2);
        let mut support: Vec<P> = Vec::with_capacity(P::DIMENSION + 1);

        extreme.push(first);
        let mut ball = self.generator.ball_on_support(&[first])?;

        let mut iterations = 0;
        loop {
            let farthest = self.select_farthest(points, ball.center());
            if ball.contains(&farthest, &self.precision) {
                log::debug!(
                    "Enclosed {} points after {} pivots, radius {}",
                    points.len(),
                    iterations,
                    ball.radius()
                );
                return Ok(ball);
            }

            iterations += 1;
            if iterations > self.max_iterations {
                log::error!(
                    "Max iterations exceeded after {} pivots, radius {}",
                    iterations,
                    ball.radius()
                );
                return Err(EnclosingError::MaxIterationsExceeded { iterations });
            }

            // restart the search on the extreme points, with the farthest one forced on the boundary
            support.clear();
            support.push(farthest);
            let previous_radius = ball.radius();
            let nb_extreme = extreme.len();
            ball = self.move_to_front_ball(&mut extreme, nb_extreme, &mut support)?;

            if self.precision.lt(ball.radius(), previous_radius) {
                log::error!(
                    "Enclosing ball shrank from {} to {} at pivot {}",
                    previous_radius,
                    ball.radius(),
                    iterations
                );
                return Err(EnclosingError::RadiusDecreased {
                    previous: previous_radius,
                    current: ball.radius(),
                });
            }

            // Gärtner's heuristic: keep the pivot in front, drop points that are no longer extreme
            extreme.insert(0, farthest);
            extreme.truncate(ball.support_size());

            log::trace!(
                "Pivot {}: radius {} -> {}, support size {}",
                iterations,
                previous_radius,
                ball.radius(),
                ball.support_size()
            );
        }
    }

    /// Smallest ball with `support` on its boundary containing the first
    /// `nb_extreme` extreme points.
    fn move_to_front_ball(
        &self,
        extreme: &mut [P],
        nb_extreme: usize,
        support: &mut Vec<P>,
    ) -> Result<EnclosingBall<P>> {
        let mut ball = self.generator.ball_on_support(support)?;

        if ball.support_size() <= P::DIMENSION {
            for i in 0..nb_extreme {
                let pi = extreme[i];
                if ball.contains(&pi, &self.precision) {
                    continue;
                }

                // outside point: it belongs to the support of the enlarged ball
                support.push(pi);
                let enlarged = self.move_to_front_ball(extreme, i, support);
                support.pop();
                ball = enlarged?;

                // Welzl's heuristic
                extreme[..=i].rotate_right(1);
            }
        }

        Ok(ball)
    }

    fn select_farthest(&self, points: &[P], center: &P) -> P {
        let farther = |a: (f64, P), b: (f64, P)| if b.0 > a.0 { b } else { a };

        let farthest = if points.len() >= self.parallel_threshold {
            points
                .par_iter()
                .map(|p| (p.distance(center), *p))
                .reduce_with(farther)
        } else {
            points
                .iter()
                .map(|p| (p.distance(center), *p))
                .reduce(farther)
        };

        farthest.map_or(points[0], |(_, p)| p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiskGenerator, SphereGenerator};
    use math_euclidean::{Vector2D, Vector3D};

    fn encloser_2d() -> WelzlEncloser<Vector2D, DiskGenerator> {
        let precision = Precision::new(1e-10).unwrap();
        WelzlEncloser::new(DiskGenerator::new(precision), precision).with_seed(1)
    }

    fn encloser_3d() -> WelzlEncloser<Vector3D, SphereGenerator> {
        let precision = Precision::new(1e-10).unwrap();
        WelzlEncloser::new(SphereGenerator::new(precision), precision).with_seed(1)
    }

    #[test]
    fn test_empty_input() {
        let err = encloser_2d().enclose(Vec::new()).unwrap_err();
        assert!(matches!(err, EnclosingError::EmptyInput));
    }

    #[test]
    fn test_non_finite_input() {
        let points = vec![Vector2D::new(0.0, 0.0), Vector2D::new(1.0, f64::NAN)];
        let err = encloser_2d().enclose(points).unwrap_err();
        assert!(matches!(err, EnclosingError::NonFinitePoint { index: 1 }));

        let points = vec![Vector3D::new(f64::INFINITY, 0.0, 0.0)];
        let err = encloser_3d().enclose(points).unwrap_err();
        assert!(matches!(err, EnclosingError::NonFinitePoint { index: 0 }));
    }

    #[test]
    fn test_single_point() {
        let p = Vector2D::new(-3.0, 7.5);
        let ball = encloser_2d().enclose([p]).unwrap();

        assert_eq!(*ball.center(), p);
        assert_eq!(ball.radius(), 0.0);
        assert_eq!(ball.support(), &[p]);
    }

    #[test]
    fn test_duplicate_points() {
        let p = Vector3D::new(1.0, 2.0, 3.0);
        let ball = encloser_3d().enclose([p, p, p]).unwrap();

        assert_eq!(*ball.center(), p);
        assert_eq!(ball.radius(), 0.0);
        assert_eq!(ball.support_size(), 1);
    }

    #[test]
    fn test_two_points_diameter() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(4.0, 5.0);
        let ball = encloser_2d().enclose([a, b]).unwrap();

        assert!((ball.radius() - 2.5).abs() < 1e-12);
        assert!(ball.center().eq_with(&Vector2D::new(2.5, 3.0), &Precision::new(1e-12).unwrap()));
        assert_eq!(ball.support_size(), 2);
    }

    #[test]
    fn test_collinear_points() {
        let points: Vec<Vector2D> = (0..10).map(|i| Vector2D::new(i as f64, 2.0 * i as f64)).collect();
        let ball = encloser_2d().enclose(points.clone()).unwrap();

        let expected = points[0].distance(&points[9]) / 2.0;
        assert!((ball.radius() - expected).abs() < 1e-10);
        assert_eq!(ball.support_size(), 2);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let points = vec![
            Vector2D::new(0.0, 0.0),
            Vector2D::new(5.0, 0.0),
            Vector2D::new(0.0, 5.0),
            Vector2D::new(1.0, 1.0),
        ];
        let copy = points.clone();
        encloser_2d().enclose(points.iter().copied()).unwrap();
        assert_eq!(points, copy);
    }

    #[test]
    fn test_select_farthest_parallel_matches_sequential() {
        let points: Vec<Vector3D> = (0..500)
            .map(|i| {
                let t = i as f64 * 0.37;
                Vector3D::new(t.cos() * t, t.sin(), (t * 0.1).sin())
            })
            .collect();
        let center = Vector3D::new(0.5, -0.25, 0.0);

        let sequential = encloser_3d();
        let parallel = WelzlEncloser::with_config(
            SphereGenerator::default(),
            &EncloserConfig {
                parallel_threshold: 1,
                ..EncloserConfig::default()
            },
        )
        .unwrap();

        assert_eq!(
            sequential.select_farthest(&points, &center),
            parallel.select_farthest(&points, &center)
        );
    }

    #[test]
    fn test_generator_and_precision_accessors() {
        let encloser = encloser_2d();
        assert_eq!(encloser.precision().epsilon(), 1e-10);
        assert_eq!(encloser.generator().precision(), encloser.precision());

        let support = [Vector2D::new(0.0, 0.0), Vector2D::new(2.0, 0.0)];
        let disk = encloser.generator().ball_on_support(&support).unwrap();
        assert_eq!(disk.radius(), 1.0);
    }

    #[test]
    fn test_max_iterations() {
        let precision = Precision::new(1e-10).unwrap();
        let config = EncloserConfig {
            max_iterations: 1,
            seed: Some(5),
            ..EncloserConfig::default()
        };
        let encloser = WelzlEncloser::with_config(DiskGenerator::new(precision), &config).unwrap();

        // the second pivot is unavoidable for this set: whichever point comes
        // first, the farthest one from it is not enough to enclose everything
        let points = [
            Vector2D::new(0.0, 0.0),
            Vector2D::new(10.0, 0.0),
            Vector2D::new(5.0, 9.0),
        ];
        let err = encloser.enclose(points).unwrap_err();
        assert!(matches!(err, EnclosingError::MaxIterationsExceeded { iterations: 2 }));
    }

    #[test]
    fn test_generator_errors_propagate() {
        // the minimal disk of an acute triangle needs all three vertices, and
        // a generator tolerance above the triangle height rejects them
        let encloser = WelzlEncloser::new(
            DiskGenerator::new(Precision::new(10.0).unwrap()),
            Precision::new(1e-12).unwrap(),
        )
        .with_seed(3);
        let points = [
            Vector2D::new(0.0, 0.0),
            Vector2D::new(10.0, 0.0),
            Vector2D::new(5.0, 6.0),
        ];
        let err = encloser.enclose(points).unwrap_err();
        assert!(matches!(err, EnclosingError::DegenerateConfiguration { .. }));
    }
}
