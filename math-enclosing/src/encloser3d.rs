//! Convenience encloser for 3D Euclidean space

use crate::{EnclosingBall, EncloserConfig, Result, SphereGenerator, WelzlEncloser};
use math_euclidean::{Precision, Vector3D};
use rand::Rng;

/// [`WelzlEncloser`] bound to a [`SphereGenerator`] sharing its precision.
///
/// # Example
/// ```
/// use math_enclosing::WelzlEncloser3D;
/// use math_euclidean::{Precision, Vector3D};
///
/// let encloser = WelzlEncloser3D::new(Precision::new(1e-10).unwrap());
/// let sphere = encloser
///     .enclose(vec![Vector3D::new(-1.0, 0.0, 0.0), Vector3D::new(1.0, 0.0, 0.0)])
///     .unwrap();
/// assert!((sphere.radius() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct WelzlEncloser3D {
    inner: WelzlEncloser<Vector3D, SphereGenerator>,
}

impl WelzlEncloser3D {
    pub fn new(precision: Precision) -> Self {
        Self {
            inner: WelzlEncloser::new(SphereGenerator::new(precision), precision),
        }
    }

    pub fn from_config(config: &EncloserConfig) -> Result<Self> {
        let generator = SphereGenerator::new(config.precision()?);
        Ok(Self {
            inner: WelzlEncloser::with_config(generator, config)?,
        })
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            inner: self.inner.with_seed(seed),
        }
    }

    pub fn precision(&self) -> &Precision {
        self.inner.precision()
    }

    /// Smallest sphere containing all `points`
    pub fn enclose<I>(&self, points: I) -> Result<EnclosingBall<Vector3D>>
    where
        I: IntoIterator<Item = Vector3D>,
    {
        self.inner.enclose(points)
    }

    pub fn enclose_with_rng<I, R>(&self, points: I, rng: &mut R) -> Result<EnclosingBall<Vector3D>>
    where
        I: IntoIterator<Item = Vector3D>,
        R: Rng + ?Sized,
    {
        self.inner.enclose_with_rng(points, rng)
    }
}
