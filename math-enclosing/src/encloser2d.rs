//! Convenience encloser for the Euclidean plane

use crate::{DiskGenerator, EnclosingBall, EncloserConfig, Result, WelzlEncloser};
use math_euclidean::{Precision, Vector2D};
use rand::Rng;

/// [`WelzlEncloser`] bound to a [`DiskGenerator`] sharing its precision.
#[derive(Debug, Clone)]
pub struct WelzlEncloser2D {
    inner: WelzlEncloser<Vector2D, DiskGenerator>,
}

impl WelzlEncloser2D {
    pub fn new(precision: Precision) -> Self {
        Self {
            inner: WelzlEncloser::new(DiskGenerator::new(precision), precision),
        }
    }

    pub fn from_config(config: &EncloserConfig) -> Result<Self> {
        let generator = DiskGenerator::new(config.precision()?);
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

    /// Smallest disk containing all `points`
    pub fn enclose<I>(&self, points: I) -> Result<EnclosingBall<Vector2D>>
    where
        I: IntoIterator<Item = Vector2D>,
    {
        self.inner.enclose(points)
    }

    pub fn enclose_with_rng<I, R>(&self, points: I, rng: &mut R) -> Result<EnclosingBall<Vector2D>>
    where
        I: IntoIterator<Item = Vector2D>,
        R: Rng + ?Sized,
    {
        self.inner.enclose_with_rng(points, rng)
    }
}
