//! Scalar and matrix normal sampling.

use colstats_core::{MatrixShape, Result};
use tracing::{debug, trace};

use super::config::{NormalMethod, SamplerConfig};
use super::transform::{box_muller_transform, single_draw_transform};
use crate::rng::StatsRng;

/// Normal sampler owning its generator.
///
/// Not shareable between threads without external synchronisation: every
/// draw advances the owned [`StatsRng`] through `&mut self`.
///
/// # Examples
///
/// ```rust
/// use colstats_core::MatrixShape;
/// use colstats_random::{GaussianSampler, NormalMethod, StatsRng};
///
/// let mut sampler = GaussianSampler::new(StatsRng::from_seed(1), NormalMethod::BoxMuller);
/// let x = sampler.sample();
/// assert!(x.is_finite());
///
/// let shape = MatrixShape::new(2, 3).unwrap();
/// let mut mtx = vec![0.0; shape.len()];
/// sampler.fill_matrix(&mut mtx, shape).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct GaussianSampler {
    rng: StatsRng,
    method: NormalMethod,
}

impl GaussianSampler {
    /// Creates a sampler from an existing generator.
    pub fn new(rng: StatsRng, method: NormalMethod) -> Self {
        debug!(seed = rng.seed(), %method, "creating gaussian sampler");
        Self { rng, method }
    }

    /// Creates a sampler from a configuration, seeding from entropy when no
    /// seed is set.
    pub fn from_config(config: &SamplerConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StatsRng::from_seed(seed),
            None => StatsRng::from_entropy(),
        };
        Self::new(rng, config.method())
    }

    /// Normal transform in use.
    #[inline]
    pub fn method(&self) -> NormalMethod {
        self.method
    }

    /// Underlying generator, e.g. to read its seed.
    #[inline]
    pub fn rng(&self) -> &StatsRng {
        &self.rng
    }

    /// Draws one normal variate (`randn`).
    #[inline]
    pub fn sample(&mut self) -> f64 {
        match self.method {
            NormalMethod::SingleDraw => single_draw_transform(self.rng.gen_open_uniform()),
            NormalMethod::BoxMuller => {
                let u1 = self.rng.gen_open_uniform();
                let u2 = self.rng.gen_uniform();
                box_muller_transform(u1, u2)
            }
            NormalMethod::Ziggurat => self.rng.gen_ziggurat(),
        }
    }

    /// Fills `buffer` with independent normal variates.
    pub fn fill(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.sample();
        }
    }

    /// Fills the `dim_i × dim_j` leading block of `mtx` with independent
    /// normal variates (`randn_mtx`), row by row.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::BufferTooSmall` if `mtx` is shorter than the
    /// shape. The generator is not advanced on error.
    pub fn fill_matrix(&mut self, mtx: &mut [f64], shape: MatrixShape) -> Result<()> {
        shape.check_matrix("mtx", mtx.len())?;
        trace!(
            rows = shape.rows(),
            cols = shape.cols(),
            method = %self.method,
            "sampling normal matrix"
        );
        self.fill(&mut mtx[..shape.len()]);
        Ok(())
    }

    /// Returns a new `dim_i × dim_j` matrix of independent normal variates.
    pub fn sample_matrix(&mut self, shape: MatrixShape) -> Vec<f64> {
        let mut mtx = vec![0.0; shape.len()];
        self.fill(&mut mtx);
        mtx
    }
}
