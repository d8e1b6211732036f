use ndarray::Array1;
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, Result};

/// Parameters for synthetic dataset generation.
///
/// Samples are spread evenly over the x-range and scattered around the
/// ground-truth line `y = true_slope * x + true_intercept` with gaussian noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetConfig {
    pub n_points: usize,
    pub true_slope: f32,
    pub true_intercept: f32,
    pub noise_std: f32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            n_points: 50,
            true_slope: 1.5,
            true_intercept: 2.0,
            noise_std: 1.5,
        }
    }
}

const X_START: f32 = 0.0;
const X_END: f32 = 10.0;

/// An ordered collection of observed (x, y) samples.
///
/// Immutable once generated; regeneration replaces the whole set.
#[derive(Debug, Clone)]
pub struct Dataset {
    xs: Array1<f32>,
    ys: Array1<f32>,
    x_bounds: (f32, f32),
    y_bounds: (f32, f32),
}

impl Dataset {
    /// Draws a fresh sample from thread entropy.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if `noise_std` is negative or not finite.
    pub fn generate(config: &DatasetConfig) -> Result<Self> {
        Self::from_rng(config, &mut rand::rng())
    }

    /// Draws a reproducible sample from a fixed seed.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if `noise_std` is negative or not finite.
    pub fn generate_seeded(config: &DatasetConfig, seed: u64) -> Result<Self> {
        Self::from_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    fn from_rng<R: Rng + ?Sized>(config: &DatasetConfig, rng: &mut R) -> Result<Self> {
        if !config.noise_std.is_finite() || config.noise_std < 0.0 {
            return Err(CoreError::InvalidConfig("noise_std must be finite and >= 0"));
        }

        let xs = Array1::linspace(X_START, X_END, config.n_points);
        let noise = Array1::random_using(
            config.n_points,
            Normal::new(0.0, config.noise_std)
                .map_err(|_| CoreError::InvalidConfig("noise_std rejected by sampler"))?,
            rng,
        );
        let ys = xs.mapv(|x| config.true_slope * x + config.true_intercept) + noise;

        let x_bounds = bounds(&xs);
        let y_bounds = bounds(&ys);
        Ok(Self { xs, ys, x_bounds, y_bounds })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &Array1<f32> {
        &self.xs
    }

    pub fn ys(&self) -> &Array1<f32> {
        &self.ys
    }

    /// Iterates over (x, y) pairs in generation order.
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Min/max of the x values; (0, 1) for an empty set.
    pub fn x_bounds(&self) -> (f32, f32) {
        self.x_bounds
    }

    /// Min/max of the y values; (0, 1) for an empty set.
    pub fn y_bounds(&self) -> (f32, f32) {
        self.y_bounds
    }
}

fn bounds(values: &Array1<f32>) -> (f32, f32) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    values.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}
