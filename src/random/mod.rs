//! Random distributions
//!
//! Sampling is an injected capability: components hold a distribution value and
//! receive the RNG per call, so a cloned component never shares random state.

use std::fmt::Debug;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// A two-argument sampling capability, `sample(a, b) -> f64`
///
/// The meaning of `a` and `b` belongs to the implementation: a range for
/// [`UniformDistribution`], mean and deviation for [`GaussianDistribution`].
pub trait ProbabilityDistribution: Clone + Debug + Send + Sync {
    /// Draw a single value
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, a: f64, b: f64) -> f64;
}

/// Uniform distribution over the closed interval `[low, high]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UniformDistribution;

impl UniformDistribution {
    /// Create a new uniform distribution
    pub fn new() -> Self {
        Self
    }
}

impl ProbabilityDistribution for UniformDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, low: f64, high: f64) -> f64 {
        // Callers validate bound order; an inverted pair samples the same interval.
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        if low == high {
            return low;
        }
        rng.gen_range(low..=high)
    }
}

/// Gaussian distribution parameterized per call by `(mean, deviation)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GaussianDistribution;

impl GaussianDistribution {
    /// Create a new Gaussian distribution
    pub fn new() -> Self {
        Self
    }
}

impl ProbabilityDistribution for GaussianDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, mean: f64, deviation: f64) -> f64 {
        match Normal::new(mean, deviation.abs()) {
            Ok(normal) => normal.sample(rng),
            Err(_) => mean,
        }
    }
}

pub mod prelude {
    pub use super::{GaussianDistribution, ProbabilityDistribution, UniformDistribution};
}
