//! Host-RNG adapter.

use tracing::debug;

use super::allocate;
use crate::engine::{HostRng, HostSeed};
use crate::error::GenerationError;

/// An externally supplied normal-sampling primitive.
///
/// The host adapter delegates every draw to an implementation of this
/// trait. [`HostRng`] is the built-in implementation; tests and embedders
/// may substitute their own.
pub trait NormalSampler {
    /// Fills `buffer` with standard normal variates.
    fn fill_normal(&mut self, buffer: &mut [f64]);

    /// Returns the seed the sampler was initialised with, if it knows it.
    fn seed(&self) -> Option<u64> {
        None
    }
}

impl NormalSampler for HostRng {
    #[inline]
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        HostRng::fill_normal(self, buffer);
    }

    #[inline]
    fn seed(&self) -> Option<u64> {
        Some(HostRng::seed(self))
    }
}

/// Adapter delegating to a host sampling primitive.
///
/// # Examples
///
/// ```rust
/// use normal_core::adapter::HostAdapter;
/// use normal_core::engine::HostSeed;
///
/// let mut adapter = HostAdapter::new(HostSeed::new(1));
/// let samples = adapter.generate(5).unwrap();
/// assert_eq!(samples.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct HostAdapter<S: NormalSampler = HostRng> {
    sampler: S,
}

impl HostAdapter<HostRng> {
    /// Creates an adapter after applying the given seed step.
    pub fn new(seed: HostSeed) -> Self {
        debug!(seed = seed.value(), "Host RNG seeded");
        Self {
            sampler: seed.apply(),
        }
    }
}

impl<S: NormalSampler> HostAdapter<S> {
    /// Wraps an externally supplied sampler whose seeding happened elsewhere.
    pub fn from_sampler(sampler: S) -> Self {
        Self { sampler }
    }

    /// Returns the wrapped sampler.
    #[inline]
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Returns the seed the sampler reports, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.sampler.seed()
    }

    /// Draws `count` standard normal variates.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AllocationFailure`] when the output buffer
    /// cannot be reserved.
    pub fn generate(&mut self, count: usize) -> Result<Vec<f64>, GenerationError> {
        let mut samples = allocate(count)?;
        samples.resize(count, 0.0);
        self.sampler.fill_normal(&mut samples);
        Ok(samples)
    }
}
