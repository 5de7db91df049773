//! Mersenne-Twister backed adapters.
//!
//! The library and standard adapters share one shape: an owned, seeded
//! [`Mt19937`] composed with a normal transform. They differ only in the
//! transform and in their default seed constants.

use tracing::debug;

use super::allocate;
use crate::engine::Mt19937;
use crate::error::GenerationError;
use crate::transform::{NormalTransform, PolarNormal, Ziggurat};

/// Fixed seed of the general-purpose library engine.
pub const LIBRARY_SEED: u32 = 123_456;

/// Fixed seed of the standard-library engine.
pub const STANDARD_SEED: u32 = 42;

/// Mersenne Twister with the Ziggurat transform.
pub type LibraryAdapter = MersenneAdapter<Ziggurat>;

/// Mersenne Twister with the Marsaglia polar transform.
pub type StandardAdapter = MersenneAdapter<PolarNormal>;

/// Adapter owning a seeded Mersenne Twister and a normal transform.
///
/// # Examples
///
/// ```rust
/// use normal_core::adapter::{LibraryAdapter, LIBRARY_SEED};
///
/// let mut a = LibraryAdapter::new(LIBRARY_SEED);
/// let mut b = LibraryAdapter::new(LIBRARY_SEED);
/// assert_eq!(a.generate(10).unwrap(), b.generate(10).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct MersenneAdapter<T: NormalTransform> {
    engine: Mt19937,
    transform: T,
}

impl<T: NormalTransform + Default> MersenneAdapter<T> {
    /// Creates an adapter with a freshly seeded engine.
    pub fn new(seed: u32) -> Self {
        debug!(seed, "Mersenne Twister seeded");
        Self {
            engine: Mt19937::new(seed),
            transform: T::default(),
        }
    }
}

impl<T: NormalTransform> MersenneAdapter<T> {
    /// Returns the engine seed.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.engine.seed()
    }

    /// Draws `count` standard normal variates by invoking the transform
    /// `count` times against the owned engine.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AllocationFailure`] when the output buffer
    /// cannot be reserved.
    pub fn generate(&mut self, count: usize) -> Result<Vec<f64>, GenerationError> {
        let mut samples = allocate(count)?;
        for _ in 0..count {
            samples.push(self.transform.sample(&mut self.engine));
        }
        Ok(samples)
    }
}
