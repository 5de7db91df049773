//! Normal distribution transforms.
//!
//! A transform maps the raw output of an engine onto N(0, 1). Two are
//! provided:
//!
//! - [`Ziggurat`]: the Marsaglia–Tsang Ziggurat method from
//!   `rand_distr::StandardNormal`
//! - [`PolarNormal`]: the Marsaglia polar form of Box–Muller over 53-bit
//!   canonical uniforms, producing values in pairs
//!
//! Both are deterministic given the engine state, so a seeded engine and a
//! freshly constructed transform always yield the same sequence.

use rand::RngCore;
use rand_distr::{Distribution, StandardNormal};

/// 2^32 as a float.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Largest `f64` strictly below one.
const ONE_BELOW: f64 = 1.0 - f64::EPSILON / 2.0;

/// A stateful map from engine output to standard normal variates.
pub trait NormalTransform {
    /// Draws one standard normal variate from `engine`.
    fn sample<R: RngCore + ?Sized>(&mut self, engine: &mut R) -> f64;

    /// Discards any cached state so the next draw depends only on the engine.
    fn reset(&mut self);
}

/// Ziggurat transform backed by `rand_distr::StandardNormal`.
///
/// Stateless: every variate consumes fresh engine output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ziggurat;

impl NormalTransform for Ziggurat {
    #[inline]
    fn sample<R: RngCore + ?Sized>(&mut self, engine: &mut R) -> f64 {
        StandardNormal.sample(engine)
    }

    #[inline]
    fn reset(&mut self) {}
}

/// Marsaglia polar transform.
///
/// Each accepted pair of uniforms produces two independent normals; the
/// second is cached and returned by the following call.
///
/// # Examples
///
/// ```rust
/// use normal_core::engine::Mt19937;
/// use normal_core::transform::{NormalTransform, PolarNormal};
///
/// let mut engine = Mt19937::new(42);
/// let mut polar = PolarNormal::new();
///
/// let first = polar.sample(&mut engine);
/// assert!(polar.has_cached());
/// let second = polar.sample(&mut engine);
/// assert!(!polar.has_cached());
/// assert_ne!(first, second);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarNormal {
    saved: Option<f64>,
}

impl PolarNormal {
    /// Creates a transform with an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the next call is served from the cache.
    #[inline]
    pub fn has_cached(&self) -> bool {
        self.saved.is_some()
    }
}

impl NormalTransform for PolarNormal {
    fn sample<R: RngCore + ?Sized>(&mut self, engine: &mut R) -> f64 {
        if let Some(value) = self.saved.take() {
            return value;
        }

        loop {
            let x = 2.0 * canonical(engine) - 1.0;
            let y = 2.0 * canonical(engine) - 1.0;
            let r2 = x * x + y * y;
            if r2 > 1.0 || r2 == 0.0 {
                continue;
            }

            let scale = (-2.0 * r2.ln() / r2).sqrt();
            self.saved = Some(x * scale);
            return y * scale;
        }
    }

    #[inline]
    fn reset(&mut self) {
        self.saved = None;
    }
}

/// Draws a uniform value in [0, 1) with 53 bits of precision from two
/// consecutive 32-bit engine outputs.
///
/// The low word is drawn first. Rounding can push the quotient to exactly
/// one, in which case the largest value below one is returned instead.
#[inline]
pub fn canonical<R: RngCore + ?Sized>(engine: &mut R) -> f64 {
    let lo = f64::from(engine.next_u32());
    let hi = f64::from(engine.next_u32());
    let value = (lo + hi * TWO_POW_32) / (TWO_POW_32 * TWO_POW_32);
    if value >= 1.0 {
        ONE_BELOW
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Mt19937;
    use approx::assert_relative_eq;

    /// Engine replaying a fixed word sequence.
    struct Replay {
        words: Vec<u32>,
        pos: usize,
    }

    impl Replay {
        fn new(words: &[u32]) -> Self {
            Self {
                words: words.to_vec(),
                pos: 0,
            }
        }
    }

    impl RngCore for Replay {
        fn next_u32(&mut self) -> u32 {
            let word = self.words[self.pos % self.words.len()];
            self.pos += 1;
            word
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_canonical_bounds() {
        let mut zeros = Replay::new(&[0]);
        assert_eq!(canonical(&mut zeros), 0.0);

        let mut ones = Replay::new(&[u32::MAX]);
        let top = canonical(&mut ones);
        assert!(top < 1.0);
        assert_eq!(top, ONE_BELOW);
    }

    #[test]
    fn test_canonical_uses_high_word_as_most_significant() {
        // hi = 2^31 → exactly one half
        let mut engine = Replay::new(&[0, 0x8000_0000]);
        assert_relative_eq!(canonical(&mut engine), 0.5);
    }

    #[test]
    fn test_polar_rejects_origin() {
        // First pair maps to (0, 0) and must be rejected; second pair
        // maps to (0.5, 0.0).
        let mut engine = Replay::new(&[0, 0x8000_0000, 0, 0x8000_0000, 0, 0xC000_0000, 0, 0x8000_0000]);
        let mut polar = PolarNormal::new();

        let first = polar.sample(&mut engine);
        assert_eq!(engine.pos, 8);
        assert_eq!(first, 0.0);

        let r2: f64 = 0.25;
        let expected = 0.5 * (-2.0 * r2.ln() / r2).sqrt();
        assert_relative_eq!(polar.sample(&mut engine), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_polar_cache_consumes_no_engine_output() {
        let mut engine = Mt19937::new(42);
        let mut polar = PolarNormal::new();

        polar.sample(&mut engine);
        let snapshot = engine.clone();
        polar.sample(&mut engine);

        let mut a = engine;
        let mut b = snapshot;
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_polar_reset_discards_cache() {
        let mut engine = Mt19937::new(1);
        let mut polar = PolarNormal::new();
        polar.sample(&mut engine);
        assert!(polar.has_cached());

        polar.reset();
        assert!(!polar.has_cached());
    }

    #[test]
    fn test_transform_moments() {
        fn moments<T: NormalTransform>(mut transform: T) -> (f64, f64) {
            let mut engine = Mt19937::new(123_456);
            let n = 100_000;
            let samples: Vec<f64> = (0..n).map(|_| transform.sample(&mut engine)).collect();
            let mean = samples.iter().sum::<f64>() / n as f64;
            let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
            (mean, var)
        }

        for (mean, var) in [moments(Ziggurat), moments(PolarNormal::new())] {
            assert!(mean.abs() < 0.05, "mean {}", mean);
            assert!((var - 1.0).abs() < 0.1, "variance {}", var);
        }
    }
}
