//! 32-bit Mersenne Twister engine.
//!
//! This module provides [`Mt19937`], the MT19937 generator of Matsumoto and
//! Nishimura with the standard `init_genrand` seeding procedure. Its output
//! stream matches the reference implementation bit for bit, so a given seed
//! reproduces the same sequence on every platform.

use std::fmt;

use rand::{RngCore, SeedableRng};

/// Degree of recurrence (state size in 32-bit words).
const N: usize = 624;
/// Middle word offset.
const M: usize = 397;
/// Coefficients of the rational normal form twist matrix.
const MATRIX_A: u32 = 0x9908_b0df;
/// Most significant bit.
const UPPER_MASK: u32 = 0x8000_0000;
/// Least significant 31 bits.
const LOWER_MASK: u32 = 0x7fff_ffff;
/// Initialisation multiplier from the reference implementation.
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Seed used by [`Mt19937::default`].
pub const MT19937_DEFAULT_SEED: u32 = 5489;

/// MT19937 pseudo-random engine with a 19937-bit period.
///
/// Implements [`RngCore`] and [`SeedableRng`], so it can drive any
/// `rand_distr` distribution.
///
/// # Examples
///
/// ```rust
/// use normal_core::engine::Mt19937;
/// use rand::RngCore;
///
/// let mut engine = Mt19937::new(5489);
/// assert_eq!(engine.next_u32(), 3_499_211_612);
/// ```
#[derive(Clone)]
pub struct Mt19937 {
    /// Twisted state words.
    state: [u32; N],
    /// Position of the next word to temper; `N` forces a twist.
    index: usize,
    /// Seed used for initialisation.
    seed: u32,
}

impl Mt19937 {
    /// Creates an engine initialised with the given 32-bit seed.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self {
            state,
            index: N,
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Regenerates all `N` state words.
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(MT19937_DEFAULT_SEED)
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("seed", &self.seed)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Concatenates two consecutive 32-bit outputs, low word first.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Seeds from the low 32 bits of `state`, matching `init_genrand`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_first_outputs() {
        let mut engine = Mt19937::default();
        assert_eq!(engine.next_u32(), 3_499_211_612);
        assert_eq!(engine.next_u32(), 581_869_302);
        assert_eq!(engine.next_u32(), 3_890_346_734);
    }

    #[test]
    fn test_reference_ten_thousandth_output() {
        let mut engine = Mt19937::new(MT19937_DEFAULT_SEED);
        let mut value = 0;
        for _ in 0..10_000 {
            value = engine.next_u32();
        }
        assert_eq!(value, 4_123_659_995);
    }

    #[test]
    fn test_next_u64_is_low_word_first() {
        let mut words = Mt19937::new(7);
        let lo = u64::from(words.next_u32());
        let hi = u64::from(words.next_u32());

        let mut wide = Mt19937::new(7);
        assert_eq!(wide.next_u64(), (hi << 32) | lo);
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut words = Mt19937::new(99);
        let first = words.next_u32().to_le_bytes();
        let second = words.next_u32().to_le_bytes();

        let mut engine = Mt19937::new(99);
        let mut buffer = [0u8; 6];
        engine.fill_bytes(&mut buffer);
        assert_eq!(&buffer[..4], &first);
        assert_eq!(&buffer[4..], &second[..2]);
    }

    #[test]
    fn test_seedable_rng_matches_new() {
        let mut a = Mt19937::seed_from_u64(123_456);
        let mut b = Mt19937::new(123_456);
        let mut c = Mt19937::from_seed(123_456u32.to_le_bytes());
        for _ in 0..1_000 {
            let expected = b.next_u32();
            assert_eq!(a.next_u32(), expected);
            assert_eq!(c.next_u32(), expected);
        }
        assert_eq!(a.seed(), 123_456);
    }

    #[test]
    fn test_debug_omits_state() {
        let engine = Mt19937::new(42);
        let rendered = format!("{:?}", engine);
        assert!(rendered.contains("seed: 42"));
        assert!(rendered.len() < 100);
    }
}
