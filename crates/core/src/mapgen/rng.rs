//! Seedable random source threaded explicitly through generation so every
//! dungeon is reproducible from a single u64.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};

pub struct DungeonRng {
    inner: ChaCha8Rng,
}

impl DungeonRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (max - min) as u64 + 1;
        min + (self.inner.next_u64() % span) as i32
    }

    /// Uniform f64 in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        // 53 high bits, the full mantissa of an f64.
        (self.inner.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index into a collection of `len` elements.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.inner.next_u64() % len as u64) as usize
    }
}
