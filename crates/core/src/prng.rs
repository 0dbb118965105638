//! Seedable Xorshift64 PRNG.
//!
//! Lessons that scatter shapes draw their positions and colors from this
//! generator so that a given seed always yields the same picture, both in
//! the browser and in CLI snapshots.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Xorshift64 with the (13, 7, 17) shift triple.
///
/// Seed 0 is a fixed point of xorshift, so it is swapped for a non-zero
/// fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform `f32` in [0, 1), built from the top 24 bits.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// `floor(next_f32() * range)`: a uniform integer in [0, range).
    ///
    /// Returns 0 when `range` is 0.
    pub fn random_int(&mut self, range: u32) -> u32 {
        // f32 rounding can land exactly on `range` for large ranges.
        let v = (self.next_f32() * range as f32).floor() as u32;
        v.min(range.saturating_sub(1))
    }

    /// A random opaque color, each channel uniform in [0, 1).
    pub fn random_opaque_color(&mut self) -> Rgba {
        let r = self.next_f32();
        let g = self.next_f32();
        let b = self.next_f32();
        Rgba::opaque(r, g, b)
    }
}
