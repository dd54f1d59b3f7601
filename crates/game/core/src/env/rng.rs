//! Random streams for the RANDOM personality.
//!
//! The engine never touches a global RNG. Every draw goes through a
//! [`RandomSource`] handed in by the caller, so a seeded source replays the
//! exact same ghost trajectories.
//!
//! # Determinism
//!
//! All implementations must be deterministic: given the same seed they must
//! produce the same sequence of values. Replays and digest comparisons depend
//! on it.

use core::f64::consts::TAU;

/// Seedable source of uniform floats.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform angle in `[0, 2π)`.
    fn next_angle(&mut self) -> f64 {
        self.next_unit() * TAU
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64 bits of LCG state permuted into 32-bit
/// outputs. Two outputs are combined per float to fill a 53-bit mantissa.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        // Run the seed through one step so nearby seeds diverge immediately.
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// `state' = state × multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl RandomSource for PcgRng {
    fn next_unit(&mut self) -> f64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        let bits = ((high << 32) | low) >> 11;
        bits as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed list of unit draws, cycling when exhausted.
///
/// Handy for pinning RANDOM-personality decisions in tests and for replaying
/// recorded streams. An empty sequence always yields `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
