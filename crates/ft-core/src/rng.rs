//! Deterministic per-device and fleet-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each device gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (slot * MIXING_CONSTANT)
//!
//! where `slot` is the device's position in the fleet.  The mixing constant
//! is the 64-bit fractional part of the golden ratio, which spreads
//! consecutive slots across the seed space.  Devices never share RNG state,
//! so a replay produces identical payloads whether devices are stepped
//! sequentially or on a thread pool.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Compass headings a device may snap to when it changes direction.
pub const CARDINAL_HEADINGS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

// ── DeviceRng ─────────────────────────────────────────────────────────────────

/// Per-device deterministic RNG.  Owned by the device, never shared.
pub struct DeviceRng(SmallRng);

impl DeviceRng {
    /// Seed deterministically from the run's global seed and a fleet slot.
    pub fn new(global_seed: u64, slot: u64) -> Self {
        let seed = global_seed ^ slot.wrapping_mul(MIXING_CONSTANT);
        DeviceRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (single-device runs without a `--seed`).
    pub fn from_entropy() -> Self {
        DeviceRng(SmallRng::from_entropy())
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// One of [`CARDINAL_HEADINGS`], uniformly.
    #[inline]
    pub fn cardinal_heading(&mut self) -> f64 {
        CARDINAL_HEADINGS[self.0.gen_range(0..CARDINAL_HEADINGS.len())]
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Fleet-level RNG for launch-time draws (ids, start positions, headings).
///
/// Used only while building the fleet, on one thread.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn cardinal_heading(&mut self) -> f64 {
        CARDINAL_HEADINGS[self.0.gen_range(0..CARDINAL_HEADINGS.len())]
    }
}
