//! Randomness for the metric simulators.
//!
//! The simulators take any `rand::Rng`; in the browser they get a `SmallRng`
//! seeded from `Math.random()` so no OS entropy source is needed in WASM.

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Spread a unit-interval sample across the full `u64` seed space.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed_from_unit(sample: f64) -> u64 {
    (sample.clamp(0.0, 1.0) * u64::MAX as f64) as u64
}

/// RNG seeded from an explicit unit-interval sample.
pub fn rng_from_unit(sample: f64) -> SmallRng {
    SmallRng::seed_from_u64(seed_from_unit(sample))
}

/// RNG for one component mount.
#[cfg(feature = "hydrate")]
pub fn browser_rng() -> SmallRng {
    rng_from_unit(js_sys::Math::random())
}
