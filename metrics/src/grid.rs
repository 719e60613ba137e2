//! The stat grid: four numbers nudged by a bounded random walk every tick.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use rand::Rng;

/// Period between grid updates.
pub const GRID_TICK_MS: u32 = 3_000;

pub const DEFAULT_GLOBAL_REQUESTS: u64 = 60_760;
pub const DEFAULT_LATENCY_S: f64 = 2.4;
pub const DEFAULT_SUCCESS_RATE: f64 = 99.8;
pub const DEFAULT_THREATS_BLOCKED: u32 = 128;

pub const LATENCY_MIN_S: f64 = 0.1;
pub const LATENCY_MAX_S: f64 = 10.0;
pub const SUCCESS_RATE_MIN: f64 = 98.5;
pub const SUCCESS_RATE_MAX: f64 = 100.0;

/// Half-width of the uniform nudge applied to latency and success rate.
const DRIFT: f64 = 0.05;

/// Current values shown by the stat grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsGrid {
    pub global_requests: u64,
    pub latency_s: f64,
    pub success_rate: f64,
    pub threats_blocked: u32,
}

impl Default for MetricsGrid {
    fn default() -> Self {
        Self {
            global_requests: DEFAULT_GLOBAL_REQUESTS,
            latency_s: DEFAULT_LATENCY_S,
            success_rate: DEFAULT_SUCCESS_RATE,
            threats_blocked: DEFAULT_THREATS_BLOCKED,
        }
    }
}

impl MetricsGrid {
    /// Apply one tick of the random walk.
    ///
    /// Global requests only ever grow. Latency is rounded then clamped;
    /// success rate is clamped then rounded, so both stay inside their
    /// bounds and at two decimals.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.global_requests = self.global_requests.saturating_add(rng.random_range(1..=5));

        let latency = round2(self.latency_s + rng.random_range(-DRIFT..DRIFT));
        self.latency_s = latency.clamp(LATENCY_MIN_S, LATENCY_MAX_S);

        let rate = (self.success_rate + rng.random_range(-DRIFT..DRIFT)).clamp(SUCCESS_RATE_MIN, SUCCESS_RATE_MAX);
        self.success_rate = round2(rate);

        let delta: i32 = rng.random_range(-2..=2);
        self.threats_blocked = self.threats_blocked.saturating_add_signed(delta);
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
