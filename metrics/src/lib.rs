//! Dashboard metric simulators.
//!
//! Everything the stat and transaction cards display lives here as plain
//! state plus a `step` driven by an injected RNG. The UI owns the timers;
//! this crate owns the arithmetic, the clamps and the wire type of the one
//! real data call.
//!
//! Modules:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`grid`] | Random-walk stat grid (requests, latency, success rate, threats) |
//! | [`queue`] | Transaction ledger: enqueue, batch processing, delayed settlement |
//! | [`summary`] | Dashboard-summary JSON and its fallback |
//! | [`format`] | Display formatting for counts, seconds and percentages |

pub mod format;
pub mod grid;
pub mod queue;
pub mod summary;
