//! Transaction ledger behind the summary cards.
//!
//! DESIGN
//! ======
//! Requests arrive in small batches on one timer and are processed in small
//! batches on another. Processing is two-phase: [`TransactionLedger::take_batch`]
//! removes the batch from the queue immediately and returns a [`Settlement`];
//! the host applies it with [`TransactionLedger::settle`] after
//! [`SETTLE_DELAY_MS`], so the queue card drops before the issued and rejected
//! cards move.
//!
//! Both timer periods are drawn once per mount, not per tick.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use std::ops::RangeInclusive;

use rand::Rng;

use crate::summary::{FALLBACK_ISSUED, FALLBACK_QUEUED, FALLBACK_REJECTED, FALLBACK_TOTAL};

/// Delay between taking a batch off the queue and crediting its outcome.
pub const SETTLE_DELAY_MS: u32 = 500;

/// Enqueue period is drawn from `[60 s, 120 s)`.
const ENQUEUE_PERIOD_MS: std::ops::Range<u32> = 60_000..120_000;
/// Process period is drawn from `[60 s, 80 s)`.
const PROCESS_PERIOD_MS: std::ops::Range<u32> = 60_000..80_000;
/// Requests added or processed per batch.
const BATCH: RangeInclusive<u64> = 2..=4;

/// Share of a processed batch that is issued, in tenths.
const ISSUED_TENTHS: u64 = 6;

/// Outcome of one processed batch, waiting to be credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub issued: u64,
    pub rejected: u64,
}

impl Settlement {
    /// Split `count` processed requests into issued (60%, rounded down) and rejected.
    #[must_use]
    pub fn split(count: u64) -> Self {
        let issued = count * ISSUED_TENTHS / 10;
        Self { issued, rejected: count - issued }
    }
}

/// Counts shown by the four transaction cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionLedger {
    pub total: u64,
    pub rejected: u64,
    pub issued: u64,
    pub queued: u64,
}

impl Default for TransactionLedger {
    fn default() -> Self {
        Self {
            total: FALLBACK_TOTAL,
            rejected: FALLBACK_REJECTED,
            issued: FALLBACK_ISSUED,
            queued: FALLBACK_QUEUED,
        }
    }
}

impl TransactionLedger {
    /// New requests arrive: 2 to 4 are added to both the total and the queue.
    ///
    /// Returns how many were added.
    pub fn enqueue<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u64 {
        let added = rng.random_range(BATCH);
        self.total = self.total.saturating_add(added);
        self.queued = self.queued.saturating_add(added);
        added
    }

    /// Take up to 2 to 4 requests off the queue.
    ///
    /// Returns `None` when the queue is empty. The returned settlement must be
    /// credited with [`Self::settle`].
    pub fn take_batch<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Settlement> {
        if self.queued == 0 {
            return None;
        }
        let count = self.queued.min(rng.random_range(BATCH));
        self.queued -= count;
        Some(Settlement::split(count))
    }

    /// Credit a processed batch to the issued and rejected counts.
    pub fn settle(&mut self, settlement: Settlement) {
        self.issued = self.issued.saturating_add(settlement.issued);
        self.rejected = self.rejected.saturating_add(settlement.rejected);
    }
}

/// Draw the enqueue timer period for one mount.
pub fn enqueue_period_ms<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(ENQUEUE_PERIOD_MS)
}

/// Draw the process timer period for one mount.
pub fn process_period_ms<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(PROCESS_PERIOD_MS)
}
