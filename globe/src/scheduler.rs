//! Cooperative single-threaded timer queue.
//!
//! DESIGN
//! ======
//! The globe never owns browser timers. Timers are plain deadlines in host
//! milliseconds, and the host drives the queue from its animation-frame loop
//! by calling [`TimerQueue::pop_due`] with the current time. Due timers pop
//! in deadline order and repeating timers pop once per elapsed period, so a
//! late frame replays every tick at its exact scheduled time.
//!
//! Each timer is identified by a caller-chosen key; scheduling a key that is
//! already pending replaces it, and cancelling a key that is not pending is
//! a no-op.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Timer<K> {
    key: K,
    deadline: f64,
    period: Option<f64>,
}

/// A timer that came due, with the deadline it was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fired<K> {
    pub key: K,
    pub deadline: f64,
}

/// Pending timers keyed by `K`.
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    timers: Vec<Timer<K>>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self { timers: Vec::new() }
    }
}

impl<K: Copy + PartialEq> TimerQueue<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire once at `deadline`.
    pub fn schedule_once(&mut self, key: K, deadline: f64) {
        self.insert(Timer { key, deadline, period: None });
    }

    /// Schedule `key` to fire at `first_deadline` and every `period` after.
    ///
    /// A non-positive period degrades to a one-shot timer.
    pub fn schedule_every(&mut self, key: K, first_deadline: f64, period: f64) {
        let period = (period > 0.0).then_some(period);
        self.insert(Timer { key, deadline: first_deadline, period });
    }

    /// Cancel `key` if pending.
    pub fn cancel(&mut self, key: K) {
        self.timers.retain(|t| t.key != key);
    }

    /// Cancel every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.timers.iter().any(|t| t.key == key)
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Deadline of `key`, if pending.
    #[cfg(test)]
    #[must_use]
    pub fn deadline(&self, key: K) -> Option<f64> {
        self.timers.iter().find(|t| t.key == key).map(|t| t.deadline)
    }

    /// Pop the earliest timer due at or before `now`.
    ///
    /// Repeating timers are re-armed one period after the deadline they
    /// fired for. Ties fire in scheduling order.
    pub fn pop_due(&mut self, now: f64) -> Option<Fired<K>> {
        let mut earliest: Option<usize> = None;
        for (idx, timer) in self.timers.iter().enumerate() {
            if timer.deadline > now {
                continue;
            }
            match earliest {
                Some(best) if self.timers[best].deadline <= timer.deadline => {}
                _ => earliest = Some(idx),
            }
        }
        let idx = earliest?;
        let timer = self.timers.remove(idx);
        if let Some(period) = timer.period {
            self.timers.push(Timer { deadline: timer.deadline + period, ..timer });
        }
        Some(Fired { key: timer.key, deadline: timer.deadline })
    }

    fn insert(&mut self, timer: Timer<K>) {
        self.cancel(timer.key);
        self.timers.push(timer);
    }
}
