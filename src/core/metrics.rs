//! Manager metrics for observability
//!
//! Counters describing what happened to every message handed to a
//! [`LogManager`](crate::LogManager): filtered, discarded, accepted and
//! delivered, plus backpressure and writer panic events.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for log manager observability
///
/// # Example
///
/// ```
/// use log_manager::ManagerMetrics;
///
/// let metrics = ManagerMetrics::new();
///
/// metrics.record_accepted();
/// metrics.record_delivered();
///
/// assert_eq!(metrics.accepted(), 1);
/// assert_eq!(metrics.delivered(), 1);
/// ```
#[derive(Debug)]
pub struct ManagerMetrics {
    /// Messages queued for dispatch
    accepted: AtomicU64,

    /// Messages below the level threshold
    filtered: AtomicU64,

    /// Messages dropped because no writer was registered or the manager was not started
    discarded: AtomicU64,

    /// Entries handed to every writer
    delivered: AtomicU64,

    /// Writer calls that panicked
    writer_panics: AtomicU64,

    /// Number of times a producer found the queue full and had to wait
    block_events: AtomicU64,
}

impl ManagerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            accepted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            writer_panics: AtomicU64::new(0),
            block_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn writer_panics(&self) -> u64 {
        self.writer_panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn block_events(&self) -> u64 {
        self.block_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_accepted(&self) -> u64 {
        self.accepted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_discarded(&self) -> u64 {
        self.discarded.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_writer_panic(&self) -> u64 {
        self.writer_panics.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_block(&self) -> u64 {
        self.block_events.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.accepted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.discarded.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.writer_panics.store(0, Ordering::Relaxed);
        self.block_events.store(0, Ordering::Relaxed);
    }
}

impl Default for ManagerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ManagerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            accepted: AtomicU64::new(self.accepted()),
            filtered: AtomicU64::new(self.filtered()),
            discarded: AtomicU64::new(self.discarded()),
            delivered: AtomicU64::new(self.delivered()),
            writer_panics: AtomicU64::new(self.writer_panics()),
            block_events: AtomicU64::new(self.block_events()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = ManagerMetrics::new();
        assert_eq!(metrics.accepted(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.discarded(), 0);
        assert_eq!(metrics.delivered(), 0);
        assert_eq!(metrics.writer_panics(), 0);
        assert_eq!(metrics.block_events(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = ManagerMetrics::new();
        assert_eq!(metrics.record_accepted(), 0);
        assert_eq!(metrics.record_accepted(), 1);
        assert_eq!(metrics.accepted(), 2);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = ManagerMetrics::new();
        metrics.record_filtered();
        metrics.record_discarded();
        metrics.record_block();

        metrics.reset();

        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.discarded(), 0);
        assert_eq!(metrics.block_events(), 0);
    }

    #[test]
    fn test_metrics_clone() {
        let metrics = ManagerMetrics::new();
        metrics.record_delivered();

        let snapshot = metrics.clone();
        metrics.record_delivered();

        assert_eq!(snapshot.delivered(), 1);
        assert_eq!(metrics.delivered(), 2);
    }
}
