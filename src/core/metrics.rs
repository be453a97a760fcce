//! Logger metrics for observability
//!
//! Counts what happened to each logging call: posted to a webhook, filtered
//! out by the threshold, or failed in transport.

use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery counters for a logger
///
/// # Example
///
/// ```
/// use webhook_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_sent();
/// metrics.record_failed();
///
/// assert_eq!(metrics.sent_count(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages accepted by a transport
    sent_count: AtomicU64,

    /// Messages rejected by a transport
    failed_count: AtomicU64,

    /// Messages gated out by the threshold
    filtered_count: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            sent_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    /// Record a successful post, returning the previous count
    #[inline]
    pub fn record_sent(&self) -> u64 {
        self.sent_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed post, returning the previous count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a message below the threshold, returning the previous count
    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Get failure rate as a percentage (0.0 - 100.0) of attempted posts
    ///
    /// Filtered messages are not attempts. Returns 0.0 if nothing was posted.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count() as f64;
        let total = self.sent_count() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.sent_count.store(0, Ordering::Relaxed);
        self.failed_count.store(0, Ordering::Relaxed);
        self.filtered_count.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            sent_count: AtomicU64::new(self.sent_count()),
            failed_count: AtomicU64::new(self.failed_count()),
            filtered_count: AtomicU64::new(self.filtered_count()),
        }
    }
}
