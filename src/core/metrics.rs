//! Logger metrics for observability
//!
//! Counters describing what the dispatcher and lifecycle controller did.
//! Delivery failures are never logged through the logger itself, so these
//! counters are the only trace a dropped sink leaves.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use sink_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_sinks_dropped(2);
///
/// assert_eq!(metrics.records_emitted(), 1);
/// assert_eq!(metrics.sinks_dropped(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Records formatted and dispatched
    records_emitted: AtomicU64,

    /// Emissions skipped because no sink accepted the severity
    emissions_skipped: AtomicU64,

    /// Records whose body was cut to fit the record capacity
    records_truncated: AtomicU64,

    /// Sinks removed after a failed write or flush
    sinks_dropped: AtomicU64,

    /// File sinks removed because they could not be reopened
    rotation_failures: AtomicU64,

    /// Callback invocations that panicked
    callback_panics: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_emitted: AtomicU64::new(0),
            emissions_skipped: AtomicU64::new(0),
            records_truncated: AtomicU64::new(0),
            sinks_dropped: AtomicU64::new(0),
            rotation_failures: AtomicU64::new(0),
            callback_panics: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_emitted(&self) -> u64 {
        self.records_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn emissions_skipped(&self) -> u64 {
        self.emissions_skipped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_truncated(&self) -> u64 {
        self.records_truncated.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sinks_dropped(&self) -> u64 {
        self.sinks_dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotation_failures(&self) -> u64 {
        self.rotation_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn callback_panics(&self) -> u64 {
        self.callback_panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.records_emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_skipped(&self) -> u64 {
        self.emissions_skipped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_truncated(&self) -> u64 {
        self.records_truncated.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sinks_dropped(&self, count: usize) -> u64 {
        self.sinks_dropped.fetch_add(count as u64, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rotation_failures(&self, count: usize) -> u64 {
        self.rotation_failures.fetch_add(count as u64, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_callback_panic(&self) -> u64 {
        self.callback_panics.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of emitted records that had to be truncated (0.0 - 100.0)
    pub fn truncation_rate(&self) -> f64 {
        let emitted = self.records_emitted() as f64;
        if emitted == 0.0 {
            0.0
        } else {
            (self.records_truncated() as f64 / emitted) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.records_emitted.store(0, Ordering::Relaxed);
        self.emissions_skipped.store(0, Ordering::Relaxed);
        self.records_truncated.store(0, Ordering::Relaxed);
        self.sinks_dropped.store(0, Ordering::Relaxed);
        self.rotation_failures.store(0, Ordering::Relaxed);
        self.callback_panics.store(0, Ordering::Relaxed);
    }
}
