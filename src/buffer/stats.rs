//! Hash index statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for hash index activity.
///
/// All fields are atomic so `lookup(&self)` can record hits and misses
/// without a mutable borrow. `Ordering::Relaxed` throughout: counters are
/// independent and only need atomicity.
///
/// # Example
/// ```
/// use bufhash::IndexStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = IndexStats::new();
/// stats.hits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.hits.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug, Default)]
pub struct IndexStats {
    /// Lookups that found a frame.
    pub hits: AtomicU64,

    /// Lookups that found nothing.
    pub misses: AtomicU64,

    /// Frames compared while walking chains during lookups.
    pub probes: AtomicU64,

    /// Successful inserts.
    pub inserts: AtomicU64,

    /// Successful deletes.
    pub deletes: AtomicU64,

    /// Inserts rejected with a bad frame index.
    pub rejected: AtomicU64,
}

impl IndexStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            probes: self.probes.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.probes.store(0, Ordering::Relaxed);
        self.inserts.store(0, Ordering::Relaxed);
        self.deletes.store(0, Ordering::Relaxed);
        self.rejected.store(0, Ordering::Relaxed);
    }

    pub(crate) fn record_lookup(&self, found: bool, steps: usize) {
        if found {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        self.probes.fetch_add(steps as u64, Ordering::Relaxed);
    }
}

/// A point-in-time copy of [`IndexStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub probes: u64,
    pub inserts: u64,
    pub deletes: u64,
    pub rejected: u64,
}

impl StatsSnapshot {
    /// Total lookups.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Lookup hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Average frames compared per lookup.
    pub fn avg_probes(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.probes as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, inserts: {}, deletes: {}, hit_rate: {:.2}%, avg_probes: {:.2} }}",
            self.hits,
            self.misses,
            self.inserts,
            self.deletes,
            self.hit_rate() * 100.0,
            self.avg_probes()
        )
    }
}
