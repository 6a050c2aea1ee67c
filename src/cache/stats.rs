//! Cache Statistics Module
//!
//! Tracks how queries were served: straight from the current snapshot, or after
//! a rebuild that was either installed or lost to a concurrent install.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of cache performance.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CacheStats {
    /// Queries served by the snapshot read on entry
    pub hits: u64,
    /// Sieves built because the current snapshot was too small
    pub rebuilds: u64,
    /// Rebuilt snapshots that won the swap and became current
    pub installs: u64,
    /// Rebuilt snapshots dropped because a concurrent install already covered them
    pub discarded: u64,
    /// Exclusive upper bound of the current snapshot
    pub bound: usize,
    /// Number of primes held by the current snapshot
    pub cached_primes: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Fraction of queries that needed no rebuild.
    ///
    /// Returns hits / (hits + rebuilds), or 0.0 if no queries have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.rebuilds;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Counters updated by concurrent queries without any locking.
///
/// Relaxed ordering is enough: the counters never feed back into cache control flow.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    hits: AtomicU64,
    rebuilds: AtomicU64,
    installs: AtomicU64,
    discarded: AtomicU64,
}

impl StatsRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rebuild(&self) {
        self.rebuilds.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_install(&self) {
        self.installs.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_discard(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Reads all counters together with the current snapshot's coverage.
    pub(crate) fn snapshot(&self, bound: usize, cached_primes: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            rebuilds: self.rebuilds.load(Ordering::Relaxed),
            installs: self.installs.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            bound,
            cached_primes,
        }
    }
}
