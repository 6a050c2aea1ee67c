//! Sieve Cache Module
//!
//! Serves range queries from the current sieve snapshot and grows coverage on
//! demand by building a larger snapshot and publishing it with compare-and-swap.
//! Readers never wait on a rebuild; a snapshot a reader already holds stays valid
//! for as long as the reader keeps it.

use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwap;
use tracing::{debug, info};

use crate::cache::{CacheStats, SieveSnapshot, StatsRecorder, DEFAULT_INITIAL_UPPER_BOUND};
use crate::error::{PrimeError, Result};
use crate::models::{PrimeCount, PrimeRange};
use crate::service::{validate_range, PrimeService, MAX_UPPER_BOUND};

// == Sieve Cache ==
/// Lock-free, monotonically growing prime cache.
///
/// The only mutable state is the pointer to the current snapshot, and it only
/// ever moves to a snapshot with a larger bound.
#[derive(Debug)]
pub struct SieveCache {
    /// Snapshot every query starts from
    current: ArcSwap<SieveSnapshot>,
    /// Query outcome counters
    stats: StatsRecorder,
}

impl SieveCache {
    // == Constructors ==
    /// Creates a cache seeded with primes below `DEFAULT_INITIAL_UPPER_BOUND`.
    pub fn new() -> Self {
        Self::seeded(DEFAULT_INITIAL_UPPER_BOUND)
    }

    /// Creates a cache whose first snapshot covers `[0, initial_bound)`.
    ///
    /// The snapshot is built eagerly, before this returns.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `initial_bound` is negative or above
    /// `MAX_UPPER_BOUND`.
    pub fn with_initial_bound(initial_bound: i64) -> Result<Self> {
        if initial_bound < 0 {
            return Err(PrimeError::InvalidConfiguration(format!(
                "Cannot initialise prime cache with negative upper bound {}",
                initial_bound
            )));
        }
        if initial_bound > MAX_UPPER_BOUND {
            return Err(PrimeError::InvalidConfiguration(format!(
                "Initial upper bound {} exceeds maximum of {}",
                initial_bound, MAX_UPPER_BOUND
            )));
        }
        let bound = usize::try_from(initial_bound).map_err(|_| {
            PrimeError::InvalidConfiguration(format!(
                "Initial upper bound {} is too large for this platform",
                initial_bound
            ))
        })?;
        Ok(Self::seeded(bound))
    }

    fn seeded(bound: usize) -> Self {
        Self {
            current: ArcSwap::from_pointee(SieveSnapshot::new(bound)),
            stats: StatsRecorder::new(),
        }
    }

    // == Query ==
    /// Returns the primes in `[lower, upper)`.
    ///
    /// If the current snapshot does not reach `upper`, a snapshot with bound
    /// `upper` is built at most once per call and offered to the cache until it
    /// is installed or a concurrent install makes it unnecessary.
    ///
    /// # Errors
    /// `InvalidRange` if either bound is negative, `lower > upper`, or `upper`
    /// exceeds `MAX_UPPER_BOUND`. Nothing is built or swapped in that case.
    pub fn query(&self, lower: i64, upper: i64) -> Result<PrimeRange> {
        let (lower, upper) = validate_range(lower, upper)?;
        let started = Instant::now();
        debug!("Starting to generate primes for range {} -> {}", lower, upper);

        let snapshot = self.covering(upper);
        let range = snapshot.range(lower, upper)?.with_elapsed(started.elapsed());

        debug!(
            "Found {} primes under {} upper bound took {} millis",
            range.num_primes(),
            upper,
            range.elapsed_millis()
        );
        Ok(range)
    }

    // == Count ==
    /// Returns how many primes lie in `[lower, upper)`.
    ///
    /// # Errors
    /// Same as [`SieveCache::query`].
    pub fn count(&self, lower: i64, upper: i64) -> Result<PrimeCount> {
        self.query(lower, upper).map(PrimeCount::from)
    }

    /// Yields a snapshot whose bound is at least `upper`, installing one if needed.
    fn covering(&self, upper: usize) -> Arc<SieveSnapshot> {
        let mut built: Option<Arc<SieveSnapshot>> = None;

        loop {
            let current = self.current.load_full();
            if current.covers(upper) {
                match built {
                    None => self.stats.record_hit(),
                    Some(_) => {
                        debug!(
                            "Another request grew the cache to {} first, discarding ours",
                            current.bound()
                        );
                        self.stats.record_discard();
                    }
                }
                return current;
            }

            let candidate = built.get_or_insert_with(|| {
                info!(
                    "Creating new cache with upper bound {}. Old upper bound {}",
                    upper,
                    current.bound()
                );
                self.stats.record_rebuild();
                Arc::new(SieveSnapshot::new(upper))
            });

            let previous = self.current.compare_and_swap(&current, Arc::clone(candidate));
            if Arc::ptr_eq(&*previous, &current) {
                self.stats.record_install();
                return Arc::clone(candidate);
            }
            debug!("Lost cache swap to bound {}, retrying", previous.bound());
        }
    }

    // == Introspection ==
    /// Exclusive upper bound of the current snapshot.
    pub fn bound(&self) -> usize {
        self.current.load().bound()
    }

    /// The current snapshot. Holding it keeps it alive across later growth.
    pub fn snapshot(&self) -> Arc<SieveSnapshot> {
        self.current.load_full()
    }

    /// Counters plus the current snapshot's coverage.
    pub fn stats(&self) -> CacheStats {
        let current = self.current.load();
        self.stats.snapshot(current.bound(), current.len())
    }
}

impl Default for SieveCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimeService for SieveCache {
    fn name(&self) -> &'static str {
        "cached-sieve"
    }

    fn primes(&self, lower: i64, upper: i64) -> Result<PrimeRange> {
        self.query(lower, upper)
    }

    fn prime_count(&self, lower: i64, upper: i64) -> Result<PrimeCount> {
        self.count(lower, upper)
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        Some(self.stats())
    }
}
