//! Cache Module
//!
//! Provides the growing sieve cache behind the prime range queries.

mod sieve_cache;
mod snapshot;
mod stats;


// Re-export public types
pub use sieve_cache::SieveCache;
pub use snapshot::SieveSnapshot;
pub use stats::CacheStats;
pub(crate) use stats::StatsRecorder;

// == Public Constants ==
/// Bound of the snapshot built when a cache is created without an explicit one
pub const DEFAULT_INITIAL_UPPER_BOUND: usize = 10_000;
