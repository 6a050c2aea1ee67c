//! Prime Service Module
//!
//! The query contract shared by every prime calculator the server can run.

mod trial_division;

pub use trial_division::TrialDivisionPrimeService;

use crate::cache::CacheStats;
use crate::error::{PrimeError, Result};
use crate::models::{PrimeCount, PrimeRange};

/// Answers "which primes lie in `[lower, upper)`" and "how many".
///
/// Implementations must be shareable across request handlers.
pub trait PrimeService: Send + Sync {
    /// Short identifier used in logs and the stats endpoint.
    fn name(&self) -> &'static str;

    /// All primes in `[lower, upper)`, ascending.
    ///
    /// # Errors
    /// `InvalidRange` if either bound is negative or `lower > upper`.
    fn primes(&self, lower: i64, upper: i64) -> Result<PrimeRange>;

    /// Number of primes in `[lower, upper)`.
    ///
    /// # Errors
    /// Same as [`PrimeService::primes`].
    fn prime_count(&self, lower: i64, upper: i64) -> Result<PrimeCount> {
        self.primes(lower, upper).map(PrimeCount::from)
    }

    /// Cache counters, for implementations that keep a cache.
    fn cache_stats(&self) -> Option<CacheStats> {
        None
    }
}

/// Largest accepted bound. Sieving allocates one byte per candidate, so bounds
/// stay within the 32-bit range a request could ever ask for.
pub const MAX_UPPER_BOUND: i64 = i32::MAX as i64;

/// Checks a requested range and converts it to unsigned bounds.
pub fn validate_range(lower: i64, upper: i64) -> Result<(usize, usize)> {
    if lower < 0 || upper < 0 {
        return Err(PrimeError::InvalidRange(
            "Cannot request primes in negative range".to_string(),
        ));
    }
    if lower > upper {
        return Err(PrimeError::InvalidRange(
            "Lower bound of range cannot be greater than upper bound".to_string(),
        ));
    }
    if upper > MAX_UPPER_BOUND {
        return Err(PrimeError::InvalidRange(format!(
            "Upper bound {} exceeds maximum of {}",
            upper, MAX_UPPER_BOUND
        )));
    }

    let to_usize = |value: i64| {
        usize::try_from(value).map_err(|_| {
            PrimeError::InvalidRange(format!("Bound {} is too large for this platform", value))
        })
    };
    Ok((to_usize(lower)?, to_usize(upper)?))
}
