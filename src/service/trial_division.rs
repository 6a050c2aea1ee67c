//! Trial Division Service
//!
//! Non-caching calculator that tests every candidate on each request.

use std::time::Instant;

use tracing::debug;

use super::{validate_range, PrimeService};
use crate::error::Result;
use crate::models::PrimeRange;

/// Calculates primes by trial division up to the square root of each candidate.
///
/// Holds no state, so it is mostly useful as a baseline for the cached service
/// and as a reference in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivisionPrimeService;

impl TrialDivisionPrimeService {
    pub fn new() -> Self {
        Self
    }

    /// Whether `n` is prime.
    pub fn is_prime(n: usize) -> bool {
        if n < 2 {
            return false;
        }
        if n <= 3 {
            return true;
        }
        let mut factor = 2;
        while factor <= n / factor {
            if n % factor == 0 {
                return false;
            }
            factor += 1;
        }
        true
    }
}

impl PrimeService for TrialDivisionPrimeService {
    fn name(&self) -> &'static str {
        "trial-division"
    }

    fn primes(&self, lower: i64, upper: i64) -> Result<PrimeRange> {
        let (lower, upper) = validate_range(lower, upper)?;
        let started = Instant::now();

        let primes: Vec<usize> = (lower..upper).filter(|&n| Self::is_prime(n)).collect();
        let range = PrimeRange::from_vec(primes).with_elapsed(started.elapsed());

        debug!(
            "Trial division found {} primes in {} -> {}",
            range.num_primes(),
            lower,
            upper
        );
        Ok(range)
    }
}
