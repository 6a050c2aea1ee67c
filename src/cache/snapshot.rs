//! Sieve Snapshot Module
//!
//! Immutable table of every prime below a bound, built once by a sieve of
//! Eratosthenes and then only read.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::error::{PrimeError, Result};
use crate::models::PrimeRange;

// == Sieve Snapshot ==
/// Every prime in `[2, bound)`, strictly ascending.
///
/// Neither field changes after construction, which is what lets a snapshot be
/// shared between any number of readers while the cache moves on to a larger one.
#[derive(Debug)]
pub struct SieveSnapshot {
    /// Exclusive upper limit covered by this snapshot
    bound: usize,
    /// All primes below `bound`
    primes: Arc<[usize]>,
}

impl SieveSnapshot {
    // == Constructor ==
    /// Sieves all primes strictly below `bound`.
    ///
    /// O(bound · log log bound) time and one byte of marking space per candidate.
    pub fn new(bound: usize) -> Self {
        let started = Instant::now();
        let primes: Arc<[usize]> = sieve(bound).into();

        info!(
            "Populated {} primes under {} upper bound took {} millis",
            primes.len(),
            bound,
            started.elapsed().as_millis()
        );

        Self { bound, primes }
    }

    // == Accessors ==
    /// Exclusive upper limit of coverage.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// All cached primes, ascending.
    pub fn primes(&self) -> &[usize] {
        &self.primes
    }

    /// Number of cached primes.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Whether a query with exclusive upper bound `upper` can be served from here.
    pub fn covers(&self, upper: usize) -> bool {
        upper <= self.bound
    }

    // == Extraction ==
    /// Returns a read-only view of the primes in `[lower, upper)`.
    ///
    /// Requires `lower <= upper <= bound`; anything else would silently drop
    /// primes this snapshot never computed.
    pub fn range(&self, lower: usize, upper: usize) -> Result<PrimeRange> {
        if lower > upper {
            return Err(PrimeError::InvalidRange(format!(
                "Lower bound {} is greater than upper bound {}",
                lower, upper
            )));
        }
        if !self.covers(upper) {
            return Err(PrimeError::InvalidRange(format!(
                "Upper bound {} exceeds snapshot bound {}",
                upper, self.bound
            )));
        }

        let start = self.index_of(lower);
        let end = self.index_of(upper);
        Ok(PrimeRange::view(Arc::clone(&self.primes), start..end))
    }

    /// Index of `target` if cached, otherwise the index it would be inserted at.
    fn index_of(&self, target: usize) -> usize {
        match self.primes.binary_search(&target) {
            Ok(index) | Err(index) => index,
        }
    }
}

// == Sieve ==
/// Classic sieve of Eratosthenes over `[0, bound)`.
fn sieve(bound: usize) -> Vec<usize> {
    if bound < 3 {
        return Vec::new();
    }

    let mut candidates = vec![true; bound];
    candidates[0] = false;
    candidates[1] = false;

    let root = ceil_sqrt(bound);
    for i in 2..=root.min(bound - 1) {
        if !candidates[i] {
            continue;
        }
        let mut n = i;
        // Compare before stepping so `n + i` can never overflow or pass the end.
        while bound - n > i {
            n += i;
            candidates[n] = false;
        }
    }

    candidates
        .iter()
        .enumerate()
        .filter_map(|(n, &is_prime)| is_prime.then_some(n))
        .collect()
}

/// Smallest `r` with `r * r >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.saturating_mul(root) > n {
        root -= 1;
    }
    while root.saturating_mul(root) < n {
        root += 1;
    }
    root
}
