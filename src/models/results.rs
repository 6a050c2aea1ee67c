//! Query result value objects
//!
//! `PrimeRange` is what a range query produces and `PrimeCount` wraps it when
//! the caller only wants the size. Both serialize directly as response bodies.

use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use serde::ser::{Serialize, SerializeStruct, Serializer};

// == Prime Range ==
/// Primes in a requested `[lower, upper)` plus the time spent producing them.
///
/// Holds a read-only window into a shared, immutable prime table, so a result
/// extracted from a cache snapshot never copies the snapshot or lets the caller
/// mutate it.
#[derive(Debug, Clone)]
pub struct PrimeRange {
    source: Arc<[usize]>,
    window: Range<usize>,
    elapsed: Duration,
}

impl PrimeRange {
    // == Constructors ==
    /// Creates a view over `source[window]`.
    ///
    /// `window` must lie within `source`.
    pub(crate) fn view(source: Arc<[usize]>, window: Range<usize>) -> Self {
        debug_assert!(window.start <= window.end && window.end <= source.len());
        Self {
            source,
            window,
            elapsed: Duration::ZERO,
        }
    }

    /// Creates a result that owns its primes outright.
    pub fn from_vec(primes: Vec<usize>) -> Self {
        let len = primes.len();
        Self::view(primes.into(), 0..len)
    }

    /// Stamps the wall-clock time spent servicing the request.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    // == Accessors ==
    /// The primes, ascending.
    pub fn primes(&self) -> &[usize] {
        &self.source[self.window.clone()]
    }

    pub fn num_primes(&self) -> usize {
        self.window.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }

    pub fn elapsed_millis(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Serialize for PrimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PrimeRange", 4)?;
        state.serialize_field("primes", self.primes())?;
        state.serialize_field("num_primes", &self.num_primes())?;
        state.serialize_field("elapsed_nanos", &self.elapsed_nanos())?;
        state.serialize_field("elapsed_millis", &self.elapsed_millis())?;
        state.end()
    }
}

// == Prime Count ==
/// Size and elapsed time of a `PrimeRange`, without exposing the primes.
#[derive(Debug, Clone)]
pub struct PrimeCount {
    range: PrimeRange,
}

impl PrimeCount {
    pub fn count(&self) -> usize {
        self.range.num_primes()
    }

    pub fn elapsed(&self) -> Duration {
        self.range.elapsed()
    }
}

impl From<PrimeRange> for PrimeCount {
    fn from(range: PrimeRange) -> Self {
        Self { range }
    }
}

impl Serialize for PrimeCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PrimeCount", 3)?;
        state.serialize_field("num_primes", &self.count())?;
        state.serialize_field("elapsed_nanos", &self.range.elapsed_nanos())?;
        state.serialize_field("elapsed_millis", &self.range.elapsed_millis())?;
        state.end()
    }
}
