//! API Handlers
//!
//! HTTP request handlers for each prime server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tracing::warn;

use crate::cache::SieveCache;
use crate::config::{Config, ServiceKind};
use crate::error::{PrimeError, Result};
use crate::models::{HealthResponse, PrimeCount, PrimeRange, StatsResponse};
use crate::service::{PrimeService, TrialDivisionPrimeService};

/// Usage text served at the root path.
pub const GREETING: &str = "<h2>Welcome to Prime Generator.</h2><b>Usage:</b><br>\
    http://host:port/primes/lower/upper<br>\
    http://host:port/numprimes/lower/upper<br><br>\
    where lower and upper are non-negative integers and lower <= upper";

/// Application state shared across all handlers.
///
/// Contains the active prime service behind an `Arc`; the service does its
/// own synchronization, so no lock wraps it here.
#[derive(Clone)]
pub struct AppState {
    /// Prime calculator answering every query
    pub primes: Arc<dyn PrimeService>,
}

impl AppState {
    /// Creates a new AppState around the given prime service.
    pub fn new(service: impl PrimeService + 'static) -> Self {
        Self {
            primes: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the configured prime service; the cached service sieves its
    /// initial snapshot before this returns.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the initial upper bound is negative or too large.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.service {
            ServiceKind::Cached => Ok(Self::new(SieveCache::with_initial_bound(
                config.initial_upper_bound,
            )?)),
            ServiceKind::TrialDivision => Ok(Self::new(TrialDivisionPrimeService::new())),
        }
    }
}

/// Runs CPU-bound prime work off the async executor.
async fn run_blocking<T, F>(job: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job).await.map_err(|err| {
        warn!("Prime worker failed: {}", err);
        PrimeError::Internal(format!("Prime worker failed: {}", err))
    })?
}

/// Handler for GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(GREETING)
}

/// Handler for GET /primes/:lower/:upper
///
/// Lists the primes in `[lower, upper)`.
pub async fn primes_handler(
    State(state): State<AppState>,
    Path((lower, upper)): Path<(i64, i64)>,
) -> Result<Json<PrimeRange>> {
    let service = Arc::clone(&state.primes);
    let range = run_blocking(move || service.primes(lower, upper)).await?;

    Ok(Json(range))
}

/// Handler for GET /numprimes/:lower/:upper
///
/// Counts the primes in `[lower, upper)`.
pub async fn num_primes_handler(
    State(state): State<AppState>,
    Path((lower, upper)): Path<(i64, i64)>,
) -> Result<Json<PrimeCount>> {
    let service = Arc::clone(&state.primes);
    let count = run_blocking(move || service.prime_count(lower, upper)).await?;

    Ok(Json(count))
}

/// Handler for GET /stats
///
/// Returns the active service and, if it caches, its counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.primes.name(),
        state.primes.cache_stats(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
