//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_INITIAL_UPPER_BOUND;

/// Which prime calculator backs the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    /// Sieve snapshot cache that grows on demand
    #[default]
    Cached,
    /// Per-request trial division, no shared state
    TrialDivision,
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cached" | "sieve" => Ok(ServiceKind::Cached),
            "trial-division" | "trial_division" | "simple" => Ok(ServiceKind::TrialDivision),
            other => Err(format!("unknown prime service '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Upper bound of the snapshot built eagerly at startup.
    /// Kept signed so a negative value reaches the service and is rejected there.
    pub initial_upper_bound: i64,
    /// Prime calculator implementation
    pub service: ServiceKind,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `INITIAL_UPPER_BOUND` - Initial sieve bound (default: 10000)
    /// - `PRIME_SERVICE` - `cached` or `trial-division` (default: cached)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            initial_upper_bound: env::var("INITIAL_UPPER_BOUND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_INITIAL_UPPER_BOUND as i64),
            service: env::var("PRIME_SERVICE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            initial_upper_bound: DEFAULT_INITIAL_UPPER_BOUND as i64,
            service: ServiceKind::Cached,
        }
    }
}
