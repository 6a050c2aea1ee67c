//! Prime Cache - A prime range server
//!
//! Answers "primes in [lower, upper)" queries from a lock-free sieve cache that
//! grows on demand.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use api::AppState;
pub use cache::SieveCache;
pub use config::Config;
pub use error::PrimeError;
pub use service::PrimeService;
