//! Result and Response models for the prime server
//!
//! `results` holds the query value objects returned by every prime service;
//! `responses` holds the remaining HTTP response bodies.

pub mod responses;
pub mod results;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use results::{PrimeCount, PrimeRange};
