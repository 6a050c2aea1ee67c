//! API Module
//!
//! HTTP handlers and routing for the prime server REST API.
//!
//! # Endpoints
//! - `GET /` - Usage greeting
//! - `GET /primes/:lower/:upper` - List primes in `[lower, upper)`
//! - `GET /numprimes/:lower/:upper` - Count primes in `[lower, upper)`
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
