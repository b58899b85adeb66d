//! Adapters - implementations of ports plus the inbound HTTP surface.
//!
//! - `clock` - system and manual time sources
//! - `oracle` - question oracle HTTP client and its test double
//! - `store` - in-memory TTL registries for sessions and questions
//! - `http` - axum routes, handlers and DTOs

pub mod clock;
pub mod http;
pub mod oracle;
pub mod store;
