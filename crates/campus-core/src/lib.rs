//! Shared HTTP plumbing for the campus portal.
//!
//! Health probes, request-id middleware, timestamp serialization, and tracing
//! setup live here. Domain logic never does.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
