//! Test utilities for the campus portal.
//!
//! Provides session-credential minting so tests can exercise token-guarded
//! paths without a running issuer. Import in `#[cfg(test)]` blocks and
//! `tests/` targets only — never in production code.

pub mod auth;
