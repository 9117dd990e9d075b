//! Auth types for the campus portal.
//!
//! Provides JWT session-credential validation and the `BearerToken` extractor.

pub mod identity;
pub mod token;
