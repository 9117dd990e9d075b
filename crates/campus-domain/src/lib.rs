//! Domain rules shared across the campus portal service.
//!
//! Pure types and policy with no framework or storage dependencies:
//! everything here is callable from a plain unit test. Grading and
//! attendance math live here so every layer derives the same numbers.

pub mod attendance;
pub mod grading;
pub mod policy;
pub mod role;
