//! Cross-module tests for hit resolution.
//!
//! - `determinism.rs`: Repeated and parallel resolution give identical results
//! - `integration.rs`: End-to-end casts, from proximity query to effect lookup
//! - `helpers.rs`: Snapshot builders and seeded scenario generators

mod determinism;
mod helpers;
