//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for the spanning forest, shortest-path and
//! redundant-edge algorithms.

pub mod error;
pub mod params;
pub mod source;
