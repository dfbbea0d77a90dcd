//! Benchmark support crate for spantree.
//!
//! Provides seeded synthetic inputs and parameter types shared by the
//! Criterion benchmarks for heap sorting and Kruskal selection.

pub mod error;
pub mod params;
pub mod source;
