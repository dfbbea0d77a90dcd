//! Shared test utilities used across spantree crates.

pub mod ci;
pub mod tracing;
