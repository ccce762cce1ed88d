//! Simulated hardware drivers.
//!
//! Each driver keeps its physical state in memory and exposes scripting
//! hooks (`set_*`, `inject_fault`) for host runs and tests.

pub mod door;
pub mod engine;
pub mod filter;
pub mod pump;
