//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the wash-cycle rules: run configuration, the
//! controller's step sequence and the outcome mapping.  All interaction
//! with hardware happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod ports;
pub mod program;
pub mod result;
pub mod service;
