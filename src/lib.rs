//! Dishwasher controller library.
//!
//! Exposes the wash controller, its port traits and the simulated drivers
//! for integration testing and the host simulator binary.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;

pub use app::program::{FillLevel, ProgramConfiguration, WashingProgram};
pub use app::result::{RunResult, Status};
pub use app::service::DishWasher;
pub use error::{Error, Result};
