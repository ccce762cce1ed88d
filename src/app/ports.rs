//! Port traits: the hexagonal boundary between the wash controller and the
//! hardware.
//!
//! ```text
//!   Driver ──▶ Port trait ──▶ DishWasher (domain)
//! ```
//!
//! Hardware drivers (door latch, pump, engine, filter sensor) implement these
//! traits.  [`DishWasher`](super::service::DishWasher) consumes them via
//! generics, so the controller never touches hardware directly.
//!
//! Every call is blocking: it returns only once the hardware has finished
//! (or failed).  Actuator failures are typed; the controller inspects each
//! one explicitly.

use crate::error::{EngineError, PumpError};

use super::program::{FillLevel, WashingProgram};

// ───────────────────────────────────────────────────────────────
// Sensor ports (hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Door latch sensor and release.
pub trait Door {
    /// `true` when the door is shut.
    fn closed(&mut self) -> bool;

    /// Release the door latch at the end of a run.
    fn unlock(&mut self);
}

/// Dirt filter sensor.
pub trait DirtFilter {
    /// Remaining filter capacity in percent (0–100).
    fn capacity(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Water inlet and drain pump.
pub trait WaterPump {
    /// Fill the tub to `level`.
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError>;

    /// Empty the tub.
    fn drain(&mut self) -> Result<(), PumpError>;
}

/// Heater and spray-arm engine.
pub trait WashEngine {
    /// Run `program` to completion.
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError>;
}
