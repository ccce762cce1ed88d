//! Hardware adapter: bridges the drivers to the domain port traits.
//!
//! Each driver is exposed through exactly one port, so a
//! [`DishWasher`](crate::app::service::DishWasher) can be assembled from
//! the simulated drivers without any glue code:
//!
//! ```text
//!   DoorLatch    ──▶ Door
//!   FilterSensor ──▶ DirtFilter
//!   PumpDriver   ──▶ WaterPump
//!   EngineDriver ──▶ WashEngine
//! ```

use crate::app::ports::{DirtFilter, Door, WashEngine, WaterPump};
use crate::app::program::{FillLevel, WashingProgram};
use crate::drivers::door::DoorLatch;
use crate::drivers::engine::EngineDriver;
use crate::drivers::filter::FilterSensor;
use crate::drivers::pump::PumpDriver;
use crate::error::{EngineError, PumpError};

// ── Sensor ports ──────────────────────────────────────────────

impl Door for DoorLatch {
    fn closed(&mut self) -> bool {
        self.is_closed()
    }

    fn unlock(&mut self) {
        self.release();
    }
}

impl DirtFilter for FilterSensor {
    fn capacity(&mut self) -> f32 {
        self.read()
    }
}

// ── Actuator ports ────────────────────────────────────────────

impl WaterPump for PumpDriver {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        PumpDriver::pour(self, level)
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        PumpDriver::drain(self)
    }
}

impl WashEngine for EngineDriver {
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        self.run(program)
    }
}

/// Controller wired to the simulated drivers.
pub type SimulatedDishWasher =
    crate::app::service::DishWasher<PumpDriver, EngineDriver, FilterSensor, DoorLatch>;
