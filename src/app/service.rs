//! Wash controller: the hexagonal core.
//!
//! [`DishWasher`] owns the four hardware ports and drives them through one
//! washing run.  Sensor checks come first and short-circuit before any
//! actuator moves; actuator failures are mapped to a [`Status`] instead of
//! being returned to the caller.
//!
//! ```text
//!        Door ──▶ ┌────────────────────────┐ ──▶ WaterPump
//!  DirtFilter ──▶ │       DishWasher       │ ──▶ WashEngine
//!                 └────────────────────────┘ ──▶ RunResult
//! ```

use log::{debug, error, info, warn};

use crate::config::WasherConfig;
use crate::error::Error;

use super::ports::{DirtFilter, Door, WashEngine, WaterPump};
use super::program::ProgramConfiguration;
use super::result::{RunResult, Status};

// ───────────────────────────────────────────────────────────────
// DishWasher
// ───────────────────────────────────────────────────────────────

/// The wash controller.
///
/// One run at a time: [`start`](Self::start) borrows the controller
/// mutably for the whole sequence.
pub struct DishWasher<P, E, F, D> {
    pump: P,
    engine: E,
    filter: F,
    door: D,
    config: WasherConfig,
}

impl<P, E, F, D> DishWasher<P, E, F, D>
where
    P: WaterPump,
    E: WashEngine,
    F: DirtFilter,
    D: Door,
{
    /// Construct with the factory [`WasherConfig`].
    pub fn new(pump: P, engine: E, filter: F, door: D) -> Self {
        Self::with_config(WasherConfig::default(), pump, engine, filter, door)
    }

    pub fn with_config(config: WasherConfig, pump: P, engine: E, filter: F, door: D) -> Self {
        Self {
            pump,
            engine,
            filter,
            door,
            config,
        }
    }

    // ── Run ───────────────────────────────────────────────────

    /// Execute one washing run.
    ///
    /// Sequence: door check → filter check (tablets only) → pour →
    /// program → drain → unlock.  The first failing step ends the run.
    /// After an actuator fault the door is still unlocked, and after an
    /// engine fault the tub is drained first.
    pub fn start(&mut self, config: &ProgramConfiguration) -> RunResult {
        info!(
            "Run requested: program={} fill={} tablets={}",
            config.program(),
            config.fill_level(),
            config.tablets_used()
        );

        // 1. Door must be shut before anything moves.
        if !self.door.closed() {
            warn!("Door open, run refused");
            return RunResult::failed(Status::DoorOpen);
        }

        // 2. Tablets need filter headroom.
        if config.tablets_used() {
            let capacity = self.filter.capacity();
            let threshold = self.config.filter_threshold_percent;
            if capacity.is_nan() || capacity < threshold {
                warn!(
                    "Dirt filter capacity {:.1}% below {:.1}%, run refused",
                    capacity, threshold
                );
                return RunResult::failed(Status::ErrorFilter);
            }
            debug!("Dirt filter capacity {:.1}% ok", capacity);
        }

        // 3. Fill.
        if let Err(e) = self.pump.pour(config.fill_level()) {
            error!("Pour failed: {}", Error::from(e));
            self.release_door();
            return RunResult::failed(Status::PumpFailure);
        }

        // 4. Wash.
        if let Err(e) = self.engine.run_program(config.program()) {
            error!("Program {} failed: {}", config.program(), Error::from(e));
            if let Err(drain_err) = self.pump.drain() {
                error!("Drain after engine fault failed: {}", Error::from(drain_err));
            }
            self.release_door();
            return RunResult::failed(Status::EngineFailure);
        }

        // 5. Empty the tub.
        if let Err(e) = self.pump.drain() {
            error!("Drain failed: {}", Error::from(e));
            self.release_door();
            return RunResult::failed(Status::PumpFailure);
        }

        // 6. Release the door.
        self.release_door();

        // 7. Report.
        let minutes = self.config.duration_for(config.program());
        info!("Program {} finished in {} min", config.program(), minutes);
        RunResult::success(minutes)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &WasherConfig {
        &self.config
    }

    pub fn pump(&self) -> &P {
        &self.pump
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn door(&self) -> &D {
        &self.door
    }

    /// Give back the injected collaborators.
    pub fn into_parts(self) -> (P, E, F, D) {
        (self.pump, self.engine, self.filter, self.door)
    }

    // ── Internal ──────────────────────────────────────────────

    fn release_door(&mut self) {
        self.door.unlock();
        debug!("Door unlocked");
    }
}
