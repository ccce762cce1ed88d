//! Water pump driver (inlet valve + drain pump).
//!
//! Tracks the tub fill state in memory.  A scripted fault makes the next
//! pour or drain fail, so host runs can exercise the controller's error
//! paths.
//!
//! ## Safety contract
//!
//! The tub must be empty before it is filled again.  `pour` refuses to run
//! on a filled tub; draining an empty tub is a no-op.

use log::{debug, warn};

use crate::app::program::FillLevel;
use crate::error::PumpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TubState {
    Empty,
    Filled(FillLevel),
}

pub struct PumpDriver {
    state: TubState,
    pending_fault: Option<PumpError>,
    completed_cycles: u32,
}

impl PumpDriver {
    pub fn new() -> Self {
        Self {
            state: TubState::Empty,
            pending_fault: None,
            completed_cycles: 0,
        }
    }

    /// Fail the next pour or drain with `fault`.
    pub fn inject_fault(&mut self, fault: PumpError) {
        self.pending_fault = Some(fault);
    }

    pub fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        if let Some(fault) = self.pending_fault.take() {
            warn!("Pump pour fault: {fault}");
            return Err(fault);
        }
        if self.state != TubState::Empty {
            return Err(PumpError::AlreadyFilled);
        }
        self.state = TubState::Filled(level);
        debug!("Tub filled ({level})");
        Ok(())
    }

    pub fn drain(&mut self) -> Result<(), PumpError> {
        if let Some(fault) = self.pending_fault.take() {
            warn!("Pump drain fault: {fault}");
            return Err(fault);
        }
        if let TubState::Filled(_) = self.state {
            self.completed_cycles += 1;
        }
        self.state = TubState::Empty;
        debug!("Tub drained");
        Ok(())
    }

    pub fn state(&self) -> TubState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, TubState::Empty)
    }

    /// Fill/drain cycles completed since power-up.
    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }
}

impl Default for PumpDriver {
    fn default() -> Self {
        Self::new()
    }
}
