//! Wash engine driver (heater + spray-arm motor).
//!
//! Runs a program instantly and records it.  A scripted fault makes the
//! next run fail.

use log::{info, warn};

use crate::app::program::WashingProgram;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Faulted(EngineError),
}

pub struct EngineDriver {
    state: EngineState,
    pending_fault: Option<EngineError>,
    last_program: Option<WashingProgram>,
    completed_runs: u32,
}

impl EngineDriver {
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
            pending_fault: None,
            last_program: None,
            completed_runs: 0,
        }
    }

    /// Fail the next program run with `fault`.
    pub fn inject_fault(&mut self, fault: EngineError) {
        self.pending_fault = Some(fault);
    }

    pub fn run(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        self.last_program = Some(program);
        if let Some(fault) = self.pending_fault.take() {
            warn!("Engine fault during {program}: {fault}");
            self.state = EngineState::Faulted(fault);
            return Err(fault);
        }
        self.state = EngineState::Idle;
        self.completed_runs += 1;
        info!("Engine completed {program}");
        Ok(())
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn last_program(&self) -> Option<WashingProgram> {
        self.last_program
    }

    pub fn completed_runs(&self) -> u32 {
        self.completed_runs
    }
}

impl Default for EngineDriver {
    fn default() -> Self {
        Self::new()
    }
}
