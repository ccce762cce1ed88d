//! Outcome of a wash run.

use core::fmt;

use serde::Serialize;

/// Terminal state of a single [`DishWasher::start`](super::service::DishWasher::start) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Program ran to completion.
    Success,
    /// Door was open at start; no hardware engaged.
    DoorOpen,
    /// Tablets requested but the dirt filter is too full.
    ErrorFilter,
    /// The wash engine failed while running the program.
    EngineFailure,
    /// The pump failed to pour or drain.
    PumpFailure,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "SUCCESS",
            Self::DoorOpen => "DOOR_OPEN",
            Self::ErrorFilter => "ERROR_FILTER",
            Self::EngineFailure => "ENGINE_FAILURE",
            Self::PumpFailure => "PUMP_FAILURE",
        };
        f.write_str(s)
    }
}

/// Result of a wash run.  `run_minutes` is only meaningful on success and
/// is zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunResult {
    status: Status,
    run_minutes: u32,
}

impl RunResult {
    pub const fn success(run_minutes: u32) -> Self {
        Self {
            status: Status::Success,
            run_minutes,
        }
    }

    /// A run that ended early with `status`.
    pub fn failed(status: Status) -> Self {
        debug_assert_ne!(status, Status::Success, "failed() needs a fault status");
        Self {
            status,
            run_minutes: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn run_minutes(&self) -> u32 {
        self.run_minutes
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
