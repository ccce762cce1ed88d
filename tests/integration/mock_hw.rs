//! Mock hardware for integration tests.
//!
//! All four mocks share one call log so tests can assert on the exact
//! cross-device ordering without touching any driver.

use std::cell::RefCell;
use std::rc::Rc;

use dishwasher::app::ports::{DirtFilter, Door, WashEngine, WaterPump};
use dishwasher::config::WasherConfig;
use dishwasher::error::{EngineError, PumpError};
use dishwasher::{DishWasher, FillLevel, WashingProgram};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HwCall {
    Closed,
    Capacity,
    Pour(FillLevel),
    RunProgram(WashingProgram),
    Drain,
    Unlock,
}

pub type CallLog = Rc<RefCell<Vec<HwCall>>>;

// ── Mocks ─────────────────────────────────────────────────────

pub struct MockDoor {
    log: CallLog,
    closed: bool,
}

impl Door for MockDoor {
    fn closed(&mut self) -> bool {
        self.log.borrow_mut().push(HwCall::Closed);
        self.closed
    }

    fn unlock(&mut self) {
        self.log.borrow_mut().push(HwCall::Unlock);
    }
}

pub struct MockFilter {
    log: CallLog,
    capacity: f32,
}

impl DirtFilter for MockFilter {
    fn capacity(&mut self) -> f32 {
        self.log.borrow_mut().push(HwCall::Capacity);
        self.capacity
    }
}

pub struct MockPump {
    log: CallLog,
    pour_fault: Option<PumpError>,
    drain_fault: Option<PumpError>,
}

impl WaterPump for MockPump {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.log.borrow_mut().push(HwCall::Pour(level));
        self.pour_fault.map_or(Ok(()), Err)
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        self.log.borrow_mut().push(HwCall::Drain);
        self.drain_fault.map_or(Ok(()), Err)
    }
}

pub struct MockEngine {
    log: CallLog,
    fault: Option<EngineError>,
}

impl WashEngine for MockEngine {
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        self.log.borrow_mut().push(HwCall::RunProgram(program));
        self.fault.map_or(Ok(()), Err)
    }
}

// ── MockRig ───────────────────────────────────────────────────

pub type MockWasher = DishWasher<MockPump, MockEngine, MockFilter, MockDoor>;

/// Scripted hardware setup.  Defaults: door shut, clean filter, no faults.
pub struct MockRig {
    pub(crate) log: CallLog,
    pub door_closed: bool,
    pub filter_capacity: f32,
    pub pour_fault: Option<PumpError>,
    pub drain_fault: Option<PumpError>,
    pub engine_fault: Option<EngineError>,
}

#[allow(dead_code)]
impl MockRig {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            door_closed: true,
            filter_capacity: 100.0,
            pour_fault: None,
            drain_fault: None,
            engine_fault: None,
        }
    }

    pub fn washer(&self) -> MockWasher {
        self.washer_with(WasherConfig::default())
    }

    pub fn washer_with(&self, config: WasherConfig) -> MockWasher {
        DishWasher::with_config(
            config,
            MockPump {
                log: Rc::clone(&self.log),
                pour_fault: self.pour_fault,
                drain_fault: self.drain_fault,
            },
            MockEngine {
                log: Rc::clone(&self.log),
                fault: self.engine_fault,
            },
            MockFilter {
                log: Rc::clone(&self.log),
                capacity: self.filter_capacity,
            },
            MockDoor {
                log: Rc::clone(&self.log),
                closed: self.door_closed,
            },
        )
    }

    pub fn calls(&self) -> Vec<HwCall> {
        self.log.borrow().clone()
    }

    pub fn pump_or_engine_touched(&self) -> bool {
        self.log.borrow().iter().any(|c| {
            matches!(
                c,
                HwCall::Pour(_) | HwCall::Drain | HwCall::RunProgram(_)
            )
        })
    }

    pub fn count(&self, call: HwCall) -> usize {
        self.log.borrow().iter().filter(|c| **c == call).count()
    }
}

impl Default for MockRig {
    fn default() -> Self {
        Self::new()
    }
}
