//! Integration tests for the DishWasher → ports sequence.
//!
//! Every test drives the controller against the recording mocks and checks
//! both the returned result and the exact hardware call history.

use dishwasher::config::WasherConfig;
use dishwasher::error::{EngineError, PumpError};
use dishwasher::{FillLevel, ProgramConfiguration, RunResult, Status, WashingProgram};

use crate::mock_hw::{HwCall, MockRig};

fn eco(fill_level: FillLevel, tablets_used: bool) -> ProgramConfiguration {
    ProgramConfiguration::builder()
        .program(WashingProgram::Eco)
        .fill_level(fill_level)
        .tablets_used(tablets_used)
        .build()
        .unwrap()
}

// ── Success path ─────────────────────────────────────────────

#[test]
fn no_tablets_door_closed_runs_eco_for_ninety_minutes() {
    let rig = MockRig::new();
    let result = rig.washer().start(&eco(FillLevel::Half, false));

    assert_eq!(result, RunResult::success(90));
}

#[test]
fn fill_level_does_not_change_duration() {
    for level in [FillLevel::Half, FillLevel::Full] {
        let rig = MockRig::new();
        let result = rig.washer().start(&eco(level, false));
        assert_eq!(result.run_minutes(), 90, "fill level {level}");
    }
}

#[test]
fn tablets_with_clean_filter_succeed() {
    let rig = MockRig {
        filter_capacity: 100.0,
        ..MockRig::new()
    };
    let result = rig.washer().start(&eco(FillLevel::Full, true));

    assert_eq!(result.status(), Status::Success);
    assert_eq!(result.run_minutes(), 90);
}

#[test]
fn success_call_order_without_tablets() {
    let rig = MockRig::new();
    rig.washer().start(&eco(FillLevel::Half, false));

    assert_eq!(
        rig.calls(),
        vec![
            HwCall::Closed,
            HwCall::Pour(FillLevel::Half),
            HwCall::RunProgram(WashingProgram::Eco),
            HwCall::Drain,
            HwCall::Unlock,
        ]
    );
}

#[test]
fn success_call_order_with_tablets_checks_filter_before_pour() {
    let rig = MockRig::new();
    rig.washer().start(&eco(FillLevel::Full, true));

    assert_eq!(
        rig.calls(),
        vec![
            HwCall::Closed,
            HwCall::Capacity,
            HwCall::Pour(FillLevel::Full),
            HwCall::RunProgram(WashingProgram::Eco),
            HwCall::Drain,
            HwCall::Unlock,
        ]
    );
}

#[test]
fn every_program_reports_its_configured_duration() {
    let mut config = WasherConfig::default();
    config.program_minutes.eco = 95;
    config.program_minutes.intensive = 125;
    config.program_minutes.night = 210;
    config.program_minutes.rinse = 15;

    for (program, minutes) in [
        (WashingProgram::Eco, 95),
        (WashingProgram::Intensive, 125),
        (WashingProgram::Night, 210),
        (WashingProgram::Rinse, 15),
    ] {
        let rig = MockRig::new();
        let run = ProgramConfiguration::new(program, FillLevel::Full, false);
        let result = rig.washer_with(config.clone()).start(&run);
        assert_eq!(result, RunResult::success(minutes), "{program}");
        assert_eq!(rig.count(HwCall::RunProgram(program)), 1);
    }
}

// ── Precondition faults ──────────────────────────────────────

#[test]
fn open_door_stops_before_any_hardware() {
    let rig = MockRig {
        door_closed: false,
        ..MockRig::new()
    };
    let result = rig.washer().start(&eco(FillLevel::Full, true));

    assert_eq!(result.status(), Status::DoorOpen);
    assert_eq!(result.run_minutes(), 0);
    assert_eq!(rig.calls(), vec![HwCall::Closed]);
}

#[test]
fn dirty_filter_with_tablets_is_refused() {
    let rig = MockRig {
        filter_capacity: 12.0,
        ..MockRig::new()
    };
    let result = rig.washer().start(&eco(FillLevel::Full, true));

    assert_eq!(result.status(), Status::ErrorFilter);
    assert_eq!(rig.calls(), vec![HwCall::Closed, HwCall::Capacity]);
    assert!(!rig.pump_or_engine_touched());
}

#[test]
fn dirty_filter_is_ignored_without_tablets() {
    let rig = MockRig {
        filter_capacity: 12.0,
        ..MockRig::new()
    };
    let result = rig.washer().start(&eco(FillLevel::Full, false));

    assert_eq!(result.status(), Status::Success);
    assert_eq!(rig.count(HwCall::Capacity), 0);
}

#[test]
fn custom_threshold_is_honoured() {
    let rig = MockRig {
        filter_capacity: 60.0,
        ..MockRig::new()
    };
    let config = WasherConfig {
        filter_threshold_percent: 75.0,
        ..WasherConfig::default()
    };
    let result = rig.washer_with(config).start(&eco(FillLevel::Half, true));

    assert_eq!(result.status(), Status::ErrorFilter);
}

// ── Actuator faults ──────────────────────────────────────────

#[test]
fn pour_failure_skips_engine_and_drain() {
    let rig = MockRig {
        pour_fault: Some(PumpError::NoWaterSupply),
        ..MockRig::new()
    };
    let result = rig.washer().start(&eco(FillLevel::Full, false));

    assert_eq!(result.status(), Status::PumpFailure);
    assert_eq!(result.run_minutes(), 0);
    assert_eq!(
        rig.calls(),
        vec![HwCall::Closed, HwCall::Pour(FillLevel::Full), HwCall::Unlock]
    );
}

#[test]
fn engine_failure_drains_then_unlocks() {
    let rig = MockRig {
        engine_fault: Some(EngineError::Stalled),
        ..MockRig::new()
    };
    let result = rig.washer().start(&eco(FillLevel::Half, false));

    assert_eq!(result.status(), Status::EngineFailure);
    assert_eq!(result.run_minutes(), 0);
    assert_eq!(
        rig.calls(),
        vec![
            HwCall::Closed,
            HwCall::Pour(FillLevel::Half),
            HwCall::RunProgram(WashingProgram::Eco),
            HwCall::Drain,
            HwCall::Unlock,
        ]
    );
}

#[test]
fn engine_failure_wins_over_drain_failure() {
    let rig = MockRig {
        engine_fault: Some(EngineError::Overheated),
        drain_fault: Some(PumpError::DrainBlocked),
        ..MockRig::new()
    };
    let result = rig.washer().start(&eco(FillLevel::Half, false));

    assert_eq!(result.status(), Status::EngineFailure);
    assert_eq!(rig.count(HwCall::Unlock), 1);
}

#[test]
fn drain_failure_reports_pump_failure_and_unlocks() {
    let rig = MockRig {
        drain_fault: Some(PumpError::DrainBlocked),
        ..MockRig::new()
    };
    let result = rig.washer().start(&eco(FillLevel::Full, false));

    assert_eq!(result.status(), Status::PumpFailure);
    assert_eq!(rig.calls().last(), Some(&HwCall::Unlock));
    assert_eq!(rig.count(HwCall::Drain), 1);
}
