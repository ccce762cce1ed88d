//! Dishwasher simulator: host entry point.
//!
//! Wires the simulated drivers into the controller, runs one program and
//! prints the outcome as JSON.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  CLI (outer adapter)                     │
//! │                                                          │
//! │  DoorLatch   FilterSensor   PumpDriver   EngineDriver    │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        DishWasher (pure sequencing logic)      │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use dishwasher::adapters::hardware::SimulatedDishWasher;
use dishwasher::config::WasherConfig;
use dishwasher::drivers::door::DoorLatch;
use dishwasher::drivers::engine::EngineDriver;
use dishwasher::drivers::filter::FilterSensor;
use dishwasher::drivers::pump::PumpDriver;
use dishwasher::error::{EngineError, PumpError};
use dishwasher::{FillLevel, ProgramConfiguration, WashingProgram};

#[derive(Parser, Debug)]
#[command(name = "dishwasher-sim", version, about = "Run one wash cycle on simulated hardware")]
struct Args {
    /// Washing program: eco, intensive, night, rinse
    #[arg(long, default_value = "eco")]
    program: WashingProgram,

    /// Fill level: half, full
    #[arg(long, default_value = "full")]
    fill_level: FillLevel,

    /// Detergent tablets are loaded
    #[arg(long)]
    tablets: bool,

    /// Simulated dirt filter capacity in percent
    #[arg(long, default_value_t = 100.0)]
    filter_capacity: f32,

    /// Simulate an open door
    #[arg(long)]
    door_open: bool,

    /// Make the pump fail on pour
    #[arg(long)]
    pump_fault: bool,

    /// Make the engine fail mid-program
    #[arg(long)]
    engine_fault: bool,

    /// JSON file overriding the filter threshold and program durations
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // `log` records from the library reach this subscriber via its log bridge.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => WasherConfig::load(path)
            .with_context(|| format!("loading controller config from {}", path.display()))?,
        None => WasherConfig::default(),
    };

    let mut door = DoorLatch::new();
    door.set_closed(!args.door_open);

    let mut filter = FilterSensor::new();
    filter.set_capacity(args.filter_capacity);

    let mut pump = PumpDriver::new();
    if args.pump_fault {
        pump.inject_fault(PumpError::NoWaterSupply);
    }

    let mut engine = EngineDriver::new();
    if args.engine_fault {
        engine.inject_fault(EngineError::HeaterFault);
    }

    let run = ProgramConfiguration::builder()
        .program(args.program)
        .fill_level(args.fill_level)
        .tablets_used(args.tablets)
        .build()
        .context("building program configuration")?;

    let mut washer = SimulatedDishWasher::with_config(config, pump, engine, filter, door);
    let result = washer.start(&run);
    info!("Run finished: {}", result.status());

    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("serialising run result")?
    );

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
