//! Unified error types for the dishwasher controller.
//!
//! Actuator failures (pump, engine) are small `Copy` enums returned through
//! the port traits; the controller maps them onto a terminal
//! [`Status`](crate::app::result::Status) instead of propagating them.
//! Configuration errors surface to whoever builds the run or loads the
//! controller settings.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The water pump failed to pour or drain.
    Pump(PumpError),
    /// The wash engine failed while running a program.
    Engine(EngineError),
    /// A program configuration was incomplete or unparsable.
    Configuration(ConfigurationError),
    /// Controller settings could not be loaded or failed validation.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pump(e) => write!(f, "pump: {e}"),
            Self::Engine(e) => write!(f, "engine: {e}"),
            Self::Configuration(e) => write!(f, "program configuration: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Pump errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpError {
    /// Inlet valve opened but no water arrived.
    NoWaterSupply,
    /// Outlet is blocked; the tub could not be emptied.
    DrainBlocked,
    /// A pour was requested while the tub still holds water.
    AlreadyFilled,
    /// Pump motor did not respond.
    MotorFault,
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWaterSupply => write!(f, "no water supply"),
            Self::DrainBlocked => write!(f, "drain blocked"),
            Self::AlreadyFilled => write!(f, "tub already filled"),
            Self::MotorFault => write!(f, "pump motor fault"),
        }
    }
}

impl std::error::Error for PumpError {}

impl From<PumpError> for Error {
    fn from(e: PumpError) -> Self {
        Self::Pump(e)
    }
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Heating element exceeded its temperature limit.
    Overheated,
    /// Spray-arm motor stalled.
    Stalled,
    /// Heater did not reach the program temperature in time.
    HeaterFault,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overheated => write!(f, "engine overheated"),
            Self::Stalled => write!(f, "spray motor stalled"),
            Self::HeaterFault => write!(f, "heater fault"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<EngineError> for Error {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

// ---------------------------------------------------------------------------
// Program configuration errors
// ---------------------------------------------------------------------------

/// Errors raised while assembling a
/// [`ProgramConfiguration`](crate::app::program::ProgramConfiguration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The named field was never set on the builder.
    MissingField(&'static str),
    /// A washing program name was not recognised.
    UnknownProgram,
    /// A fill level name was not recognised.
    UnknownFillLevel,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing field `{field}`"),
            Self::UnknownProgram => write!(f, "unknown washing program"),
            Self::UnknownFillLevel => write!(f, "unknown fill level"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl From<ConfigurationError> for Error {
    fn from(e: ConfigurationError) -> Self {
        Self::Configuration(e)
    }
}

// ---------------------------------------------------------------------------
// Controller settings errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`WasherConfig`](crate::config::WasherConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Settings file could not be read.
    Io,
    /// Settings failed to deserialize.
    Corrupted,
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O error"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
