//! Washing program selection and the per-run configuration.
//!
//! A [`ProgramConfiguration`] is built once per run and handed to
//! [`DishWasher::start`](super::service::DishWasher::start).  Every field is
//! mandatory; the builder refuses to produce a partial configuration.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

// ───────────────────────────────────────────────────────────────
// Washing program
// ───────────────────────────────────────────────────────────────

/// Wash profile.  Each program has a fixed run duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WashingProgram {
    Eco,
    Intensive,
    Night,
    Rinse,
}

impl WashingProgram {
    pub const ALL: [Self; 4] = [Self::Eco, Self::Intensive, Self::Night, Self::Rinse];

    /// Factory run duration in minutes.
    pub const fn default_minutes(self) -> u32 {
        match self {
            Self::Eco => 90,
            Self::Intensive => 120,
            Self::Night => 180,
            Self::Rinse => 20,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Eco => "eco",
            Self::Intensive => "intensive",
            Self::Night => "night",
            Self::Rinse => "rinse",
        }
    }
}

impl fmt::Display for WashingProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WashingProgram {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ConfigurationError::UnknownProgram)
    }
}

// ───────────────────────────────────────────────────────────────
// Fill level
// ───────────────────────────────────────────────────────────────

/// How much water the pump pours into the tub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillLevel {
    Half,
    Full,
}

impl FillLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Half => "half",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for FillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillLevel {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half" => Ok(Self::Half),
            "full" => Ok(Self::Full),
            _ => Err(ConfigurationError::UnknownFillLevel),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// ProgramConfiguration
// ───────────────────────────────────────────────────────────────

/// Immutable description of a single wash run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramConfiguration {
    program: WashingProgram,
    fill_level: FillLevel,
    tablets_used: bool,
}

impl ProgramConfiguration {
    pub const fn new(program: WashingProgram, fill_level: FillLevel, tablets_used: bool) -> Self {
        Self {
            program,
            fill_level,
            tablets_used,
        }
    }

    pub fn builder() -> ProgramConfigurationBuilder {
        ProgramConfigurationBuilder::default()
    }

    pub fn program(&self) -> WashingProgram {
        self.program
    }

    pub fn fill_level(&self) -> FillLevel {
        self.fill_level
    }

    /// Whether detergent tablets are loaded.  Gates the dirt filter check.
    pub fn tablets_used(&self) -> bool {
        self.tablets_used
    }
}

/// Step-by-step construction of a [`ProgramConfiguration`].
///
/// [`build`](Self::build) fails with [`ConfigurationError::MissingField`]
/// naming the first unset field.
#[derive(Debug, Clone, Default)]
pub struct ProgramConfigurationBuilder {
    program: Option<WashingProgram>,
    fill_level: Option<FillLevel>,
    tablets_used: Option<bool>,
}

impl ProgramConfigurationBuilder {
    pub fn program(mut self, program: WashingProgram) -> Self {
        self.program = Some(program);
        self
    }

    pub fn fill_level(mut self, fill_level: FillLevel) -> Self {
        self.fill_level = Some(fill_level);
        self
    }

    pub fn tablets_used(mut self, tablets_used: bool) -> Self {
        self.tablets_used = Some(tablets_used);
        self
    }

    pub fn build(self) -> Result<ProgramConfiguration, ConfigurationError> {
        Ok(ProgramConfiguration {
            program: self.program.ok_or(ConfigurationError::MissingField("program"))?,
            fill_level: self
                .fill_level
                .ok_or(ConfigurationError::MissingField("fill_level"))?,
            tablets_used: self
                .tablets_used
                .ok_or(ConfigurationError::MissingField("tablets_used"))?,
        })
    }
}
