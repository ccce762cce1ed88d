//! Controller configuration parameters
//!
//! Tunable settings for the wash controller: the dirt filter threshold and
//! the program duration table.  Defaults are the factory values; a JSON file
//! may override any subset of them.

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::app::program::WashingProgram;
use crate::error::ConfigError;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasherConfig {
    /// Minimum dirt filter capacity (0-100%) required when tablets are used
    pub filter_threshold_percent: f32,
    /// Run duration per washing program
    pub program_minutes: ProgramDurations,
}

/// Run duration (minutes) for each [`WashingProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramDurations {
    pub eco: u32,
    pub intensive: u32,
    pub night: u32,
    pub rinse: u32,
}

impl Default for ProgramDurations {
    fn default() -> Self {
        Self {
            eco: WashingProgram::Eco.default_minutes(),
            intensive: WashingProgram::Intensive.default_minutes(),
            night: WashingProgram::Night.default_minutes(),
            rinse: WashingProgram::Rinse.default_minutes(),
        }
    }
}

impl ProgramDurations {
    pub fn minutes(&self, program: WashingProgram) -> u32 {
        match program {
            WashingProgram::Eco => self.eco,
            WashingProgram::Intensive => self.intensive,
            WashingProgram::Night => self.night,
            WashingProgram::Rinse => self.rinse,
        }
    }
}

impl Default for WasherConfig {
    fn default() -> Self {
        Self {
            filter_threshold_percent: 50.0,
            program_minutes: ProgramDurations::default(),
        }
    }
}

impl WasherConfig {
    /// Run duration for `program` under this configuration.
    pub fn duration_for(&self, program: WashingProgram) -> u32 {
        self.program_minutes.minutes(program)
    }

    /// Reject out-of-range values rather than clamping them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.filter_threshold_percent) {
            return Err(ConfigError::ValidationFailed(
                "filter_threshold_percent must be within 0..=100",
            ));
        }
        if WashingProgram::ALL
            .into_iter()
            .any(|p| self.duration_for(p) == 0)
        {
            return Err(ConfigError::ValidationFailed(
                "program_minutes entries must be non-zero",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.  Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            warn!("Config parse failed: {}", e);
            ConfigError::Corrupted
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            warn!("Config read failed ({}): {}", path.display(), e);
            ConfigError::Io
        })?;
        let config = Self::from_json(&raw)?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }
}
