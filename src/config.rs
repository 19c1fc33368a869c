//! Calculator configuration.
//!
//! Read from `--config <path>` or from `config.json` in the platform config
//! directory. Missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculator::{CalculationInput, DEFAULT_LUCK, DEFAULT_THROUGHPUT};
use crate::duration::{DurationPolicy, MAX_HOUR_DECIMALS};
use crate::error::{CalcError, InputField, InvalidInput};
use crate::logging::TracingConfig;
use crate::milestone::CANONICAL_TARGETS;
use crate::odds::OddsSource;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Luck multiplier used when none is given.
    pub luck: f64,
    /// Casts per hour used when none is given.
    pub throughput: f64,
    /// Milestone targets, each in (0, 1].
    pub targets: Vec<f64>,
    pub duration: DurationPolicy,
    pub log: TracingConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            luck: DEFAULT_LUCK,
            throughput: DEFAULT_THROUGHPUT,
            targets: CANONICAL_TARGETS.to_vec(),
            duration: DurationPolicy::default(),
            log: TracingConfig::default(),
        }
    }
}

impl CalculatorConfig {
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, CalcError> {
        let json = fs::read_to_string(path).map_err(|e| CalcError::io(path, e))?;
        let config = Self::from_json(&json)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `config.json` in the platform config directory, if one can be found.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "catch-odds").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Loads the file at `default_path`, or defaults when there is none.
    pub fn load_or_default() -> Result<Self, CalcError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Rejects defaults the calculator would refuse anyway.
    pub fn validate(&self) -> Result<(), CalcError> {
        InvalidInput::check_positive(InputField::Luck, self.luck)?;
        InvalidInput::check_positive(InputField::Throughput, self.throughput)?;
        if self.targets.is_empty() {
            return Err(CalcError::Config("at least one target is required".to_string()));
        }
        if let Some(&bad) = self.targets.iter().find(|t| !(**t > 0.0 && **t <= 1.0)) {
            return Err(CalcError::Config(format!(
                "target {} is outside (0, 1]",
                bad
            )));
        }
        if self.duration.hour_decimals > MAX_HOUR_DECIMALS {
            return Err(CalcError::Config(format!(
                "hour_decimals must be at most {}, got {}",
                MAX_HOUR_DECIMALS, self.duration.hour_decimals
            )));
        }
        if self.duration.days_from_hours <= self.duration.minutes_below_hours {
            return Err(CalcError::Config(
                "days_from_hours must exceed minutes_below_hours".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds an input for `odds` with this config's defaults.
    pub fn input_for(&self, odds: OddsSource) -> CalculationInput {
        CalculationInput::new(odds)
            .with_luck(self.luck)
            .with_throughput(self.throughput)
            .with_targets(self.targets.clone())
    }
}
