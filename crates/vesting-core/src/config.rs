// File: crates/vesting-core/src/config.rs
// Summary: Generator thresholds, with TOML loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::interval::IntervalTable;

/// Default cap on `duration / interval` before the fallback table kicks in.
pub const DEFAULT_MAX_STEPS: u32 = 2800;
/// Largest accepted `max_steps`; bounds the size of a generated series.
pub const MAX_STEPS_CEILING: u32 = 100_000;

/// Tunable thresholds for the series generator.
///
/// ```toml
/// max_steps = 2800
///
/// [fallback]
/// otherwise_ms = 2628000000
///
/// [[fallback.steps]]
/// max_duration_ms = 60000
/// interval_ms = 1000
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
    #[serde(default)]
    pub fallback: IntervalTable,
}

fn default_max_steps() -> u32 {
    DEFAULT_MAX_STEPS
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { max_steps: DEFAULT_MAX_STEPS, fallback: IntervalTable::default() }
    }
}

impl GeneratorOptions {
    /// Parse and validate options from TOML text.
    pub fn from_toml_str(text: &str) -> ScheduleResult<Self> {
        let opts: GeneratorOptions = toml::from_str(text)
            .map_err(|e| ScheduleError::Config(format!("failed to parse options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            ScheduleError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if self.max_steps == 0 || self.max_steps > MAX_STEPS_CEILING {
            return Err(ScheduleError::Config(format!(
                "max_steps must be in 1..={MAX_STEPS_CEILING}, got {}",
                self.max_steps
            )));
        }
        self.fallback.validate()
    }
}
