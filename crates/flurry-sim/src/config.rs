//! Simulation configuration (loadable from TOML)

use flurry_core::{Color, FlurryError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable snowfall parameters.
///
/// Ranges are half-open: a flake's size is drawn from
/// `[size_min, size_max)` and its per-tick fall increment from
/// `[fall_min, fall_max)`. Defaults reproduce the classic demo:
/// 5 flakes per 100 ms tick, sizes 5–14, fall 2–4, a 4-color
/// winter palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowConfig {
    /// Flakes spawned at the top edge each tick
    pub spawn_per_tick: u32,
    pub size_min: u32,
    pub size_max: u32,
    pub fall_min: i32,
    pub fall_max: i32,
    pub palette: Vec<Color>,
    pub tick_interval_ms: u64,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            spawn_per_tick: 5,
            size_min: 5,
            size_max: 15,
            fall_min: 2,
            fall_max: 5,
            palette: vec![
                Color::WHITE,
                Color::PALE_TURQUOISE,
                Color::LIGHT_SKY_BLUE,
                Color::AZURE,
            ],
            tick_interval_ms: 100,
        }
    }
}

impl SnowConfig {
    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SnowConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.spawn_per_tick == 0 {
            return Err(FlurryError::Config("spawn_per_tick must be at least 1".into()));
        }
        if self.size_min == 0 {
            return Err(FlurryError::Config("size_min must be at least 1".into()));
        }
        if self.size_min >= self.size_max {
            return Err(FlurryError::Config(format!(
                "size range is empty: [{}, {})",
                self.size_min, self.size_max
            )));
        }
        if self.fall_min < 1 {
            // A zero increment would let flakes hover forever
            return Err(FlurryError::Config("fall_min must be at least 1".into()));
        }
        if self.fall_min >= self.fall_max {
            return Err(FlurryError::Config(format!(
                "fall range is empty: [{}, {})",
                self.fall_min, self.fall_max
            )));
        }
        if self.palette.is_empty() {
            return Err(FlurryError::Config("palette must not be empty".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(FlurryError::Config("tick_interval_ms must be at least 1".into()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
