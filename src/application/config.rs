use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{MIN_SELECTABLE, PowerUpTuning};

/// Session settings. Every field has a default so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed for reproducible boards; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Seconds a selected group stays highlighted before it is cleared
    pub selection_delay: f32,
    /// Score needed per level: level N completes at N * this
    pub level_score_step: u64,
    /// Stars awarded on each level-up
    pub level_up_stars: u32,
    /// Group size that earns a star in learning mode
    pub bonus_group_size: usize,
    /// Start games with learning mode on
    pub educational_mode: bool,
    /// Chance that the rainbow power-up removes a given block
    pub rainbow_probability: f64,
    /// Seconds the freeze power-up lasts
    pub freeze_duration: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            selection_delay: 0.5,
            level_score_step: 1000,
            level_up_stars: 3,
            bonus_group_size: 5,
            educational_mode: false,
            rainbow_probability: 0.3,
            freeze_duration: 2.0,
        }
    }
}

/// A config value outside its allowed range
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid `{}`: {}", self.field, self.reason)
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Default settings with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Headless play: no highlight delay
    pub fn instant(seed: u64) -> Self {
        Self {
            selection_delay: 0.0,
            ..Self::seeded(seed)
        }
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.selection_delay.is_finite() && self.selection_delay >= 0.0) {
            return Err(ConfigError {
                field: "selection_delay",
                reason: "must be a non-negative number of seconds",
            });
        }
        if self.level_score_step == 0 {
            return Err(ConfigError {
                field: "level_score_step",
                reason: "must be positive",
            });
        }
        if self.bonus_group_size < MIN_SELECTABLE {
            return Err(ConfigError {
                field: "bonus_group_size",
                reason: "must be at least the smallest clearable group",
            });
        }
        if !(0.0..=1.0).contains(&self.rainbow_probability) {
            return Err(ConfigError {
                field: "rainbow_probability",
                reason: "must be between 0 and 1",
            });
        }
        if !(self.freeze_duration.is_finite() && self.freeze_duration >= 0.0) {
            return Err(ConfigError {
                field: "freeze_duration",
                reason: "must be a non-negative number of seconds",
            });
        }
        Ok(())
    }

    pub fn power_up_tuning(&self) -> PowerUpTuning {
        PowerUpTuning {
            rainbow_probability: self.rainbow_probability,
        }
    }
}
