//! Configuration types for the simulation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// World configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width of the world grid
    pub width: i32,
    /// Height of the world grid
    pub height: i32,
    /// Chance for each cell to become rock (percent, 0 to 100)
    pub rock_chance: u8,
    /// Chance for each cell left empty after the rock pass to get a creature (percent, 0 to 100)
    pub creature_chance: u8,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            rock_chance: 10,
            creature_chance: 40,
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.rock_chance > 100 {
            return Err(Error::Validation(format!(
                "rock chance must be between 0 and 100, got {}",
                self.rock_chance
            )));
        }
        if self.creature_chance > 100 {
            return Err(Error::Validation(format!(
                "creature chance must be between 0 and 100, got {}",
                self.creature_chance
            )));
        }
        Ok(())
    }
}

/// How a pass observes the changes it makes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Every decision in a pass reads the grid as it was before the pass
    #[default]
    Snapshot,
    /// Cells are rewritten during the row-major scan, so later cells see
    /// earlier changes from the same pass
    InPlace,
}

/// Run loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// World configuration
    pub world: WorldConfig,
    /// Seconds between generations
    pub tick_interval_secs: f64,
    /// Random seed for reproducibility; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Stop after this many generations; run until interrupted when absent
    pub max_ticks: Option<u64>,
    /// Pass evaluation policy
    pub update_policy: UpdatePolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            tick_interval_secs: 0.5,
            seed: None,
            max_ticks: None,
            update_policy: UpdatePolicy::default(),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        self.world.validate()?;
        if !self.tick_interval_secs.is_finite() || self.tick_interval_secs < 0.0 {
            return Err(Error::Validation(format!(
                "tick interval must be a non-negative number of seconds, got {}",
                self.tick_interval_secs
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading run configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}
