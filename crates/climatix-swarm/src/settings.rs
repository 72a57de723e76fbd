//! Climatix settings
//!
//! Layered from lowest to highest priority:
//! 1. Built-in defaults
//! 2. The file named by `CLIMATIX_CONFIG_FILE` (toml, yaml, json, ...), if set
//! 3. `CLIMATIX_`-prefixed environment variables, `__` between sections,
//!    e.g. `CLIMATIX_SWARM__POPULATION=50`
//!
//! A `.env` file in the working directory is read first if present.

use ::config::{Config, Environment, File};
use climatix_common::{Bounds, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::objective::hvac::HvacScenario;
use crate::SwarmConfig;

/// Environment variable naming an optional settings file
pub const CONFIG_FILE_VAR: &str = "CLIMATIX_CONFIG_FILE";

/// Everything needed to run the HVAC optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimatixSettings {
    /// Swarm run configuration
    pub swarm: SwarmConfig,
    /// Environmental reading to optimize for
    pub scenario: HvacScenario,
    /// Search range for the control level
    pub bounds: Bounds,
}

impl Default for ClimatixSettings {
    fn default() -> Self {
        Self {
            swarm: SwarmConfig::default(),
            scenario: HvacScenario::default(),
            bounds: Bounds::unit(),
        }
    }
}

impl ClimatixSettings {
    /// Load settings from defaults, an optional file, and the environment.
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(file) = std::env::var(CONFIG_FILE_VAR) {
            debug!(file = %file, "Reading settings file");
            builder = builder.add_source(File::with_name(&file).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("CLIMATIX")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.swarm.validate()?;
        self.scenario.validate()?;
        Ok(())
    }
}
