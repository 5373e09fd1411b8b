//! Planner configuration

use anyhow::{Context, Result};
use consortium_synergy::{OptimizerConfig, ScorerConfig};
use consortium_tuner::TunerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `CONSORTIUM__OPTIMIZER__TOP_K=10`
pub const ENV_PREFIX: &str = "CONSORTIUM";

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "consortium";

/// Planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Synergy scorer constants
    pub scorer: ScorerConfig,
    /// Team search settings
    pub optimizer: OptimizerConfig,
    /// Tuner thresholds and bounds
    pub tuner: TunerConfig,
}

impl PlannerConfig {
    /// Load configuration from an optional file and the environment.
    ///
    /// Layers, lowest first: built-in defaults, the config file (explicit
    /// path, or `consortium.{toml,json,yaml}` if present), then
    /// `CONSORTIUM__SECTION__KEY` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let cfg: PlannerConfig = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read planner configuration")?
            .try_deserialize()
            .context("Failed to parse planner configuration")?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.scorer.validate()?;
        self.optimizer.validate()?;
        self.tuner.validate()?;
        Ok(())
    }
}
