//! Team optimizer module
//!
//! - [`TeamOptimizer::find_best_team`]: exact search over the top candidates
//! - [`TeamOptimizer::suggest_improvements`]: single-swap hill-climbing step
//!
//! Both operations are stateless; the optimizer only carries configuration.

pub mod improve;
pub mod search;

use consortium_common::{ConsortiumError, Result, DEFAULT_TEAM_SIZE, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};

use crate::scoring::SynergyScorer;

pub use search::Combinations;

/// Hard ceiling on the search pool width
pub const MAX_TOP_K: usize = 20;

/// Non-member candidates considered per swap position
pub const DEFAULT_IMPROVEMENT_POOL: usize = 10;

/// Maximum suggestions returned by one improvement pass
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// How combinations are scored during exhaustive search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Score combinations one after another in enumeration order
    #[default]
    Sequential,
    /// Score combinations on the rayon pool, reduced by (score, enumeration index)
    Parallel,
}

/// Optimizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Team size used when the caller has no preference
    pub team_size: usize,
    /// Search pool width used when the caller has no preference
    pub top_k: usize,
    /// Largest accepted search pool width
    pub max_top_k: usize,
    /// Non-member candidates tried at each swap position
    pub improvement_pool: usize,
    /// Maximum improvements returned
    pub max_suggestions: usize,
    /// Sequential or parallel enumeration
    pub search_mode: SearchMode,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            top_k: DEFAULT_TOP_K,
            max_top_k: MAX_TOP_K,
            improvement_pool: DEFAULT_IMPROVEMENT_POOL,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            search_mode: SearchMode::Sequential,
        }
    }
}

impl OptimizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_top_k == 0 {
            return Err(ConsortiumError::config("max_top_k must be at least 1"));
        }
        if self.top_k == 0 || self.top_k > self.max_top_k {
            return Err(ConsortiumError::config(format!(
                "top_k must be within [1, {}], got {}",
                self.max_top_k, self.top_k
            )));
        }
        if self.team_size == 0 {
            return Err(ConsortiumError::config("team_size must be at least 1"));
        }
        Ok(())
    }
}

/// Team composition optimizer
#[derive(Debug, Clone, Default)]
pub struct TeamOptimizer {
    scorer: SynergyScorer,
    config: OptimizerConfig,
}

impl TeamOptimizer {
    pub fn new(scorer: SynergyScorer, config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { scorer, config })
    }

    pub fn scorer(&self) -> &SynergyScorer {
        &self.scorer
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Switch enumeration strategy; results are identical in both modes
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.config.search_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(OptimizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_top_k_above_ceiling_rejected() {
        let config = OptimizerConfig {
            top_k: 25,
            ..OptimizerConfig::default()
        };
        assert!(TeamOptimizer::new(SynergyScorer::default(), config).is_err());
    }

    #[test]
    fn test_search_mode_deserialize() {
        let config: OptimizerConfig =
            serde_json::from_str(r#"{"search_mode": "parallel", "top_k": 8}"#).unwrap();
        assert_eq!(config.search_mode, SearchMode::Parallel);
        assert_eq!(config.top_k, 8);
        assert_eq!(config.team_size, DEFAULT_TEAM_SIZE);
    }
}
