//! Synergy scorer
//!
//! Pure function of its inputs. Missing persons and missing synergy records
//! count as zero; only negative weights and empty teams are rejected.

use consortium_common::{
    ConsortiumError, PersonTable, Result, ScoreBreakdown, SynergyTables, Team,
    BURN_UNIT_SCALE, DEFAULT_GROUP_WEIGHT,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// Scorer constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Weight of group uplift relative to pair uplift (0.0 - 1.0)
    pub group_weight: f64,
    /// Scale turning aggregate burn into per-minute score units
    pub burn_unit_scale: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            group_weight: DEFAULT_GROUP_WEIGHT,
            burn_unit_scale: BURN_UNIT_SCALE,
        }
    }
}

impl ScorerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.group_weight) {
            return Err(ConsortiumError::config(format!(
                "group_weight must be within [0, 1], got {}",
                self.group_weight
            )));
        }
        if !self.burn_unit_scale.is_finite() || self.burn_unit_scale < 0.0 {
            return Err(ConsortiumError::config(format!(
                "burn_unit_scale must be a non-negative number, got {}",
                self.burn_unit_scale
            )));
        }
        Ok(())
    }
}

/// Team scorer
#[derive(Debug, Clone, Default)]
pub struct SynergyScorer {
    config: ScorerConfig,
}

impl SynergyScorer {
    pub fn new(config: ScorerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score a team: base + γ × (pair + w × group) − burn penalty
    pub fn score(
        &self,
        team: &Team,
        persons: &PersonTable,
        tables: &SynergyTables,
        gamma: f64,
        burn_cost: f64,
    ) -> Result<f64> {
        Ok(self
            .breakdown(team, persons, tables, gamma, burn_cost)?
            .total)
    }

    /// Score a team and return every term of the formula
    pub fn breakdown(
        &self,
        team: &Team,
        persons: &PersonTable,
        tables: &SynergyTables,
        gamma: f64,
        burn_cost: f64,
    ) -> Result<ScoreBreakdown> {
        if team.is_empty() {
            return Err(ConsortiumError::invalid_team("team has no members"));
        }
        Self::check_weights(gamma, burn_cost)?;

        let members: Vec<&str> = team.members().iter().map(String::as_str).collect();
        Ok(self.evaluate(&members, persons, tables, gamma, burn_cost))
    }

    /// Reject weights that would let the bonus terms subtract value
    pub fn check_weights(gamma: f64, burn_cost: f64) -> Result<()> {
        if !gamma.is_finite() || gamma < 0.0 {
            return Err(ConsortiumError::invalid_input(format!(
                "gamma must be a non-negative number, got {}",
                gamma
            )));
        }
        if !burn_cost.is_finite() || burn_cost < 0.0 {
            return Err(ConsortiumError::invalid_input(format!(
                "burn_cost must be a non-negative number, got {}",
                burn_cost
            )));
        }
        Ok(())
    }

    /// Unchecked evaluation over distinct member ids.
    ///
    /// Callers guarantee the members are distinct and the weights passed
    /// [`Self::check_weights`]. A single member has no pairs, so both bonus
    /// terms come out as zero.
    pub(crate) fn evaluate(
        &self,
        members: &[&str],
        persons: &PersonTable,
        tables: &SynergyTables,
        gamma: f64,
        burn_cost: f64,
    ) -> ScoreBreakdown {
        let base: f64 = members.iter().map(|id| persons.score_of(id)).sum();

        let mut pair_bonus = 0.0;
        for (n, a) in members.iter().enumerate() {
            for b in &members[n + 1..] {
                if let Some(uplift) = tables.pair_uplift(a, b) {
                    pair_bonus += uplift.max(0.0);
                }
            }
        }

        let mut group_bonus = 0.0;
        if members.len() > 1 && !tables.groups().is_empty() {
            let member_set: HashSet<&str> = members.iter().copied().collect();
            group_bonus = tables
                .groups()
                .iter()
                .filter(|g| g.group_key.is_subset_of(&member_set))
                .map(|g| g.uplift.max(0.0))
                .sum();
        }

        let burn_penalty =
            (burn_cost / members.len().max(1) as f64) * self.config.burn_unit_scale;

        let bonus = weighted(
            gamma,
            pair_bonus + weighted(self.config.group_weight, group_bonus),
        );
        let total = base + bonus - burn_penalty;

        trace!(
            members = members.len(),
            base,
            pair_bonus,
            group_bonus,
            burn_penalty,
            total,
            "Scored team"
        );

        ScoreBreakdown {
            base,
            pair_bonus,
            group_bonus,
            burn_penalty,
            total,
        }
    }
}

/// `weight × term`, where a zero weight switches the term off entirely.
/// Uplift sums can overflow to infinity and `0 × inf` would be NaN.
fn weighted(weight: f64, term: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        weight * term
    }
}
