//! One planning period: input document, report, and the driver tying the
//! optimizer and tuner together.

use anyhow::{Context, Result};
use consortium_common::{
    Improvement, KpiSnapshot, PersonTable, ScoreBreakdown, SynergyRecords, SynergyTables, Team,
    TeamScoreResult, TuningState,
};
use consortium_synergy::{SynergyScorer, TeamOptimizer};
use consortium_tuner::{ParameterTuner, TuningDecision};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::config::PlannerConfig;

/// Period input document
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodInput {
    pub persons: PersonTable,
    #[serde(flatten)]
    pub synergy: SynergyRecords,
    #[serde(default)]
    pub burn_cost: f64,
    /// Team in place this period, for swap suggestions
    #[serde(default)]
    pub current_team: Option<Team>,
    /// Period KPIs; tuning is skipped without them
    #[serde(default)]
    pub kpi: Option<KpiSnapshot>,
    /// Coefficients decided last period
    #[serde(default)]
    pub previous_state: Option<TuningState>,
    /// Overrides `optimizer.team_size`
    #[serde(default)]
    pub team_size: Option<usize>,
    /// Overrides `optimizer.top_k`
    #[serde(default)]
    pub top_k: Option<usize>,
}

impl PeriodInput {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse period input")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw)
    }
}

/// Period report written to stdout
#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    pub best_team: TeamScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_breakdown: Option<ScoreBreakdown>,
    pub improvements: Vec<Improvement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuning: Option<TuningDecision>,
}

/// Run search, swap suggestions and tuning for one period
#[instrument(skip(config, input), fields(persons = input.persons.len()))]
pub fn run_period(config: &PlannerConfig, input: PeriodInput) -> Result<PeriodReport> {
    let tables = SynergyTables::try_from(input.synergy).context("Invalid synergy tables")?;
    let scorer = SynergyScorer::new(config.scorer.clone())?;
    let optimizer = TeamOptimizer::new(scorer, config.optimizer.clone())?;

    let state = input.previous_state.unwrap_or_default();
    let team_size = input.team_size.unwrap_or(config.optimizer.team_size);
    let top_k = input.top_k.unwrap_or(config.optimizer.top_k);

    let best_team = optimizer.find_best_team(
        &input.persons,
        &tables,
        input.burn_cost,
        team_size,
        top_k,
        state.gamma,
    )?;

    let best_breakdown = if best_team.is_sentinel() {
        warn!("No team could be formed from the candidate list");
        None
    } else {
        Some(optimizer.scorer().breakdown(
            &best_team.team,
            &input.persons,
            &tables,
            state.gamma,
            input.burn_cost,
        )?)
    };

    let improvements = match &input.current_team {
        Some(team) => optimizer.suggest_improvements(
            team,
            &input.persons,
            &tables,
            input.burn_cost,
            state.gamma,
        )?,
        None => Vec::new(),
    };

    let tuning = match &input.kpi {
        Some(kpi) => {
            let tuner = ParameterTuner::new(config.tuner.clone())?;
            Some(tuner.tune(&state, kpi))
        }
        None => None,
    };

    info!(
        team = %best_team.team,
        score = best_team.score,
        suggestions = improvements.len(),
        tuned = tuning.is_some(),
        "Period planned"
    );

    Ok(PeriodReport {
        best_team,
        best_breakdown,
        improvements,
        tuning,
    })
}
