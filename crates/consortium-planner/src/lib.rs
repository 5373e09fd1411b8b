//! # Consortium Planner
//!
//! Runs one planning period: picks the best team, suggests swaps for the
//! team currently in place, and tunes the coefficients for next period.
//!
//! ```text
//! period.json ──► PeriodInput ──► TeamOptimizer ──► best team + swaps
//!                      │
//!                      └────────► ParameterTuner ──► next TuningState
//! ```
//!
//! The gamma used for scoring is the one carried in `previous_state`, so the
//! tuned value from period N drives team selection in period N+1.

pub mod config;
pub mod period;

pub use config::PlannerConfig;
pub use period::{run_period, PeriodInput, PeriodReport};

/// Planner version
pub const PLANNER_VERSION: &str = env!("CARGO_PKG_VERSION");
