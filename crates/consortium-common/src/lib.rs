//! # Consortium Common
//!
//! Shared types and errors for the Consortium team planner.
//!
//! ## Core Types
//!
//! - [`Person`]/[`PersonTable`]: per-person productivity rates (score per minute)
//! - [`PairSynergy`]/[`GroupSynergy`]: collaboration uplifts, bundled in [`SynergyTables`]
//! - [`Team`]: duplicate-free member list
//! - [`TeamScoreResult`]/[`ScoreBreakdown`]/[`Improvement`]: optimizer outputs
//! - [`KpiSnapshot`]/[`TuningState`]: tuner input and output

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ConsortiumError, Result};
pub use types::{
    kpi::KpiSnapshot,
    person::{Person, PersonTable},
    synergy::{GroupKey, GroupSynergy, PairSynergy, SynergyRecords, SynergyTables},
    team::{Improvement, ScoreBreakdown, SearchReason, Team, TeamScoreResult},
    tuning::TuningState,
};

/// Consortium version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default team size for composition search
pub const DEFAULT_TEAM_SIZE: usize = 5;

/// Default search pool width for exhaustive team search
pub const DEFAULT_TOP_K: usize = 12;

/// Default weight of group uplift relative to pair uplift
pub const DEFAULT_GROUP_WEIGHT: f64 = 0.6;

/// Unit scale converting aggregate burn into per-minute score magnitude
pub const BURN_UNIT_SCALE: f64 = 1e-6;

/// Minimum events per period before the tuner adjusts anything
pub const MIN_TUNING_EVENTS: u64 = 5;
