//! # Consortium Synergy
//!
//! Team valuation and composition search.
//!
//! ## Team Score Formula
//!
//! ```text
//! S = B + γ × (P + w × G) − K
//! ```
//!
//! Where:
//! - B: Sum of member score_per_min
//! - P: Sum of non-negative pair uplifts over all member pairs
//! - G: Sum of non-negative uplifts of groups fully contained in the team
//! - w: Group weight (default 0.6)
//! - γ: Team-bonus weight (tuned each period)
//! - K: Burn penalty, (burn / max(1, |team|)) × 1e-6
//!
//! ## Search
//!
//! [`TeamOptimizer::find_best_team`] exhaustively scores every combination of
//! the `top_k` strongest candidates. Cost grows as C(top_k, team_size), so
//! `top_k` is capped by [`OptimizerConfig::max_top_k`]. The default `top_k`
//! of 12 gives at most 792 teams of five.

pub mod optimizer;
pub mod scoring;

pub use optimizer::{OptimizerConfig, SearchMode, TeamOptimizer};
pub use scoring::{ScorerConfig, SynergyScorer};
