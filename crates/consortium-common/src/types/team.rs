//! Team - duplicate-free member list and optimizer outputs

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{ConsortiumError, Result};

/// A set of person ids kept in a fixed order for deterministic output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Team(Vec<String>);

impl Team {
    /// Create a team, rejecting duplicate members
    pub fn new<I, S>(members: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            if !seen.insert(member.as_str()) {
                return Err(ConsortiumError::invalid_input(format!(
                    "duplicate team member: {}",
                    member
                )));
            }
        }
        Ok(Self(members))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn members(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|m| m == id)
    }

    pub fn member_set(&self) -> HashSet<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    /// Replace the member at `position` with `add`, keeping the order
    pub fn with_substitution(&self, position: usize, add: &str) -> Result<Self> {
        if position >= self.0.len() {
            return Err(ConsortiumError::invalid_input(format!(
                "substitution position {} out of range for team of {}",
                position,
                self.0.len()
            )));
        }
        let mut members = self.0.clone();
        members[position] = add.to_string();
        Self::new(members)
    }
}

impl TryFrom<Vec<String>> for Team {
    type Error = ConsortiumError;

    fn try_from(members: Vec<String>) -> Result<Self> {
        Self::new(members)
    }
}

impl From<Team> for Vec<String> {
    fn from(team: Team) -> Self {
        team.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Why a search returned a sentinel instead of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchReason {
    /// No persons were available to form a team
    InsufficientCandidates,
}

impl SearchReason {
    pub fn code(&self) -> &'static str {
        match self {
            SearchReason::InsufficientCandidates => "INSUFFICIENT_CANDIDATES",
        }
    }
}

impl fmt::Display for SearchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Score of one evaluated team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamScoreResult {
    pub team: Team,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<SearchReason>,
}

impl TeamScoreResult {
    pub fn new(team: Team, score: f64) -> Self {
        Self {
            team,
            score,
            reason: None,
        }
    }

    /// Sentinel for "no viable team": empty team, zero score
    pub fn insufficient_candidates() -> Self {
        Self {
            team: Team::empty(),
            score: 0.0,
            reason: Some(SearchReason::InsufficientCandidates),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.reason.is_some()
    }
}

/// Per-term decomposition of a team score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of member productivity rates
    pub base: f64,
    /// Sum of non-negative pair uplifts
    pub pair_bonus: f64,
    /// Sum of non-negative uplifts of groups contained in the team
    pub group_bonus: f64,
    /// Scaled per-member share of burn cost
    pub burn_penalty: f64,
    /// base + gamma * (pair_bonus + group_weight * group_bonus) - burn_penalty
    pub total: f64,
}

/// A single-member substitution that raises the team score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub remove: String,
    pub add: String,
    pub new_team: Team,
    pub improvement: f64,
    pub new_score: f64,
}
