//! Synergy tables - collaboration uplifts for pairs and groups
//!
//! Uplifts are signed per-minute adjustments. Tables may be sparse; a missing
//! pair or group simply contributes nothing.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConsortiumError, Result};

/// Delimiter used in serialized group keys
pub const GROUP_KEY_DELIMITER: char = '|';

/// Uplift for an unordered pair of persons, stored with `i < j`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSynergy {
    pub i: String,
    pub j: String,
    pub uplift: f64,
}

impl PairSynergy {
    /// Create a pair record, normalizing the id order
    pub fn new(a: impl Into<String>, b: impl Into<String>, uplift: f64) -> Result<Self> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(ConsortiumError::invalid_input(format!(
                "pair synergy references the same person twice: {}",
                a
            )));
        }
        if !uplift.is_finite() {
            return Err(ConsortiumError::invalid_input(format!(
                "non-finite pair uplift for {}-{}",
                a, b
            )));
        }
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { i, j, uplift })
    }

    fn normalized(self) -> Result<Self> {
        Self::new(self.i, self.j, self.uplift)
    }
}

/// Sorted, de-duplicated member set of a synergy group
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupKey(BTreeSet<String>);

impl GroupKey {
    pub fn new<I, S>(members: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: BTreeSet<String> = members
            .into_iter()
            .map(Into::into)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if members.is_empty() {
            return Err(ConsortiumError::invalid_input("empty group key"));
        }
        Ok(Self(members))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every group member is in `team` (non-strict subset)
    pub fn is_subset_of(&self, team: &HashSet<&str>) -> bool {
        self.0.iter().all(|m| team.contains(m.as_str()))
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, member) in self.0.iter().enumerate() {
            if n > 0 {
                write!(f, "{}", GROUP_KEY_DELIMITER)?;
            }
            f.write_str(member)?;
        }
        Ok(())
    }
}

impl FromStr for GroupKey {
    type Err = ConsortiumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.split(GROUP_KEY_DELIMITER))
    }
}

impl TryFrom<String> for GroupKey {
    type Error = ConsortiumError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<GroupKey> for String {
    fn from(key: GroupKey) -> Self {
        key.to_string()
    }
}

/// Uplift applied when a whole group is on the team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSynergy {
    pub group_key: GroupKey,
    pub uplift: f64,
}

impl GroupSynergy {
    pub fn new(group_key: GroupKey, uplift: f64) -> Self {
        Self { group_key, uplift }
    }
}

/// Raw synergy records as they arrive from the loading boundary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynergyRecords {
    #[serde(default)]
    pub pair_synergy: Vec<PairSynergy>,
    #[serde(default)]
    pub group_synergy: Vec<GroupSynergy>,
}

/// Pair and group synergy lookups for one scoring period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "SynergyRecords", into = "SynergyRecords")]
pub struct SynergyTables {
    /// Keyed by the lower id, then the higher id
    pairs: HashMap<String, HashMap<String, f64>>,
    pair_count: usize,
    groups: Vec<GroupSynergy>,
}

impl SynergyTables {
    /// Build lookups, rejecting a second record for the same pair
    pub fn new(pairs: Vec<PairSynergy>, groups: Vec<GroupSynergy>) -> Result<Self> {
        if let Some(group) = groups.iter().find(|g| !g.uplift.is_finite()) {
            return Err(ConsortiumError::invalid_input(format!(
                "non-finite group uplift for {}",
                group.group_key
            )));
        }
        let mut table: HashMap<String, HashMap<String, f64>> = HashMap::new();
        let pair_count = pairs.len();
        for pair in pairs {
            let pair = pair.normalized()?;
            let row = table.entry(pair.i.clone()).or_default();
            if row.insert(pair.j.clone(), pair.uplift).is_some() {
                return Err(ConsortiumError::invalid_input(format!(
                    "duplicate pair synergy: {}-{}",
                    pair.i, pair.j
                )));
            }
        }
        Ok(Self {
            pairs: table,
            pair_count,
            groups,
        })
    }

    /// Pair uplift, independent of argument order
    pub fn pair_uplift(&self, a: &str, b: &str) -> Option<f64> {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.pairs.get(lo)?.get(hi).copied()
    }

    pub fn groups(&self) -> &[GroupSynergy] {
        &self.groups
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }
}

impl TryFrom<SynergyRecords> for SynergyTables {
    type Error = ConsortiumError;

    fn try_from(records: SynergyRecords) -> Result<Self> {
        Self::new(records.pair_synergy, records.group_synergy)
    }
}

impl From<SynergyTables> for SynergyRecords {
    fn from(tables: SynergyTables) -> Self {
        let mut pair_synergy: Vec<PairSynergy> = tables
            .pairs
            .into_iter()
            .flat_map(|(i, row)| {
                row.into_iter().map(move |(j, uplift)| PairSynergy {
                    i: i.clone(),
                    j,
                    uplift,
                })
            })
            .collect();
        pair_synergy.sort_by(|a, b| (&a.i, &a.j).cmp(&(&b.i, &b.j)));
        Self {
            pair_synergy,
            group_synergy: tables.groups,
        }
    }
}
