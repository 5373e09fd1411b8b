//! Exhaustive best-team search
//!
//! Candidates are ranked by score_per_min (stable on input order) and the
//! first `top_k` form the pool. Every `team_size` combination of the pool is
//! scored in lexicographic index order; the first maximum wins ties.

use consortium_common::{
    ConsortiumError, Person, PersonTable, Result, SynergyTables, Team, TeamScoreResult,
};
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use super::{SearchMode, TeamOptimizer};
use crate::scoring::SynergyScorer;

/// Lexicographic k-combinations of `0..n`
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Rightmost index that can still advance
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - self.k + i {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// C(n, k), saturating at `u128::MAX`
pub fn combination_count(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut count: u128 = 1;
    for i in 0..k {
        count = count.saturating_mul((n - i) as u128) / (i as u128 + 1);
    }
    count
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    index: usize,
    score: f64,
}

impl Scored {
    /// Higher score wins; equal scores go to the earlier enumeration index
    fn better(self, other: Scored) -> Scored {
        if other.score > self.score || (other.score == self.score && other.index < self.index) {
            other
        } else {
            self
        }
    }
}

impl TeamOptimizer {
    /// Find the highest-scoring team among the `top_k` strongest candidates.
    ///
    /// Returns the `INSUFFICIENT_CANDIDATES` sentinel when there are no
    /// persons at all. When fewer than `team_size` candidates are in the
    /// pool, the team size shrinks to the pool size.
    ///
    /// `team_size` and `top_k` are configuration values, not data: zero for
    /// either, or a `top_k` above [`OptimizerConfig::max_top_k`], is an
    /// `InvalidInput` error and never the sentinel. The sentinel is reserved
    /// for an empty candidate list.
    ///
    /// [`OptimizerConfig::max_top_k`]: super::OptimizerConfig::max_top_k
    #[instrument(skip(self, persons, tables), fields(candidates = persons.len()))]
    pub fn find_best_team(
        &self,
        persons: &PersonTable,
        tables: &SynergyTables,
        burn_cost: f64,
        team_size: usize,
        top_k: usize,
        gamma: f64,
    ) -> Result<TeamScoreResult> {
        if team_size == 0 {
            return Err(ConsortiumError::invalid_input("team_size must be at least 1"));
        }
        if top_k == 0 || top_k > self.config.max_top_k {
            return Err(ConsortiumError::invalid_input(format!(
                "top_k must be within [1, {}], got {}",
                self.config.max_top_k, top_k
            )));
        }
        SynergyScorer::check_weights(gamma, burn_cost)?;

        if persons.is_empty() {
            warn!("No candidates available, returning sentinel");
            return Ok(TeamScoreResult::insufficient_candidates());
        }

        let pool: Vec<&Person> = persons.ranked().into_iter().take(top_k).collect();
        let size = if pool.len() < team_size {
            warn!(
                requested = team_size,
                pool = pool.len(),
                "Candidate pool smaller than team size, shrinking team"
            );
            pool.len()
        } else {
            team_size
        };

        debug!(
            pool = pool.len(),
            team_size = size,
            combinations = %combination_count(pool.len(), size),
            pairs = tables.pair_count(),
            groups = tables.groups().len(),
            mode = ?self.config.search_mode,
            "Enumerating teams"
        );

        let score_combo = |combo: &[usize]| -> f64 {
            let members: Vec<&str> = combo.iter().map(|&i| pool[i].id.as_str()).collect();
            self.scorer
                .evaluate(&members, persons, tables, gamma, burn_cost)
                .total
        };

        let best = match self.config.search_mode {
            SearchMode::Sequential => {
                let mut best: Option<(Vec<usize>, f64)> = None;
                for combo in Combinations::new(pool.len(), size) {
                    let score = score_combo(&combo);
                    let replace = match &best {
                        Some((_, best_score)) => score > *best_score,
                        None => true,
                    };
                    if replace {
                        best = Some((combo, score));
                    }
                }
                best
            }
            SearchMode::Parallel => {
                let combos: Vec<Vec<usize>> = Combinations::new(pool.len(), size).collect();
                combos
                    .par_iter()
                    .enumerate()
                    .map(|(index, combo)| Scored {
                        index,
                        score: score_combo(combo),
                    })
                    .reduce_with(Scored::better)
                    .map(|winner| (combos[winner.index].clone(), winner.score))
            }
        };

        let Some((combo, score)) = best else {
            return Err(ConsortiumError::Internal(
                "enumeration produced no teams".to_string(),
            ));
        };

        let team = Team::new(combo.iter().map(|&i| pool[i].id.clone()))?;
        info!(team = %team, score, "Best team found");
        Ok(TeamScoreResult::new(team, score))
    }
}
