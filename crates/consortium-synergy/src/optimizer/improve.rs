//! Single-swap improvement suggestions
//!
//! One hill-climbing step: every member is tried against the strongest
//! non-members. Improvements that need two simultaneous swaps are not found.

use consortium_common::{Improvement, Person, PersonTable, Result, SynergyTables, Team};
use tracing::{debug, instrument};

use super::TeamOptimizer;

impl TeamOptimizer {
    /// Suggest substitutions that raise the score of `current`, best first.
    ///
    /// Teams with fewer than two members have no neighbourhood and yield an
    /// empty list.
    #[instrument(skip(self, persons, tables), fields(team = %current))]
    pub fn suggest_improvements(
        &self,
        current: &Team,
        persons: &PersonTable,
        tables: &SynergyTables,
        burn_cost: f64,
        gamma: f64,
    ) -> Result<Vec<Improvement>> {
        if current.len() < 2 {
            debug!("Team too small for substitutions");
            return Ok(Vec::new());
        }

        let current_score = self
            .scorer
            .score(current, persons, tables, gamma, burn_cost)?;

        let candidates: Vec<&Person> = persons
            .ranked()
            .into_iter()
            .filter(|p| !current.contains(&p.id))
            .take(self.config.improvement_pool)
            .collect();

        let mut improvements = Vec::new();
        for (position, member) in current.members().iter().enumerate() {
            for candidate in &candidates {
                let new_team = current.with_substitution(position, &candidate.id)?;
                let new_score = self
                    .scorer
                    .score(&new_team, persons, tables, gamma, burn_cost)?;
                let improvement = new_score - current_score;
                if improvement > 0.0 {
                    improvements.push(Improvement {
                        remove: member.clone(),
                        add: candidate.id.clone(),
                        new_team,
                        improvement,
                        new_score,
                    });
                }
            }
        }

        // Stable: equal improvements keep member-then-candidate order
        improvements.sort_by(|a, b| b.improvement.total_cmp(&a.improvement));
        improvements.truncate(self.config.max_suggestions);

        debug!(
            current_score,
            candidates = candidates.len(),
            suggestions = improvements.len(),
            "Improvement pass complete"
        );
        Ok(improvements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::OptimizerConfig;
    use crate::scoring::SynergyScorer;
    use consortium_common::PairSynergy;

    fn persons() -> PersonTable {
        PersonTable::new(vec![
            Person::new("A", 0.5),
            Person::new("B", 0.4),
            Person::new("C", 0.3),
            Person::new("D", 0.2),
            Person::new("E", 0.1),
        ])
        .unwrap()
    }

    #[test]
    fn test_swaps_in_stronger_candidate() {
        let optimizer = TeamOptimizer::default();
        let team = Team::new(["D", "E"]).unwrap();

        let suggestions = optimizer
            .suggest_improvements(&team, &persons(), &SynergyTables::default(), 0.0, 0.2)
            .unwrap();

        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 5);
        // Best single swap replaces E (0.1) with A (0.5)
        let best = &suggestions[0];
        assert_eq!(best.remove, "E");
        assert_eq!(best.add, "A");
        assert_eq!(best.new_team.members(), &["D", "A"]);
        assert!((best.improvement - 0.4).abs() < 1e-12);
        assert!((best.new_score - 0.7).abs() < 1e-12);

        for pair in suggestions.windows(2) {
            assert!(pair[0].improvement >= pair[1].improvement);
        }
        assert!(suggestions.iter().all(|s| s.improvement > 0.0));
    }

    #[test]
    fn test_optimal_team_has_no_suggestions() {
        let optimizer = TeamOptimizer::default();
        let team = Team::new(["A", "B"]).unwrap();

        let suggestions = optimizer
            .suggest_improvements(&team, &persons(), &SynergyTables::default(), 0.0, 0.2)
            .unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_synergy_drives_suggestion() {
        let optimizer = TeamOptimizer::default();
        let tables =
            SynergyTables::new(vec![PairSynergy::new("A", "E", 1.0).unwrap()], vec![]).unwrap();
        let team = Team::new(["A", "B"]).unwrap();

        let suggestions = optimizer
            .suggest_improvements(&team, &persons(), &tables, 0.0, 0.5)
            .unwrap();
        // swapping B for E: 0.6 + 0.5 = 1.1 vs 0.9
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].remove, "B");
        assert_eq!(suggestions[0].add, "E");
    }

    #[test]
    fn test_small_team_yields_nothing() {
        let optimizer = TeamOptimizer::default();
        let team = Team::new(["E"]).unwrap();
        let suggestions = optimizer
            .suggest_improvements(&team, &persons(), &SynergyTables::default(), 0.0, 0.2)
            .unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_only_top_outsiders_are_candidates() {
        // two weak members, twelve stronger outsiders o00 > o01 > ... > o11
        let mut people = vec![Person::new("m0", 0.01), Person::new("m1", 0.01)];
        people.extend((0..12).map(|i| Person::new(format!("o{:02}", i), 1.0 - i as f64 * 0.01)));
        let persons = PersonTable::new(people).unwrap();

        // a huge uplift with the twelfth-ranked outsider, outside the pool of 10
        let tables =
            SynergyTables::new(vec![PairSynergy::new("m0", "o11", 100.0).unwrap()], vec![])
                .unwrap();
        let team = Team::new(["m0", "m1"]).unwrap();
        let optimizer = TeamOptimizer::default();
        assert_eq!(optimizer.config().improvement_pool, 10);

        let suggestions = optimizer
            .suggest_improvements(&team, &persons, &tables, 0.0, 1.0)
            .unwrap();

        assert_eq!(suggestions.len(), 5);
        assert!(suggestions.iter().all(|s| s.add != "o10" && s.add != "o11"));
        assert_eq!(suggestions[0].add, "o00");

        // widening the pool lets the synergy swap through
        let wide = TeamOptimizer::new(
            SynergyScorer::default(),
            OptimizerConfig {
                improvement_pool: 12,
                ..OptimizerConfig::default()
            },
        )
        .unwrap();
        let suggestions = wide
            .suggest_improvements(&team, &persons, &tables, 0.0, 1.0)
            .unwrap();
        assert_eq!(suggestions[0].remove, "m1");
        assert_eq!(suggestions[0].add, "o11");
    }

    #[test]
    fn test_suggestions_capped() {
        let optimizer = TeamOptimizer::new(
            SynergyScorer::default(),
            OptimizerConfig {
                max_suggestions: 2,
                ..OptimizerConfig::default()
            },
        )
        .unwrap();
        let team = Team::new(["D", "E"]).unwrap();
        let suggestions = optimizer
            .suggest_improvements(&team, &persons(), &SynergyTables::default(), 0.0, 0.2)
            .unwrap();
        assert_eq!(suggestions.len(), 2);
    }
}
