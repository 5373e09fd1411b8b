//! End-to-end team search scenarios driven from JSON tables

use consortium_common::{PersonTable, SynergyTables, Team};
use consortium_synergy::TeamOptimizer;

fn five_persons() -> PersonTable {
    serde_json::from_str(
        r#"[
            {"id": "A", "score_per_min": 0.5},
            {"id": "B", "score_per_min": 0.4},
            {"id": "C", "score_per_min": 0.3},
            {"id": "D", "score_per_min": 0.2},
            {"id": "E", "score_per_min": 0.1}
        ]"#,
    )
    .unwrap()
}

#[test]
fn pair_of_two_with_single_synergy() {
    let persons = five_persons();
    let tables: SynergyTables = serde_json::from_str(
        r#"{"pair_synergy": [
            {"i": "A", "j": "B", "uplift": 0.2},
            {"i": "A", "j": "C", "uplift": 0.0},
            {"i": "D", "j": "E", "uplift": 0.0}
        ]}"#,
    )
    .unwrap();

    let best = TeamOptimizer::default()
        .find_best_team(&persons, &tables, 0.0, 2, 5, 0.2)
        .unwrap();

    assert_eq!(best.team, Team::new(["A", "B"]).unwrap());
    assert!((best.score - 0.94).abs() < 1e-12);
}

#[test]
fn group_synergy_pulls_in_weaker_member() {
    let persons = five_persons();
    let tables: SynergyTables = serde_json::from_str(
        r#"{"group_synergy": [{"group_key": "E|A|B", "uplift": 1.0}]}"#,
    )
    .unwrap();

    // A,B,E = 1.0 + 0.6 * 1.0 beats A,B,C = 1.2
    let best = TeamOptimizer::default()
        .find_best_team(&persons, &tables, 0.0, 3, 5, 1.0)
        .unwrap();
    assert_eq!(best.team, Team::new(["A", "B", "E"]).unwrap());
    assert!((best.score - 1.6).abs() < 1e-12);
}

#[test]
fn search_then_improve_finds_nothing_better() {
    let persons = five_persons();
    let tables: SynergyTables = serde_json::from_str(
        r#"{"pair_synergy": [{"i": "C", "j": "D", "uplift": 0.3}]}"#,
    )
    .unwrap();
    let optimizer = TeamOptimizer::default();

    let best = optimizer
        .find_best_team(&persons, &tables, 500_000.0, 3, 5, 0.4)
        .unwrap();
    let suggestions = optimizer
        .suggest_improvements(&best.team, &persons, &tables, 500_000.0, 0.4)
        .unwrap();

    // the exhaustive optimum has no improving single swap
    assert!(suggestions.is_empty());
}

#[test]
fn empty_candidate_list_is_a_sentinel() {
    let persons: PersonTable = serde_json::from_str("[]").unwrap();
    let best = TeamOptimizer::default()
        .find_best_team(&persons, &SynergyTables::default(), 0.0, 5, 12, 0.2)
        .unwrap();
    let json = serde_json::to_value(&best).unwrap();
    assert_eq!(json["reason"], "INSUFFICIENT_CANDIDATES");
}
