//! Team search benchmarks
//!
//! The exhaustive search is the only CPU-bound path. Pool widths 8/12/16 at
//! team size 5 cover 56, 792 and 4368 combinations.

use consortium_common::{GroupKey, GroupSynergy, PairSynergy, Person, PersonTable, SynergyTables};
use consortium_synergy::{SearchMode, TeamOptimizer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

fn fixture(n: usize) -> (PersonTable, SynergyTables) {
    let persons = (0..n)
        .map(|i| Person::new(format!("p{:02}", i), 1.0 - i as f64 * 0.01))
        .collect();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if (i * 7 + j * 3) % 5 == 0 {
                let uplift = ((i + j) % 7) as f64 * 0.03 - 0.05;
                let pair = PairSynergy::new(format!("p{:02}", i), format!("p{:02}", j), uplift);
                pairs.push(pair.unwrap());
            }
        }
    }
    let groups = (0..n.saturating_sub(2))
        .step_by(3)
        .map(|i| {
            let key = GroupKey::new([
                format!("p{:02}", i),
                format!("p{:02}", i + 1),
                format!("p{:02}", i + 2),
            ])
            .unwrap();
            GroupSynergy::new(key, 0.1)
        })
        .collect();
    (
        PersonTable::new(persons).unwrap(),
        SynergyTables::new(pairs, groups).unwrap(),
    )
}

fn bench_find_best_team(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_best_team");
    group.measurement_time(Duration::from_secs(10));

    let (persons, tables) = fixture(20);
    for top_k in [8usize, 12, 16].iter() {
        for mode in [SearchMode::Sequential, SearchMode::Parallel] {
            let optimizer = TeamOptimizer::default().with_search_mode(mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), top_k),
                top_k,
                |b, &top_k| {
                    b.iter(|| {
                        optimizer
                            .find_best_team(
                                black_box(&persons),
                                black_box(&tables),
                                1_000.0,
                                5,
                                top_k,
                                0.2,
                            )
                            .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_suggest_improvements(c: &mut Criterion) {
    let (persons, tables) = fixture(20);
    let optimizer = TeamOptimizer::default();
    let team = consortium_common::Team::new(["p10", "p11", "p12", "p13", "p14"]).unwrap();

    c.bench_function("suggest_improvements", |b| {
        b.iter(|| {
            optimizer
                .suggest_improvements(black_box(&team), &persons, &tables, 1_000.0, 0.2)
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_find_best_team, bench_suggest_improvements);
criterion_main!(benches);
