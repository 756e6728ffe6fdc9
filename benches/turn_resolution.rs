//! Benchmarks for turn resolution and full turn commits.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_duel::catalog::{AmmunitionId, Catalog, WallId};
use rust_duel::core::{CombatantConfig, CombatantId, SessionConfig, SessionId, TurnAction};
use rust_duel::rules::TurnResolver;
use rust_duel::session::{snapshot, SessionLifecycle};
use std::hint::black_box;

fn exchange_actions() -> [TurnAction; 2] {
    [
        TurnAction::new(CombatantId::First)
            .with_ammunition(AmmunitionId::new(3))
            .with_wall(WallId::new(1)),
        TurnAction::new(CombatantId::Second)
            .with_ammunition(AmmunitionId::new(2))
            .with_wall(WallId::new(2)),
    ]
}

fn benchmark_resolve(criterion: &mut Criterion) {
    let catalog = Catalog::standard();
    let actions = exchange_actions();

    criterion.bench_function("resolve_exchange", |bencher| {
        bencher.iter(|| TurnResolver::resolve(black_box(catalog), black_box(&actions)));
    });
}

fn benchmark_play_turns(criterion: &mut Criterion) {
    let catalog = Catalog::standard();
    let actions = exchange_actions();
    let mut group = criterion.benchmark_group("play_turns");

    for turns in [1u32, 10, 100] {
        let combatant = CombatantConfig::new(u32::MAX, u32::MAX);
        let config = SessionConfig::duel(combatant, combatant).without_turn_limit();

        group.bench_with_input(BenchmarkId::new("turns", turns), &turns, |bencher, &turns| {
            bencher.iter(|| {
                let mut session = SessionLifecycle::start(SessionId::new(1), &config).unwrap();
                for turn in 1..=turns {
                    SessionLifecycle::play_turn(&mut session, turn, &actions, catalog).unwrap();
                }
                black_box(session)
            });
        });
    }

    group.finish();
}

fn benchmark_snapshot(criterion: &mut Criterion) {
    let catalog = Catalog::standard();
    let actions = exchange_actions();
    let combatant = CombatantConfig::new(u32::MAX, u32::MAX);
    let config = SessionConfig::duel(combatant, combatant).without_turn_limit();

    let mut session = SessionLifecycle::start(SessionId::new(1), &config).unwrap();
    for turn in 1..=50 {
        SessionLifecycle::play_turn(&mut session, turn, &actions, catalog).unwrap();
    }

    criterion.bench_function("snapshot_clone_50_turns", |bencher| {
        bencher.iter(|| black_box(session.clone()));
    });
    criterion.bench_function("snapshot_encode_50_turns", |bencher| {
        bencher.iter(|| snapshot::encode(black_box(&session)).unwrap());
    });
}

criterion_group!(benches, benchmark_resolve, benchmark_play_turns, benchmark_snapshot);
criterion_main!(benches);
