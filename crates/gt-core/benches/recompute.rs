//! Criterion benchmarks for `gt-core`.
//!
//! The engine recomputes the whole report from scratch on every observation
//! change, so `assess` is the hot path worth watching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gt_catalog::Evidence;
use gt_common::TemperatureUnit;
use gt_core::{Engine, Observations};

fn observation_states() -> Vec<(&'static str, Observations)> {
    let fresh = Observations::default();

    let mut midgame = Observations::default();
    midgame.evidence.confirm(Evidence::Emf5);
    midgame.evidence.rule_out(Evidence::GhostOrb);
    midgame.factors.temperature_celsius = Some(4.0);
    midgame.seconds_since_incense = Some(45.0);

    let mut endgame = Observations::default();
    endgame.evidence.confirm(Evidence::Emf5);
    endgame.evidence.confirm(Evidence::SpiritBox);
    endgame.evidence.confirm(Evidence::GhostWriting);
    endgame.seconds_since_incense = Some(120.0);

    vec![("fresh", fresh), ("midgame", midgame), ("endgame", endgame)]
}

fn bench_assess(c: &mut Criterion) {
    let engine = Engine::new().expect("engine construction failed");
    let mut group = c.benchmark_group("recompute");

    for (name, obs) in observation_states() {
        group.bench_with_input(BenchmarkId::new("assess", name), &obs, |b, obs| {
            b.iter(|| black_box(engine.assess(black_box(obs), TemperatureUnit::Celsius)));
        });
    }

    group.finish();
}

fn bench_narrow(c: &mut Criterion) {
    let engine = Engine::new().expect("engine construction failed");
    let obs = Observations::default();

    c.bench_function("narrow_by_tempo", |b| {
        b.iter(|| black_box(engine.narrow_by_tempo(black_box(&obs), black_box(115.3))));
    });
}

criterion_group!(benches, bench_assess, bench_narrow);
criterion_main!(benches);
