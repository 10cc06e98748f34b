//! Benchmarks for conversion plan assembly.
//!
//! Covers the full pipeline plus its stages in isolation, so regressions
//! can be pinned to scoring, phase planning, or cohesion analysis.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use modmap::cohesion::survey;
use modmap::config::ModmapConfig;
use modmap::priority::{conversion_candidates, plan_phases, PlannerConfig};
use modmap::{build_plan, InventorySnapshot, ModuleRecord, RouteRecord};
use std::hint::black_box;

const FEATURE_SETS: &[&[&str]] = &[
    &["AI"],
    &["Resonance"],
    &["Translation", "Real-time"],
    &["Security"],
    &["Graph", "Storage"],
    &[],
];

const PATH_PREFIXES: &[&str] = &["/ai/", "/concept/", "/joy/", "/translation/", "/api/"];

fn synthetic_module(i: usize) -> ModuleRecord {
    let kind = match i % 9 {
        0 => "spec",
        1 => "test",
        2 => "core",
        3 => "concept",
        _ => "svc",
    };
    ModuleRecord {
        id: format!("codex.{kind}-{i}"),
        name: format!("Module {i}"),
        version: "1.0.0".to_string(),
        features: FEATURE_SETS[i % FEATURE_SETS.len()]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        is_hot_reloadable: i % 4 == 0,
        is_stable: i % 11 == 0,
    }
}

fn synthetic_snapshot(modules: usize, routes_per_module: usize) -> InventorySnapshot {
    let module_records: Vec<ModuleRecord> = (0..modules).map(synthetic_module).collect();
    let routes: Vec<RouteRecord> = module_records
        .iter()
        .enumerate()
        .flat_map(|(i, module)| {
            (0..routes_per_module).map(move |n| {
                let prefix = PATH_PREFIXES[(i + n) % PATH_PREFIXES.len()];
                RouteRecord {
                    id: format!("{}.r{n}", module.id),
                    path: format!("{prefix}op{n}"),
                    method: "GET".to_string(),
                    module_id: module.id.clone(),
                    name: format!("op {n}"),
                    description: String::new(),
                }
            })
        })
        .collect();
    InventorySnapshot::from_records(module_records, routes)
}

fn bench_full_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_plan");
    let config = ModmapConfig::default();

    for modules in [50, 200, 500].iter() {
        let snapshot = synthetic_snapshot(*modules, 10);
        group.bench_with_input(
            BenchmarkId::from_parameter(modules),
            modules,
            |b, _| {
                b.iter(|| black_box(build_plan(black_box(&snapshot), &config)));
            },
        );
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(200, 10);
    c.bench_function("conversion_candidates_200", |b| {
        b.iter(|| black_box(conversion_candidates(black_box(&snapshot))));
    });
}

fn bench_phase_planning(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(200, 10);
    let candidates = conversion_candidates(&snapshot);
    let config = PlannerConfig::default();
    c.bench_function("plan_phases_200", |b| {
        b.iter(|| black_box(plan_phases(black_box(&candidates), &config)));
    });
}

fn bench_cohesion_survey(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(200, 10);
    let config = ModmapConfig::default();
    c.bench_function("cohesion_survey_2000_routes", |b| {
        b.iter(|| black_box(survey(black_box(&snapshot), &config.cohesion)));
    });
}

fn bench_plan_serialization(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(200, 10);
    let config = ModmapConfig::default();
    let plan = build_plan(&snapshot, &config);
    c.bench_function("plan_to_json_200", |b| {
        b.iter(|| black_box(serde_json::to_string_pretty(black_box(&plan)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_full_plan,
    bench_scoring,
    bench_phase_planning,
    bench_cohesion_survey,
    bench_plan_serialization
);
criterion_main!(benches);
