//! Decision-path benchmarks
//!
//! Measures `allowed_for_user` against role sets of increasing size, with
//! and without instance-name checks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stratovm_rbac::{Policy, RbacEngine};

fn engine_with_policies(policy_count: usize) -> RbacEngine {
    let engine = RbacEngine::new();

    let mut policies = Vec::with_capacity(policy_count);
    for i in 0..policy_count {
        let mut policy = Policy::new();
        policy.add_resource_types([format!("vms/type-{}", i % 100)]);
        policy.add_resource_names([format!("name_{}_*", i % 10)]).unwrap();
        policy.add_verbs(["get", "list"]).unwrap();
        policies.push(policy);
    }

    let role = engine.new_role("Bench", policies).unwrap();
    engine.bind_user("bench@foo.com", &role);
    engine
}

fn bench_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("allowed_for_user");

    for policy_count in [10, 100, 1000] {
        let engine = engine_with_policies(policy_count);

        group.bench_with_input(
            BenchmarkId::new("policies", policy_count),
            &policy_count,
            |b, _| {
                b.iter(|| {
                    black_box(engine.allowed_for_user(
                        black_box("bench@foo.com"),
                        black_box("vms/type-42"),
                        black_box("get"),
                        &[],
                    ))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("policies_with_names", policy_count),
            &policy_count,
            |b, _| {
                b.iter(|| {
                    black_box(engine.allowed_for_user(
                        black_box("bench@foo.com"),
                        black_box("vms/type-42"),
                        black_box("get"),
                        black_box(&["name_2_web", "name_3_db"]),
                    ))
                })
            },
        );
    }

    group.finish();
}

fn bench_glob_matching(c: &mut Criterion) {
    use stratovm_rbac::pattern;

    let mut group = c.benchmark_group("pattern_matches");

    for (name, pattern, candidate) in [
        ("literal", "vms/vnc", "vms/vnc"),
        ("star", "vms/*", "vms/vnc"),
        ("class", "vm[0-9][0-9]", "vm42"),
        ("miss_across_separator", "vms/*", "vms/vnc/sub"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(pattern::matches(black_box(pattern), black_box(candidate))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decision, bench_glob_matching);
criterion_main!(benches);
