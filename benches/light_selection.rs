use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use light_culler::{
    create_scattered_rig, DistanceMetric, LightId, NearbyLights, MAX_SELECTED_LIGHTS,
};

/// Benchmark: insertion into an already-full selection list (steady state)
fn bench_insert_full_list(c: &mut Criterion) {
    let mut selection = NearbyLights::new();
    for i in 0..MAX_SELECTED_LIGHTS {
        selection.insert(LightId::new(i), i as f32);
    }

    c.bench_function("insert_into_full_list", |b| {
        let mut i = MAX_SELECTED_LIGHTS;
        b.iter(|| {
            i += 1;
            // alternate between a winning and a losing candidate
            let dist = if i % 2 == 0 { 0.5 } else { 1_000.0 };
            black_box(selection.insert(black_box(LightId::new(i)), black_box(dist)))
        })
    });
}

/// Benchmark: full selection pass at various scene light counts
fn bench_selection_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_nearby");

    for num_lights in [32, 128, 512, 2048] {
        let bank = create_scattered_rig(num_lights, 300.0);
        let mut selection = NearbyLights::new();

        group.bench_with_input(
            BenchmarkId::new("falloff_adjusted", num_lights),
            &num_lights,
            |b, _| {
                b.iter(|| {
                    bank.select_nearby(
                        black_box(Vec3::new(10.0, 1.0, -20.0)),
                        DistanceMetric::FalloffAdjusted,
                        &mut selection,
                    );
                    black_box(selection.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("euclidean", num_lights),
            &num_lights,
            |b, _| {
                b.iter(|| {
                    bank.select_nearby(
                        black_box(Vec3::new(10.0, 1.0, -20.0)),
                        DistanceMetric::Euclidean,
                        &mut selection,
                    );
                    black_box(selection.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_insert_full_list, bench_selection_pass);
criterion_main!(benches);
