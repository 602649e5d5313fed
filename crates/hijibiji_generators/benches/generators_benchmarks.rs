//! Criterion benchmarks for hijibiji_generators.
//!
//! Benchmarks cover:
//! - Image generation at growing resolutions
//! - Tone synthesis at the default settings
//! - Sequential versus rayon-parallel random walks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hijibiji_core::rng::DemoRng;
use hijibiji_generators::image::generate_image;
use hijibiji_generators::points::{generate_dots, DEFAULT_SIZE_RANGE};
use hijibiji_generators::tone::{generate_tones, ToneParams};
use hijibiji_generators::walk::{simulate, simulate_parallel, WalkDimension};

fn bench_image_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_generation");

    for side in [16_i64, 128, 512] {
        group.bench_with_input(BenchmarkId::new("square", side), &side, |b, &side| {
            let mut rng = DemoRng::from_seed(42);
            b.iter(|| black_box(generate_image(&mut rng, &[side, side])))
        });
    }

    group.finish();
}

fn bench_tone_synthesis(c: &mut Criterion) {
    let params = ToneParams::default();
    c.bench_function("tones_default", |b| {
        let mut rng = DemoRng::from_seed(42);
        b.iter(|| black_box(generate_tones(&mut rng, &params)))
    });
}

fn bench_dot_cloud(c: &mut Criterion) {
    c.bench_function("dots_10k", |b| {
        let mut rng = DemoRng::from_seed(42);
        b.iter(|| {
            black_box(generate_dots(
                &mut rng,
                10_000,
                &[0.0, 1.0],
                &[0.0, 1.0],
                &DEFAULT_SIZE_RANGE,
            ))
        })
    });
}

/// Sequential vs parallel walks across walker counts.
fn bench_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_walks");
    group.sample_size(30);
    let num_steps = 1_000;

    for num_walkers in [10_i64, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("sequential_3d", num_walkers),
            &num_walkers,
            |b, &n| {
                let mut rng = DemoRng::from_seed(42);
                b.iter(|| black_box(simulate(&mut rng, n, num_steps, WalkDimension::Three)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel_3d", num_walkers),
            &num_walkers,
            |b, &n| b.iter(|| black_box(simulate_parallel(42, n, num_steps, WalkDimension::Three))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_image_generation,
    bench_tone_synthesis,
    bench_dot_cloud,
    bench_walks
);
criterion_main!(benches);
