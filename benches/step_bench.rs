//! Benchmarks for the CPU-side field step and formation generation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use antigravity::{motion, Formation, MotionConfig, ParticleField, Population, Vec2, VisualConfig};

fn bench_field_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_step");

    for count in [250u32, 600] {
        let population = Population {
            wide: count,
            narrow: count,
            threshold: 768.0,
        };

        group.bench_with_input(
            BenchmarkId::new("wander", count),
            &population,
            |b, &population| {
                let mut field = ParticleField::new(
                    1000.0,
                    800.0,
                    population,
                    VisualConfig::default(),
                    MotionConfig::default(),
                    Some(1),
                );
                let cursor = Some(Vec2::new(500.0, 400.0));
                b.iter(|| {
                    field.step(Formation::Random, cursor);
                    black_box(field.particles().len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("seek", count),
            &population,
            |b, &population| {
                let mut field = ParticleField::new(
                    1000.0,
                    800.0,
                    population,
                    VisualConfig::default(),
                    MotionConfig::default(),
                    Some(1),
                );
                field.apply_formation(Formation::Circle);
                b.iter(|| {
                    field.step(Formation::Circle, None);
                    black_box(field.particles().len())
                })
            },
        );
    }

    group.finish();
}

fn bench_formation_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("formation_targets");

    group.bench_function("circle", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| black_box(Formation::Circle.targets(600, 1000.0, 800.0, &mut rng)))
    });

    group.bench_function("brackets", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| black_box(Formation::Brackets.targets(600, 1000.0, 800.0, &mut rng)))
    });

    group.bench_function("random", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| black_box(Formation::Random.targets(600, 1000.0, 800.0, &mut rng)))
    });

    group.finish();
}

fn bench_cursor_repulsion(c: &mut Criterion) {
    let config = MotionConfig::default();
    let cursor = Some(Vec2::new(500.0, 400.0));

    c.bench_function("cursor_repulsion", |b| {
        b.iter(|| {
            black_box(motion::cursor_repulsion(
                Vec2::new(450.0, 380.0),
                cursor,
                &config,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_field_step,
    bench_formation_targets,
    bench_cursor_repulsion,
);
criterion_main!(benches);
