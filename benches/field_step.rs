//! Benchmarks for the CPU-side field step.
//!
//! The connection pass is O(N²) over the pool, which the area formula keeps
//! in the low hundreds for realistic window sizes. This tracks how the step
//! scales if someone feeds it a much larger surface.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use smolfield::{FieldConfig, ParticleField};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_step");

    // Surface sizes chosen so floor(area / 15000) lands on round pool sizes.
    for (width, height, count) in [
        (1500.0, 1000.0, 100usize),
        (2500.0, 1500.0, 250),
        (3000.0, 2500.0, 500),
    ] {
        let mut field = ParticleField::new(width, height, FieldConfig::default());
        assert_eq!(field.particles().len(), count);
        field.set_pointer(Vec2::new(width / 2.0, height / 2.0));

        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                field.step();
                black_box(field.connections().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
