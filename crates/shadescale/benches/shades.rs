use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shadescale::{
    derive_shade_scale, Color, ContrastGrid, ContrastSettings, GeneratorSettings, ShadeScale,
    Strategy,
};

pub fn run_benchmarks(c: &mut Criterion) {
    let base = Color::new(0x9b, 0x40, 0xea);

    let mut group = c.benchmark_group("shade-scale");
    group.bench_function("tailwind", |b| {
        b.iter(|| derive_shade_scale(black_box(base), Strategy::Tailwind, false))
    });
    group.bench_function("linear", |b| {
        b.iter(|| derive_shade_scale(black_box(base), Strategy::Linear, false))
    });
    group.finish();

    let scale = ShadeScale::derive(base, &GeneratorSettings::default());
    let settings = ContrastSettings::default();

    let mut group = c.benchmark_group("contrast-grid");
    group.bench_function("13x12", |b| {
        b.iter(|| ContrastGrid::new(black_box(&scale), &settings))
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
