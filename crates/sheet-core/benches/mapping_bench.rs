use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sheet_core::mapping::map_to_sheet;
use sheet_core::points::{sanitize, RawPoint};
use sheet_core::range::Ranges;
use sheet_core::types::{SheetSize, SqueezeMargins};

fn gen_rows(n: usize) -> Vec<RawPoint> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        // simple waveform with drift
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        v.push(RawPoint::new(format!("{x}"), format!("{y}")));
    }
    v
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for &n in &[50_000usize, 100_000usize] {
        let rows = gen_rows(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &rows, |b, rows| {
            b.iter(|| {
                let points = sanitize(rows);
                let ranges = Ranges::from_points(&points);
                let mapping = map_to_sheet(
                    &points,
                    &ranges,
                    SheetSize::default(),
                    SqueezeMargins::default(),
                );
                black_box(mapping.points.len())
            });
        });
    }
    group.finish();
}

fn bench_map_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_to_sheet");
    for &n in &[50_000usize, 100_000usize] {
        let points = sanitize(&gen_rows(n));
        let ranges = Ranges::from_points(&points);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let mapping = map_to_sheet(
                    points,
                    &ranges,
                    SheetSize::default(),
                    SqueezeMargins::default(),
                );
                black_box(mapping.points.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_map_only);
criterion_main!(benches);
