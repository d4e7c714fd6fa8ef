use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sheet_core::format::{common_exponent, decompose, format_scientific};

fn gen_values(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (i as f64 - n as f64 / 2.0) * 123.456 + 0.0075)
        .collect()
}

fn bench_format(c: &mut Criterion) {
    let values = gen_values(1_000);

    c.bench_function("decompose_sweep", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(decompose(v));
            }
        })
    });

    c.bench_function("format_sweep", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(format_scientific(v));
            }
        })
    });

    c.bench_function("common_exponent_sweep", |b| {
        b.iter(|| {
            for pair in values.windows(2) {
                black_box(common_exponent(pair[0], pair[1]));
            }
        })
    });
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
