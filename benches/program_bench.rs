use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use basics::program;
use basics::values::{self, ARRAY, NUMBER};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("derive", |b| b.iter(|| values::derive(black_box(NUMBER), black_box(ARRAY)).unwrap()));
    c.bench_function("run to sink", |b| {
        b.iter(|| program::run(black_box(&mut std::io::sink())).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
