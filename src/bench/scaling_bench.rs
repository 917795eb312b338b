//! Criterion benchmarks comparing the three strategies.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use matscale::blocked::tiled::matmul_blocked;
use matscale::matmul_sequential;
use matscale::matrix::init::fill_random;
use matscale::threaded::row_parallel::matmul_row_parallel;

fn bench_strategies(c: &mut Criterion) {
    let n = 256;
    let neib = 32;

    let mut a = vec![0.0; n * n];
    let mut b = vec![0.0; n * n];
    fill_random(&mut a);
    fill_random(&mut b);

    let mut group = c.benchmark_group("matmul_256");
    group.sample_size(10);

    group.bench_function("sequential", |bench| {
        bench.iter(|| {
            let mut out = vec![0.0; n * n];
            matmul_sequential(&a, &b, &mut out, n);
            out
        })
    });

    for threads in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("standard", threads), &threads, |bench, &t| {
            bench.iter(|| {
                let mut out = vec![0.0; n * n];
                matmul_row_parallel(&a, &b, &mut out, n, t);
                out
            })
        });

        group.bench_with_input(BenchmarkId::new("blocked", threads), &threads, |bench, &t| {
            bench.iter(|| {
                let mut out = vec![0.0; n * n];
                matmul_blocked(&a, &b, &mut out, n, neib, t).unwrap();
                out
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
