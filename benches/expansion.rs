//! Expansion overhead benchmarks
//!
//! Compares expanded calls against the equivalent hand-written loops.
//! Run with `--features trace-invocations` to measure the cost of the
//! per-invocation event.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dimcall::{Dim, index_seq, invoke_expanded};

fn add(x: u64, y: u64) -> u64 {
    x.wrapping_add(y)
}

fn bench_direct_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_call");

    group.bench_function("plain", |b| {
        b.iter(|| add(black_box(40), black_box(2)));
    });

    group.bench_function("scalars_only", |b| {
        b.iter(|| invoke_expanded!(add, black_box(40u64), black_box(2u64)));
    });

    group.finish();
}

fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion");
    let xs: Vec<u64> = (0..64).collect();
    let ys: Vec<u64> = (0..64).collect();
    let sum_refs = |x: &u64, y: &u64| add(*x, *y);

    group.bench_function("nested_loops_64x64", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(xs.len() * ys.len());
            for &x in &xs {
                for &y in &ys {
                    out.push(add(x, y));
                }
            }
            black_box(out)
        });
    });

    group.bench_function("expanded_64x64", |b| {
        b.iter(|| black_box(invoke_expanded!(sum_refs, Dim(&xs[..]), Dim(&ys[..]))).len());
    });

    group.bench_function("expanded_unit_16x16x16", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            invoke_expanded!(
                |i: usize, j: usize, k: usize| acc = acc.wrapping_add(i ^ j ^ k),
                index_seq::<16>(),
                index_seq::<16>(),
                index_seq::<16>(),
            );
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_direct_call, bench_expansion);
criterion_main!(benches);
