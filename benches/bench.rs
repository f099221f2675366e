use std::collections::LinkedList;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sort_kernel_rs::probe::par::{par, par_forward};
use sort_kernel_rs::probe::{Forward, PSorted};
use sort_kernel_rs::sort_n::{self, Dispatcher, StdUnstable};
use sort_kernel_rs::unstable::rust_heapsort;
use sort_test_tools::patterns;

fn bench_heapsort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapsort");

    for len in [100, 10_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("move_min", len), &len, |b, &len| {
            b.iter_batched(
                || patterns::random(len),
                |mut v| {
                    rust_heapsort::sort(black_box(&mut v));
                    v
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("std_unstable", len), &len, |b, &len| {
            b.iter_batched(
                || patterns::random(len),
                |mut v| {
                    v.sort_unstable();
                    v
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_sort_n_len<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("sort_n/{N}"));

    let input = || -> [i32; N] {
        let v = patterns::random(N);
        std::array::from_fn(|i| v[i])
    };

    for (name, table) in [
        ("hybrid", sort_n::hybrid()),
        ("sorting_networks", sort_n::sorting_networks()),
        ("low_comparisons", sort_n::low_comparisons()),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                input,
                |mut arr| {
                    Dispatcher::new(table, StdUnstable).sort_array(&mut arr, &mut |a, b| a < b);
                    arr
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("std_unstable", |b| {
        b.iter_batched(
            input,
            |mut arr| {
                arr.sort_unstable();
                arr
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_sort_n(c: &mut Criterion) {
    bench_sort_n_len::<4>(c);
    bench_sort_n_len::<8>(c);
    bench_sort_n_len::<16>(c);
    bench_sort_n_len::<26>(c);
}

fn bench_par(c: &mut Criterion) {
    let mut group = c.benchmark_group("par");

    for len in [1_000, 100_000] {
        let v = patterns::locally_shuffled(len, 16);
        let list = v.iter().copied().collect::<LinkedList<_>>();

        group.bench_with_input(BenchmarkId::new("direct_slice", len), &v, |b, v| {
            b.iter(|| par(black_box(&v[..])))
        });

        group.bench_with_input(BenchmarkId::new("direct_list", len), &list, |b, list| {
            b.iter(|| par(black_box(list)))
        });

        group.bench_with_input(BenchmarkId::new("forward", len), &v, |b, v| {
            b.iter(|| {
                par_forward(
                    Forward(black_box(v).iter()),
                    &mut |a: &i32, b: &i32| a < b,
                    &mut PSorted,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_heapsort, bench_sort_n, bench_par);
criterion_main!(benches);
