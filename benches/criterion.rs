// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const BOUNDS: &[i64] = &[10_000, 1_000_000, 100_000_000];
const LENGTHS: &[i64] = &[10_000, 100_000, 1_000_000];

fn sum_tco(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_tco");
    for bound in BOUNDS {
        group.throughput(Throughput::Elements(*bound as u64 + 1));
        group.bench_with_input(BenchmarkId::new("loop", bound), bound, listbench::sum_tco);
        group.bench_with_input(BenchmarkId::new("range", bound), bound, baseline::sum_range);
    }
    group.finish();
}

fn sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    for len in LENGTHS {
        group.throughput(Throughput::Elements(*len as u64 + 1));
        group.bench_with_input(BenchmarkId::new("list", len), len, listbench::sum_list);
        group.bench_with_input(
            BenchmarkId::new("list_left_fold", len),
            len,
            listbench::sum_list_left_fold,
        );
        group.bench_with_input(BenchmarkId::new("vec", len), len, baseline::sum_vec);
    }
    group.finish();
}

fn reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    for len in LENGTHS {
        group.throughput(Throughput::Elements(*len as u64 + 1));
        group.bench_with_input(BenchmarkId::new("list", len), len, listbench::reverse_list);
        group.bench_with_input(BenchmarkId::new("vec", len), len, baseline::reverse_vec);
    }
    group.finish();
}

/// Benchmarks of the workloads run by the `listbench` binary.
mod listbench {
    use criterion::{black_box, Bencher};
    use listbench::fixtures;
    use listbench::list::LinkedList;

    pub fn sum_tco(bencher: &mut Bencher, bound: &i64) {
        bencher.iter(|| fixtures::sum_tco(black_box(*bound)));
    }

    pub fn sum_list(bencher: &mut Bencher, len: &i64) {
        let list = LinkedList::generate(*len);
        bencher.iter(|| fixtures::sum_list(black_box(&list)));
    }

    pub fn sum_list_left_fold(bencher: &mut Bencher, len: &i64) {
        let list = LinkedList::generate(*len);
        bencher.iter(|| fixtures::sum_list_left_fold(black_box(&list)));
    }

    pub fn reverse_list(bencher: &mut Bencher, len: &i64) {
        let list = LinkedList::generate(*len);
        // Releasing the reversed copy isn't part of the measurement.
        bencher.iter_with_large_drop(|| fixtures::reverse_list(black_box(&list)));
    }
}

/// Baseline benchmarks on contiguous storage, for comparison with the linked
/// list.
mod baseline {
    use criterion::{black_box, Bencher};

    pub fn sum_range(bencher: &mut Bencher, bound: &i64) {
        bencher.iter(|| (0..=black_box(*bound)).sum::<i64>());
    }

    pub fn sum_vec(bencher: &mut Bencher, len: &i64) {
        let input = (0..=*len).collect::<Vec<i64>>();
        let input_slice = input.as_slice();
        bencher.iter(|| black_box(input_slice).iter().sum::<i64>());
    }

    pub fn reverse_vec(bencher: &mut Bencher, len: &i64) {
        let input = (0..=*len).collect::<Vec<i64>>();
        let input_slice = input.as_slice();
        bencher.iter_with_large_drop(|| {
            black_box(input_slice)
                .iter()
                .rev()
                .copied()
                .collect::<Vec<i64>>()
        });
    }
}

criterion_group!(benches, sum_tco, sum, reverse);
criterion_main!(benches);
