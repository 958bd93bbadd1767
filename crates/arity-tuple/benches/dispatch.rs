// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use arity_tuple::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sum_named(values: &[Tuple4<i64>]) -> i64 {
    values
        .iter()
        .map(|v| v.first() + v.second() + v.third() + v.fourth())
        .sum()
}

fn sum_indexed(values: &[Tuple4<i64>]) -> i64 {
    values
        .iter()
        .map(|v| (0..4).filter_map(|i| v.get_by_index(i).ok()).sum::<i64>())
        .sum()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_dispatch");
    for len in [64_usize, 4096] {
        let values: Vec<Tuple4<i64>> = (0..len as i64)
            .map(|i| Tuple4::new([i, i + 1, i + 2, i + 3]))
            .collect();

        group.bench_with_input(BenchmarkId::new("named", len), &values, |b, values| {
            b.iter(|| sum_named(black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("indexed", len), &values, |b, values| {
            b.iter(|| sum_indexed(black_box(values)))
        });
    }
    group.finish();
}

fn bench_tolerance(c: &mut Criterion) {
    let values: Vec<Tuple3<f64>> = (0..1024)
        .map(|i| Tuple3::new([f64::from(i) * 1e-9, 0.0, -1e-9]))
        .collect();

    c.bench_function("is_zero_within", |b| {
        b.iter(|| {
            black_box(&values)
                .iter()
                .filter(|v| v.is_zero_within(1e-6).unwrap_or(false))
                .count()
        })
    });
}

criterion_group!(benches, bench_dispatch, bench_tolerance);
criterion_main!(benches);
