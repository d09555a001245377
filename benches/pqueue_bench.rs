//! Criterion benchmarks for u-pqueue.
//!
//! Workloads draw priorities uniformly from a fixed number of levels so the
//! bucket count, not the element count, is the varied parameter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_pqueue::{Priority, PriorityQueue};

const ELEMENTS: usize = 10_000;

fn random_priorities(levels: i64, n: usize) -> Vec<Priority> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.random_range(0..levels)).collect()
}

fn filled_queue(priorities: &[Priority]) -> PriorityQueue<usize> {
    priorities.iter().copied().enumerate().collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_add_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_then_drain");
    group.sample_size(20);

    for &levels in &[1i64, 16, 1024] {
        let priorities = random_priorities(levels, ELEMENTS);
        group.bench_with_input(BenchmarkId::from_parameter(levels), &priorities, |b, p| {
            b.iter(|| {
                let mut queue = filled_queue(black_box(p));
                while let Some(value) = queue.pop() {
                    black_box(value);
                }
            })
        });
    }
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("for_each");
    group.sample_size(20);

    for &levels in &[1i64, 16, 1024] {
        let queue = filled_queue(&random_priorities(levels, ELEMENTS));
        group.bench_with_input(BenchmarkId::from_parameter(levels), &queue, |b, q| {
            b.iter(|| {
                let mut sum = 0usize;
                q.for_each(|&v| sum += v);
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_change_priority(c: &mut Criterion) {
    let mut group = c.benchmark_group("change_priority");
    group.sample_size(20);

    for &levels in &[1i64, 16, 1024] {
        let priorities = random_priorities(levels, 1_000);
        group.bench_with_input(BenchmarkId::from_parameter(levels), &priorities, |b, p| {
            b.iter_batched(
                || filled_queue(p),
                |mut queue| {
                    for id in (0..p.len()).step_by(7) {
                        queue.change_priority(&id, levels);
                    }
                    black_box(queue)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add_then_drain,
    bench_traverse,
    bench_change_priority
);
criterion_main!(benches);
