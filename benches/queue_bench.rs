//! Queue Throughput Benchmarks
//!
//! Compares the arena-backed red-black queue against `std::collections::BinaryHeap`
//! on three workloads:
//!
//! - **fill_drain**: push n random priorities, then pop them all
//! - **hold**: keep n nodes live and run n push/pop pairs against them
//! - **peek**: repeated `peek` on a queue of n nodes
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench queue_bench
//!
//! # Only one workload
//! cargo bench --bench queue_bench -- 'hold/'
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rb_priority_queue::{ArenaQueue, TieBreak};
use std::collections::BinaryHeap;

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_priority(&mut self) -> u32 {
        (self.next() >> 33) as u32
    }
}

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

fn priorities(n: usize) -> Vec<u32> {
    let mut rng = Lcg::new(0x5eed);
    (0..n).map(|_| rng.next_priority()).collect()
}

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");

    for n in SIZES {
        let input = priorities(n);
        let label = format!("2^{}", n.trailing_zeros());

        for tie_break in [TieBreak::Lifo, TieBreak::Fifo] {
            let name = format!("rb_queue_{tie_break:?}").to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, &label), &input, |b, input| {
                b.iter(|| {
                    let mut queue = ArenaQueue::with_tie_break(tie_break);
                    for &p in input {
                        queue.push(p, ());
                    }
                    while let Some(top) = queue.pop() {
                        black_box(top);
                    }
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("binary_heap", &label), &input, |b, input| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(input.len());
                for &p in input {
                    heap.push(p);
                }
                while let Some(top) = heap.pop() {
                    black_box(top);
                }
            });
        });
    }

    group.finish();
}

fn bench_hold(c: &mut Criterion) {
    let mut group = c.benchmark_group("hold");

    for n in SIZES {
        let input = priorities(2 * n);
        let (initial, churn) = input.split_at(n);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_function(BenchmarkId::new("rb_queue", &label), |b| {
            let mut queue = ArenaQueue::default();
            for &p in initial {
                queue.push(p, ());
            }
            b.iter(|| {
                for &p in churn {
                    queue.push(p, ());
                    black_box(queue.pop());
                }
            });
        });

        group.bench_function(BenchmarkId::new("binary_heap", &label), |b| {
            let mut heap: BinaryHeap<u32> = initial.iter().copied().collect();
            b.iter(|| {
                for &p in churn {
                    heap.push(p);
                    black_box(heap.pop());
                }
            });
        });
    }

    group.finish();
}

fn bench_peek(c: &mut Criterion) {
    let mut group = c.benchmark_group("peek");

    for n in SIZES {
        let input = priorities(n);
        let label = format!("2^{}", n.trailing_zeros());

        let mut queue = ArenaQueue::default();
        for &p in &input {
            queue.push(p, ());
        }
        group.bench_function(BenchmarkId::new("rb_queue", &label), |b| {
            b.iter(|| black_box(queue.peek_max()));
        });

        let heap: BinaryHeap<u32> = input.iter().copied().collect();
        group.bench_function(BenchmarkId::new("binary_heap", &label), |b| {
            b.iter(|| black_box(heap.peek()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill_drain, bench_hold, bench_peek);
criterion_main!(benches);
