use core::hash::BuildHasher;
use core::ptr::NonNull;
use std::collections::VecDeque;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dhlist::hash::bkdr;
use dhlist::linked_list::intrusive::{node::RingNode, ring::RingLink};
use hashbrown::DefaultHashBuilder;
use rand::Rng;
use rand::distr::Alphanumeric;

const SAMPLE_SIZE: usize = 10_000;

// --- Benchmark for the intrusive ring against VecDeque ---

fn ring_push_pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_push_pop");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("intrusive_ring", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || {
                (0..SAMPLE_SIZE)
                    .map(|_| RingNode::<u64>::default())
                    .collect::<Vec<_>>()
            },
            |mut nodes| {
                let mut anchor = RingLink::new();
                anchor.init();
                let head = NonNull::from(&mut anchor);
                unsafe {
                    for node in nodes.iter_mut() {
                        RingLink::insert_before(NonNull::from(node.link_mut()), head);
                    }
                    while !anchor.is_empty() {
                        let first = anchor.next().unwrap();
                        RingLink::remove(first);
                    }
                }
                black_box(nodes);
            },
        );
    });

    group.bench_function(BenchmarkId::new("vec_deque", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || VecDeque::<u64>::with_capacity(SAMPLE_SIZE),
            |mut deque| {
                for i in 0..SAMPLE_SIZE as u64 {
                    deque.push_back(i);
                }
                while let Some(value) = deque.pop_front() {
                    black_box(value);
                }
            },
        );
    });

    group.finish();
}

// --- Benchmark for BKDR bucket indexing against the default hasher ---

fn string_hash_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_hash");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    let mut rng = rand::rng();
    let keys: Vec<String> = (0..SAMPLE_SIZE)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(16)
                .map(char::from)
                .collect()
        })
        .collect();

    group.bench_function(BenchmarkId::new("bkdr", SAMPLE_SIZE), |b| {
        b.iter(|| {
            for key in &keys {
                black_box(bkdr::bucket(key, 1023));
            }
        });
    });

    let hasher_builder = DefaultHashBuilder::default();
    group.bench_function(BenchmarkId::new("default_hasher", SAMPLE_SIZE), |b| {
        b.iter(|| {
            for key in &keys {
                black_box(hasher_builder.hash_one(key) & 1023);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, ring_push_pop_benchmark, string_hash_benchmark);
criterion_main!(benches);
