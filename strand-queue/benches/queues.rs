//! Enqueue/dequeue cycle comparison across the queue backings.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strand_queue::{CircularQueue, DequeQueue, LinkedQueue};

const BATCH: u64 = 1024;

fn bench_queues(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue_dequeue_cycle");
    group.throughput(Throughput::Elements(BATCH));

    group.bench_function(BenchmarkId::new("linked", BATCH), |b| {
        let mut queue: LinkedQueue<u64> = LinkedQueue::new();
        b.iter(|| {
            for i in 0..BATCH {
                queue.enqueue(i);
            }
            while queue.dequeue().is_ok() {}
        });
    });

    group.bench_function(BenchmarkId::new("deque", BATCH), |b| {
        let mut queue: DequeQueue<u64> = DequeQueue::with_capacity(BATCH as usize);
        b.iter(|| {
            for i in 0..BATCH {
                queue.enqueue(i);
            }
            while queue.dequeue().is_ok() {}
        });
    });

    group.bench_function(BenchmarkId::new("circular", BATCH), |b| {
        let mut queue: CircularQueue<u64> =
            CircularQueue::with_capacity(BATCH as usize).unwrap();
        b.iter(|| {
            for i in 0..BATCH {
                queue.enqueue(i);
            }
            while queue.dequeue().is_ok() {}
        });
    });

    group.finish();
}

criterion_group!(benches, bench_queues);
criterion_main!(benches);
