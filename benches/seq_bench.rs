use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use viewkit::{Config, GrowthPolicy, Seq};

fn bench_push_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("seq_push");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let size = *size;

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Seq::push", size), &size, |b, &size| {
            b.iter(|| {
                let mut seq = Seq::new();
                for i in 0..size {
                    seq.push(black_box(i as u64)).unwrap();
                }
                seq
            });
        });

        group.bench_with_input(
            BenchmarkId::new("Seq::push_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut seq = Seq::make(0, size).unwrap();
                    for i in 0..size {
                        seq.push(black_box(i as u64)).unwrap();
                    }
                    seq
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("std::Vec::push", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                vec
            });
        });
    }

    group.finish();
}

fn bench_growth_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("seq_growth_policy");
    let size = 50_000usize;
    group.throughput(Throughput::Elements(size as u64));

    let policies = [
        ("memory", GrowthPolicy::memory_preset()),
        ("balanced", GrowthPolicy::balanced_preset()),
        ("performance", GrowthPolicy::performance_preset()),
    ];

    for (name, policy) in policies.iter() {
        group.bench_with_input(BenchmarkId::new("append_chunks", name), policy, |b, policy| {
            let chunk: Vec<u32> = (0..64).collect();
            b.iter(|| {
                let mut seq = Seq::make_with_policy(0, 0, *policy).unwrap();
                while seq.len() < size {
                    seq.extend_from_slice(black_box(&chunk)).unwrap();
                }
                seq
            });
        });
    }

    group.finish();
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("seq_views");
    let base: Seq<u64> = (0..10_000).collect();

    group.bench_function("view_and_get", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for lo in (0..9_000).step_by(100) {
                let view = base.view(lo, lo + 1_000).unwrap();
                sum += view.get(black_box(500)).unwrap();
            }
            sum
        });
    });

    group.bench_function("copy_into", |b| {
        let dst = Seq::<u64>::make(10_000, 10_000).unwrap();
        b.iter(|| viewkit::copy_into(black_box(&dst), black_box(&base)));
    });

    group.finish();
}

criterion_group!(benches, bench_push_operations, bench_growth_policies, bench_views);
criterion_main!(benches);
