use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use erasedvec::{ErasedVec, TypedVec};

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("u64_elements", size), size, |b, &size| {
            b.iter(|| {
                let mut v = ErasedVec::new(8).unwrap();

                for i in 0..size as u64 {
                    black_box(v.push_back(&i.to_ne_bytes()).unwrap());
                }

                black_box(v.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("at_operations", size), size, |b, &size| {
            let mut v = ErasedVec::new(8).unwrap();

            // Pre-populate the vector
            for i in 0..size as u64 {
                v.push_back(&i.to_ne_bytes()).unwrap();
            }

            b.iter(|| {
                for i in 0..size {
                    black_box(v.at(i));
                }
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("full_iteration", size), size, |b, &size| {
            let v: TypedVec<u32> = (0..size as u32).collect();

            b.iter(|| {
                for value in black_box(&v) {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

fn bench_front_insert_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("shifting");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("insert_erase_front", size),
            size,
            |b, &size| {
                let mut v: TypedVec<u32> = (0..size as u32).collect();

                b.iter(|| {
                    v.insert(black_box(7), 0).unwrap();
                    v.erase_index(0).unwrap();
                });
            },
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("find_and_count", size), size, |b, &size| {
            let v: TypedVec<u32> = (0..size as u32).map(|i| i % 10).collect();

            b.iter(|| {
                black_box(v.find(black_box(9)));
                black_box(v.count(black_box(3)));
            });
        });
    }
    group.finish();
}

fn bench_remove_if(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_if");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("drop_evens", size), size, |b, &size| {
            b.iter(|| {
                let mut v: TypedVec<u32> = (0..size as u32).collect();
                let len = v.len();
                black_box(v.remove_if(0, len, 0, |x, _| x % 2 == 0).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_large_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_elements");

    for element_size in [1024, 4096].iter() {
        group.throughput(Throughput::Bytes(*element_size as u64 * 10));
        group.bench_with_input(
            BenchmarkId::new("push_large", element_size),
            element_size,
            |b, &element_size| {
                let large_data = vec![b'x'; element_size];

                b.iter(|| {
                    let mut v = ErasedVec::new(element_size).unwrap();

                    for _ in 0..10 {
                        black_box(v.push_back(&large_data).unwrap());
                    }

                    black_box(v.len())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_iterator_performance,
    bench_front_insert_erase,
    bench_search,
    bench_remove_if,
    bench_large_elements
);
criterion_main!(benches);
