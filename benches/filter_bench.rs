//! Benchmarks for hashfilter.
//!
//! Run with:
//!     cargo bench

use bytes::Bytes;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use hashfilter::{Algorithm, FilterConfig, FilterResult, HashFilter, append_filter};

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    let size = 1024 * 1024; // 1 MB
    let data = Bytes::from((0..size).map(|i| (i * 7 + 13) as u8).collect::<Vec<u8>>());

    group.throughput(Throughput::Bytes(size as u64));
    for &algo in Algorithm::supported() {
        let config = FilterConfig::new(algo.name());
        group.bench_function(algo.name(), |b| {
            b.iter(|| {
                let mut filter = HashFilter::create(&config, FilterResult::new()).unwrap();
                for chunk in data.chunks(64 * 1024) {
                    black_box(filter.process(data.slice_ref(chunk)).unwrap());
                }
                black_box(filter.close().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_sizes");
    let size = 1024 * 1024; // 1 MB
    let data = Bytes::from((0..size).map(|i| (i * 7 + 13) as u8).collect::<Vec<u8>>());
    let config = FilterConfig::new("sha256");

    group.throughput(Throughput::Bytes(size as u64));
    for chunk_size in [64, 4 * 1024, 64 * 1024] {
        group.bench_function(format!("sha256_{}b", chunk_size), |b| {
            b.iter(|| {
                let mut filter = HashFilter::create(&config, FilterResult::new()).unwrap();
                for chunk in data.chunks(chunk_size) {
                    black_box(filter.process(data.slice_ref(chunk)).unwrap());
                }
                black_box(filter.close().unwrap())
            });
        });
    }

    // One-shot baseline
    group.bench_function("sha256_oneshot", |b| {
        b.iter(|| black_box(Algorithm::Sha256.digest(black_box(&data))));
    });

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    use std::io::Write;

    let mut group = c.benchmark_group("streaming");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("write_side", |b| {
        b.iter(|| {
            let sink = Vec::with_capacity(size);
            let (mut stream, _) = append_filter(sink, &FilterConfig::new("sha256")).unwrap();
            for chunk in data.chunks(8 * 1024) {
                stream.write_all(black_box(chunk)).unwrap();
            }
            black_box(stream.finish().unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_chunk_sizes, bench_streaming);
criterion_main!(benches);
