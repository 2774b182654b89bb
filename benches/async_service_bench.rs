//! Benchmark for the asynchronous Service edition.
//!
//! Each iteration builds the outcome `AsyncIO` and drives it on a tokio
//! runtime.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use statebind::effect::{Deferred, Service};
use std::hint::black_box;

type AsyncCounter = Service<u64, String, u64, Deferred>;

fn increment(value: u64) -> AsyncCounter {
    Service::modify_state(move |state: u64| state.wrapping_add(value)).then_read_state()
}

fn benchmark_async_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("async_service_bind_chain");
    let runtime = tokio::runtime::Runtime::new().unwrap();

    for length in [1, 10, 100] {
        let service: AsyncCounter = (0..length).fold(Service::pure(1), |service, _| service.bind(increment));
        group.bench_with_input(BenchmarkId::new("run", length), &service, |bencher, service| {
            bencher.iter(|| runtime.block_on(async { black_box(service.run(black_box(0)).await) }));
        });
    }

    group.finish();
}

fn benchmark_async_from_future(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("async_service_from_future");
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let fetch: AsyncCounter = Service::from_future(|| async { Ok(42) });
    let recovered: AsyncCounter = Service::from_future(|| async { Err("unavailable".to_string()) })
        .recover(|_| Service::pure(0));

    group.bench_function("success", |bencher| {
        bencher.iter(|| runtime.block_on(async { black_box(fetch.run(black_box(0)).await) }));
    });
    group.bench_function("recovered", |bencher| {
        bencher.iter(|| runtime.block_on(async { black_box(recovered.run(black_box(0)).await) }));
    });

    group.finish();
}

criterion_group!(benches, benchmark_async_bind_chain, benchmark_async_from_future);

criterion_main!(benches);
