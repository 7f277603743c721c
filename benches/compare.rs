use criterion::async_executor::FuturesExecutor;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fan_in::prelude::*;

mod utils;

fn vec_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare vec::all");
    for i in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("fan-in", i), i, |b, i| {
            b.to_async(FuturesExecutor).iter(|| async {
                let futs = utils::futures_vec(*i);
                let output = futs.all().await.unwrap();
                assert_eq!(output.len(), *i);
            })
        });
        group.bench_with_input(BenchmarkId::new("futures-rs", i), i, |b, i| {
            b.to_async(FuturesExecutor).iter(|| async {
                let futs = utils::futures_vec(*i);
                let output = futures::future::try_join_all(futs).await.unwrap();
                assert_eq!(output.len(), *i);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, vec_all);
criterion_main!(benches);
