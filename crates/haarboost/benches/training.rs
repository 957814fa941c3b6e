//! Feature-cache construction and boosting throughput.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use haarboost::features::{FeatureBank, FeatureCache};
use haarboost::model::{AdaBoostModel, BoostConfig};
use haarboost::testing::synthetic_set;
use haarboost::training::{AdaBoostParams, AdaBoostTrainer, StumpWeighting};
use haarboost::Parallelism;

fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(10)
}

fn bench_cache_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/cache/build");
    let bank = FeatureBank::standard();

    for (side, n_per_class) in [(24usize, 250usize), (64, 250), (64, 1000)] {
        let set = synthetic_set(side, side, n_per_class, 42).unwrap();
        group.throughput(Throughput::Elements(set.n_samples() as u64));

        for (name, parallelism) in [("sequential", Parallelism::Sequential), ("parallel", Parallelism::Parallel)] {
            group.bench_with_input(
                BenchmarkId::new(name, format!("{side}x{side}/n={}", set.n_samples())),
                &set,
                |b, set| b.iter(|| black_box(FeatureCache::build(black_box(set), &bank, parallelism).unwrap())),
            );
        }
    }

    group.finish();
}

fn bench_boosting_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/train/rounds");
    let set = synthetic_set(24, 24, 1000, 7).unwrap();
    let cache = FeatureCache::build(&set, &FeatureBank::standard(), Parallelism::Parallel).unwrap();

    for weighting in [StumpWeighting::Unweighted, StumpWeighting::Distribution] {
        let trainer = AdaBoostTrainer::new(AdaBoostParams {
            n_rounds: 10,
            stump_weighting: weighting,
            ..Default::default()
        });
        group.bench_function(BenchmarkId::new("rounds=10", format!("{weighting:?}")), |b| {
            b.iter(|| black_box(trainer.train(&cache, set.labels(), Parallelism::Parallel).unwrap()))
        });
    }

    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("e2e/train");
    let set = synthetic_set(32, 32, 500, 3).unwrap();

    for n_threads in [1usize, 4] {
        group.bench_with_input(BenchmarkId::new("n_threads", n_threads), &n_threads, |b, &n| {
            b.iter(|| {
                let config = BoostConfig::builder().n_rounds(5).build().unwrap();
                black_box(AdaBoostModel::train(&set, config, n).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = default_criterion();
    targets = bench_cache_build, bench_boosting_rounds, bench_end_to_end
}
criterion_main!(benches);
