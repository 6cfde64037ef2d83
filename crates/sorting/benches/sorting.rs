use std::hint::black_box;
use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BatchSize, BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use listgen::IntListBuilder;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sorting::{Comparator, SortAlgorithm, all_kinds, kind_name};

const BENCH_SIZES: [usize; 3] = [256, 1024, 4096];
const BENCH_SAMPLE_SIZE: usize = 15;
const BENCH_WARMUP_MS: u64 = 100;
const BENCH_MEASURE_MS: u64 = 300;
const RNG_SEED: u64 = 0x5047_2026;

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    Sorted,
    Reversed,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
        }
    }
}

const DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::Sorted,
    Distribution::Reversed,
];

fn generate_dataset(dist: Distribution, size: usize, seed: u64) -> Vec<i64> {
    let builder = IntListBuilder::with_len(size);
    match dist {
        Distribution::RandomUniform => {
            let mut rng = StdRng::seed_from_u64(seed);
            builder.random_with(&mut rng).build()
        }
        Distribution::Sorted => builder.sorted().build(),
        Distribution::Reversed => {
            let mut data = builder.sorted().build();
            data.reverse();
            data
        }
    }
}

fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(BENCH_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(BENCH_WARMUP_MS));
    group.measurement_time(Duration::from_millis(BENCH_MEASURE_MS));
}

fn bench_sorting(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sorting/{}", dist.label()));
        apply_runtime(&mut group);

        for &kind in all_kinds() {
            for &size in &BENCH_SIZES {
                let base = generate_dataset(dist, size, RNG_SEED ^ size as u64);

                group.bench_function(BenchmarkId::new(kind_name(kind), size), |bencher| {
                    bencher.iter_batched(
                        || base.clone(),
                        |mut data| {
                            let mut algo = SortAlgorithm::new(kind);
                            algo.sort(&mut data, &Comparator::Natural);
                            black_box(data)
                        },
                        BatchSize::LargeInput,
                    );
                });
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_sorting);
criterion_main!(benches);
