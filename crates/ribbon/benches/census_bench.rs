//! Criterion benches for the census hot paths.
//!
//! - census: full enumeration, sequential vs. per-branch parallel.
//! - leaf: connectivity and face counting on random matchings.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use ribbon::prelude::*;

fn random_matching(arrow_count: usize, rng: &mut StdRng) -> Permutation {
    let mut arrows: Vec<usize> = (0..arrow_count).collect();
    arrows.shuffle(rng);
    let mut images = vec![0; arrow_count];
    for pair in arrows.chunks(2) {
        images[pair[0]] = pair[1];
        images[pair[1]] = pair[0];
    }
    Permutation::from_images(images).unwrap()
}

fn bench_census(c: &mut Criterion) {
    let mut group = c.benchmark_group("census");
    group.sample_size(10);
    for &(v, d) in &[(1usize, 10usize), (3, 4), (4, 3), (2, 6)] {
        let census = Census::new(RibbonCfg::new(v, d)).unwrap();
        let label = format!("{v}x{d}");
        group.bench_with_input(BenchmarkId::new("sequential", &label), &census, |b, cs| {
            b.iter(|| cs.run(SearchCfg::default()).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", &label), &census, |b, cs| {
            let scfg = SearchCfg {
                execution: Execution::Parallel,
                deadline: None,
            };
            b.iter(|| cs.run(scfg).unwrap())
        });
    }
    group.finish();
}

fn bench_leaf(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf");
    for &(v, d) in &[(5usize, 4usize), (10, 4), (20, 4)] {
        let n = v * d;
        let vertex = vertex_permutation(v, d).unwrap();
        let mut rng = StdRng::seed_from_u64(43);
        let label = format!("{v}x{d}");
        group.bench_function(BenchmarkId::new("face_count", &label), |b| {
            let mut counter = FaceCounter::new(n);
            b.iter_batched(
                || random_matching(n, &mut rng),
                |edge| counter.count(&vertex, &edge),
                BatchSize::SmallInput,
            )
        });
        let mut rng = StdRng::seed_from_u64(44);
        group.bench_function(BenchmarkId::new("is_connected", &label), |b| {
            let mut checker = ConnectivityChecker::new(v, d);
            b.iter_batched(
                || random_matching(n, &mut rng),
                |edge| checker.is_connected(&edge),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_census, bench_leaf);
criterion_main!(benches);
