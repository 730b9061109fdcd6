use antforge::colony::{extract_tour, roulette_wheel, Candidate, Colony, PheromoneMatrix, Silent};
use antforge::config::{ColonyParams, Execution};
use antforge::dataset::Dataset;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn setup_dataset(n: usize) -> Arc<Dataset> {
    let mut rng = fastrand::Rng::with_seed(1234);
    Arc::new(Dataset::random(n, 1000, 1000, &mut rng).expect("Failed to build dataset"))
}

fn colony_params(execution: Execution, cities: usize) -> ColonyParams {
    ColonyParams {
        ants: 8,
        ant_memory: cities,
        roulette_size: 3,
        iterations: 5,
        execution,
        ..ColonyParams::default()
    }
}

fn bench_colony(c: &mut Criterion) {
    let ds = setup_dataset(64);

    let seq = Colony::new(ds.clone(), colony_params(Execution::Sequential, 64)).unwrap();
    c.bench_function("colony_sequential_64", |b| {
        b.iter(|| seq.run(black_box(Some(7)), &Silent).unwrap())
    });

    let par = Colony::new(ds, colony_params(Execution::Parallel, 64)).unwrap();
    c.bench_function("colony_parallel_64", |b| {
        b.iter(|| par.run(black_box(Some(7)), &Silent).unwrap())
    });
}

fn bench_kernels(c: &mut Criterion) {
    let pool: Vec<Candidate> = (0..256)
        .map(|i| Candidate::new(i, 1.0 + (i % 17) as f64))
        .collect();
    c.bench_function("roulette_256", |b| {
        b.iter(|| {
            let mut scratch = pool.clone();
            roulette_wheel(&mut scratch, black_box(0.42), 8).unwrap()
        })
    });

    let mut matrix = PheromoneMatrix::new(256);
    c.bench_function("evaporate_256", |b| {
        b.iter(|| matrix.evaporate_all(black_box(0.1)))
    });

    let mut matrix = PheromoneMatrix::new(256);
    c.bench_function("par_evaporate_256", |b| {
        b.iter(|| matrix.par_evaporate_all(black_box(0.1), 4096))
    });

    let matrix = PheromoneMatrix::new(128);
    c.bench_function("extract_128", |b| {
        b.iter(|| extract_tour(black_box(&matrix)).unwrap())
    });
}

criterion_group!(benches, bench_colony, bench_kernels);
criterion_main!(benches);
