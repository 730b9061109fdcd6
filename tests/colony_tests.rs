use antforge::baseline::{self, Algorithm};
use antforge::colony::{Colony, IterationReport, PheromoneMatrix, ProgressCallback, Silent};
use antforge::config::{ColonyParams, Execution};
use antforge::dataset::{City, Dataset};
use antforge::error::AcsError;
use rstest::rstest;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use strum::IntoEnumIterator;

struct Counter(AtomicUsize);

impl ProgressCallback for Counter {
    fn on_iteration(&self, _report: &IterationReport) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

struct Recorder(Mutex<Vec<IterationReport>>);

impl ProgressCallback for Recorder {
    fn on_iteration(&self, report: &IterationReport) {
        self.0.lock().unwrap().push(*report);
    }
}

fn fixed() -> Arc<Dataset> {
    Arc::new(Dataset::fixed())
}

fn params(execution: Execution) -> ColonyParams {
    ColonyParams {
        ants: 6,
        ant_memory: 10,
        iterations: 20,
        execution,
        ..ColonyParams::default()
    }
}

#[test]
fn test_sequential_runs_are_reproducible() {
    let colony = Colony::new(fixed(), params(Execution::Sequential)).unwrap();

    let a = colony.run(Some(42), &Silent).unwrap();
    let b = colony.run(Some(42), &Silent).unwrap();

    assert_eq!(a.tour, b.tour);
    assert_eq!(a.pheromone.to_rows(), b.pheromone.to_rows());
    assert_eq!(a.cost, b.cost);
}

#[test]
fn test_parallel_run_produces_valid_tour() {
    let ds = fixed();
    let colony = Colony::new(ds.clone(), params(Execution::Parallel)).unwrap();
    let counter = Counter(AtomicUsize::new(0));

    let outcome = colony.run(Some(7), &counter).unwrap();

    assert_eq!(counter.0.load(Ordering::Relaxed), 20);
    assert_eq!(outcome.tour.len(), ds.len());
    assert_eq!(outcome.tour.order()[0], 0);
    assert!(!outcome.cost.overflowed());
    assert_eq!(outcome.cost.segments.len(), 1);
}

// One evaporation per iteration, applied after every ant has deposited
#[rstest]
#[case(Execution::Sequential)]
#[case(Execution::Parallel)]
fn test_single_iteration_mass_balance(#[case] execution: Execution) {
    let ds = fixed();
    let p = ColonyParams {
        iterations: 1,
        rho: 0.2,
        ..params(execution)
    };
    let rec = Recorder(Mutex::new(Vec::new()));

    let matrix = Colony::new(ds.clone(), p).unwrap().colonize(Some(17), &rec).unwrap();

    let reports = rec.0.into_inner().unwrap();
    assert_eq!(reports.len(), 1);
    let initial = PheromoneMatrix::new(ds.len()).total();
    let expected = (initial + reports[0].deposited) * (1.0 - 0.2);
    assert!(
        (matrix.total() - expected).abs() <= 1e-9 * expected,
        "total {} vs expected {}",
        matrix.total(),
        expected
    );
}

#[test]
fn test_two_city_colony() {
    let ds = Arc::new(Dataset::new(vec![City::new(0, 0), City::new(3, 4)]).unwrap());
    let p = ColonyParams {
        ants: 2,
        ant_memory: 2,
        iterations: 3,
        execution: Execution::Sequential,
        ..ColonyParams::default()
    };

    let outcome = Colony::new(ds, p).unwrap().run(Some(1), &Silent).unwrap();
    assert_eq!(outcome.tour.order(), &[0, 1]);
    assert!((outcome.cost.total() - 10.0).abs() < 1e-12);
}

#[test]
fn test_coincident_cities_never_reach_the_colony() {
    let res = Dataset::new(vec![City::new(1, 1), City::new(2, 2), City::new(1, 1)]);
    assert!(matches!(res, Err(AcsError::Validation(_))));
}

#[test]
fn test_colony_rejects_invalid_params() {
    let p = ColonyParams {
        rho: 1.5,
        ..params(Execution::Sequential)
    };
    assert!(matches!(Colony::new(fixed(), p), Err(AcsError::Config(_))));
}

#[test]
fn test_baselines_produce_permutations() {
    let ds = Dataset::fixed();
    let mut rng = fastrand::Rng::with_seed(11);

    let tours = [
        baseline::nearest_neighbor(&ds).unwrap(),
        baseline::naive_nearest_neighbor(&ds, 0.5, &mut rng).unwrap(),
        baseline::random_swap(&ds, 500, &mut rng).unwrap(),
    ];
    for tour in &tours {
        let mut sorted = tour.order().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..ds.len()).collect::<Vec<_>>());
    }
}

#[test]
fn test_algorithm_names_round_trip() {
    for algorithm in Algorithm::iter() {
        let name = algorithm.to_string();
        assert_eq!(Algorithm::from_str(&name).unwrap(), algorithm);
    }
    assert_eq!(Algorithm::NearestNeighbor.to_string(), "nearest_neighbor");
}
