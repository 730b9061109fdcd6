use super::{extract_tour, Ant, PheromoneMatrix, Step};
use crate::config::{ColonyParams, Execution};
use crate::dataset::Dataset;
use crate::distance::TourCost;
use crate::error::AcsResult;
use crate::tour::Tour;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Snapshot taken after an iteration's evaporation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    pub iteration: usize,
    /// Sum of every deposit made during the iteration.
    pub deposited: f64,
    /// Fraction of cities touched by at least one ant.
    pub coverage: f64,
}

/// Receives a report after every iteration. Runs to a fixed budget; there is no abort.
pub trait ProgressCallback: Send + Sync {
    fn on_iteration(&self, report: &IterationReport);
}

pub struct Silent;
impl ProgressCallback for Silent {
    fn on_iteration(&self, _report: &IterationReport) {}
}

pub struct ColonyOutcome {
    pub pheromone: PheromoneMatrix,
    pub tour: Tour,
    pub cost: TourCost,
}

pub struct Colony {
    dataset: Arc<Dataset>,
    params: ColonyParams,
}

impl Colony {
    pub fn new(dataset: Arc<Dataset>, params: ColonyParams) -> AcsResult<Self> {
        params.validate(dataset.len())?;
        Ok(Self { dataset, params })
    }

    /// Colonizes, then extracts the elitist tour from the final matrix.
    pub fn run<CB: ProgressCallback>(
        &self,
        seed: Option<u64>,
        callback: &CB,
    ) -> AcsResult<ColonyOutcome> {
        let pheromone = self.colonize(seed, callback)?;
        let tour = extract_tour(&pheromone)?;
        let cost = tour.cost(&self.dataset);
        Ok(ColonyOutcome {
            pheromone,
            tour,
            cost,
        })
    }

    /// Runs the full iteration budget and returns the converged matrix.
    pub fn colonize<CB: ProgressCallback>(
        &self,
        seed: Option<u64>,
        callback: &CB,
    ) -> AcsResult<PheromoneMatrix> {
        let n = self.dataset.len();
        let opts = &self.params;

        // 1. Shared State
        let mut matrix = PheromoneMatrix::new(n);
        let mut master = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };

        let pool = match opts.execution {
            Execution::Parallel => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(opts.ants)
                    .build()?,
            ),
            Execution::Sequential => None,
        };
        let chunk = opts.chunk_for(n);

        info!(
            "Colonizing {} cities with {} ants ({}), {} iterations",
            n, opts.ants, opts.execution, opts.iterations
        );
        let start = Instant::now();

        // 2. Main Loop
        for iteration in 0..opts.iterations {
            let seeds: Vec<u64> = (0..opts.ants).map(|_| master.u64(..)).collect();

            // A. Construction (every ant finishes before evaporation starts)
            let build = |s: &u64| Ant::new(n, opts.ant_memory, *s).walk(&self.dataset, &matrix, opts);
            let paths = match &pool {
                Some(pool) => {
                    pool.install(|| seeds.par_iter().map(build).collect::<AcsResult<Vec<_>>>())?
                }
                None => seeds.iter().map(build).collect::<AcsResult<Vec<_>>>()?,
            };

            // B. Evaporation
            match &pool {
                Some(pool) => pool.install(|| matrix.par_evaporate_all(opts.rho, chunk)),
                None => matrix.evaporate_all(opts.rho),
            }

            // C. Report
            let report = summarize(iteration, &paths, n);
            debug!(
                "Iteration [{}] deposited {:.4} | coverage {:.0}%",
                iteration,
                report.deposited,
                report.coverage * 100.0
            );
            callback.on_iteration(&report);
        }

        debug!("Colonization finished in {:.3}s", start.elapsed().as_secs_f64());
        Ok(matrix)
    }
}

fn summarize(iteration: usize, paths: &[Vec<Step>], n: usize) -> IterationReport {
    let mut touched = vec![false; n];
    let mut deposited = 0.0;
    for step in paths.iter().flatten() {
        touched[step.city] = true;
        deposited += step.deposit;
    }
    let covered = touched.iter().filter(|&&t| t).count();

    IterationReport {
        iteration,
        deposited,
        coverage: covered as f64 / n as f64,
    }
}
