use crate::reports::{self, ComparisonRow};
use antforge::baseline::{self, Algorithm};
use antforge::colony::{Colony, Silent};
use antforge::config::{Config, Execution};
use antforge::dataset::Dataset;
use antforge::error::AcsResult;
use antforge::tour::Tour;
use clap::Args;
use std::sync::Arc;
use std::time::Instant;
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: CompareArgs, config: Config, dataset: Arc<Dataset>) -> AcsResult<()> {
    info!("⚔️  Comparing {} algorithms on {} cities", Algorithm::iter().count(), dataset.len());

    let mut rows = Vec::new();
    for algorithm in Algorithm::iter() {
        let start = Instant::now();
        let tour = solve_with(algorithm, &config, &dataset, args.seed)?;
        let elapsed = start.elapsed();

        let cost = tour.cost(&dataset);
        info!("   {:<24} {:>14.2}", algorithm, cost.total());
        rows.push(ComparisonRow {
            algorithm,
            cost,
            elapsed,
        });
    }

    reports::print_comparison(&rows);
    Ok(())
}

fn solve_with(
    algorithm: Algorithm,
    config: &Config,
    dataset: &Arc<Dataset>,
    seed: Option<u64>,
) -> AcsResult<Tour> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    match algorithm {
        Algorithm::RandomSwap => {
            baseline::random_swap(dataset, config.baseline.swap_iterations, &mut rng)
        }
        Algorithm::NearestNeighbor => baseline::nearest_neighbor(dataset),
        Algorithm::NaiveNearestNeighbor => {
            baseline::naive_nearest_neighbor(dataset, config.baseline.naive_probability, &mut rng)
        }
        Algorithm::AntColonySequential => {
            colony_tour(dataset, config, Execution::Sequential, seed)
        }
        Algorithm::AntColonyParallel => colony_tour(dataset, config, Execution::Parallel, seed),
    }
}

fn colony_tour(
    dataset: &Arc<Dataset>,
    config: &Config,
    execution: Execution,
    seed: Option<u64>,
) -> AcsResult<Tour> {
    let mut params = config.colony.clone();
    params.execution = execution;
    let colony = Colony::new(dataset.clone(), params)?;
    Ok(colony.run(seed, &Silent)?.tour)
}
