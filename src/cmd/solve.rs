use crate::reports;
use antforge::colony::{Colony, IterationReport, ProgressCallback};
use antforge::config::Config;
use antforge::dataset::Dataset;
use antforge::error::AcsResult;
use antforge::export;
use clap::Args;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the extracted tour as "x,y" lines to this file.
    #[arg(short = 'o', long)]
    pub export: Option<String>,

    /// Write the dataset in index order, readable again with --cities-file.
    #[arg(long)]
    pub export_cities: Option<String>,

    #[arg(long, default_value_t = false)]
    pub show_matrix: bool,
}

struct CliLogger;

impl ProgressCallback for CliLogger {
    fn on_iteration(&self, report: &IterationReport) {
        info!(
            "🐜 Iteration [{:4}] | deposited {:10.3} | coverage {:5.1}%",
            report.iteration,
            report.deposited,
            report.coverage * 100.0
        );
    }
}

pub fn run(args: SolveArgs, config: Config, dataset: Arc<Dataset>) -> AcsResult<()> {
    let colony = Colony::new(dataset.clone(), config.colony.clone())?;

    let start = Instant::now();
    let outcome = colony.run(args.seed, &CliLogger)?;
    info!("⏱️  Solved in {:.3}s", start.elapsed().as_secs_f64());

    if args.show_matrix {
        reports::print_matrix(&outcome.pheromone);
    }
    reports::print_tour(&dataset, &outcome.tour, &outcome.cost);

    if outcome.cost.overflowed() {
        warn!("⚠️  A hop distance is not representable; the cost is saturated");
    }

    if let Some(path) = &args.export {
        export::write_tour(path, &dataset, &outcome.tour)?;
    }
    if let Some(path) = &args.export_cities {
        export::write_dataset(path, &dataset)?;
    }

    Ok(())
}
