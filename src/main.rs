use antforge::config::Config;
use antforge::dataset::Dataset;
use antforge::error::AcsResult;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV file with one "x,y" city per line. Overrides the generated dataset.
    #[arg(global = true, long)]
    cities_file: Option<String>,

    /// JSON file with colony, dataset and baseline parameters.
    #[arg(global = true, long = "config")]
    config_path: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Solve(cmd::solve::SolveArgs),
    Compare(cmd::compare::CompareArgs),
}

fn main() {
    // 1. Parse Raw Matches (to distinguish user input from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = execute(cli, &matches) {
        error!("❌ FATAL: {}", e);
        process::exit(1);
    }
}

fn execute(cli: Cli, matches: &ArgMatches) -> AcsResult<()> {
    // 2. Subcommand config and its matches (flags live on the subcommand)
    let (cli_config, sub_matches) = match &cli.command {
        Commands::Solve(args) => (&args.config, matches.subcommand_matches("solve")),
        Commands::Compare(args) => (&args.config, matches.subcommand_matches("compare")),
    };

    // 3. Resolve Config: JSON file as base, explicit flags on top
    let mut config = match &cli.config_path {
        Some(path) => {
            info!("⚙️  Loading Config from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            if let Some(sub) = sub_matches {
                file_config.merge_from_cli(cli_config, sub);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    // 4. Dataset
    let dataset = load_dataset(&cli, &config)?;
    config.dataset.cities = dataset.len();
    config.validate()?;
    let dataset = Arc::new(dataset);

    // 5. Execute
    match cli.command {
        Commands::Solve(args) => cmd::solve::run(args, config, dataset),
        Commands::Compare(args) => cmd::compare::run(args, config, dataset),
    }
}

fn load_dataset(cli: &Cli, config: &Config) -> AcsResult<Dataset> {
    if let Some(path) = &cli.cities_file {
        info!("📂 Loading Cities: {}", path);
        return Dataset::from_csv_path(path);
    }

    let params = &config.dataset;
    if params.fixed_dataset {
        info!("📂 Using the built-in fixed dataset");
        return Ok(Dataset::fixed());
    }

    info!(
        "🎲 Generating {} cities on a {}x{} grid",
        params.cities, params.x_max, params.y_max
    );
    let mut rng = match params.dataset_seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    Dataset::random(params.cities, params.x_max, params.y_max, &mut rng)
}
