use crate::error::{AcsError, AcsResult};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    #[serde(default)]
    pub colony: ColonyParams,
    #[command(flatten)]
    #[serde(default)]
    pub dataset: DatasetParams,
    #[command(flatten)]
    #[serde(default)]
    pub baseline: BaselineParams,
}

/// How the ants of one iteration are scheduled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Execution {
    Sequential,
    Parallel,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyParams {
    #[arg(long, default_value_t = 12)]
    pub ants: usize,
    #[arg(long, default_value_t = 5)]
    pub ant_memory: usize,
    #[arg(long, default_value_t = 3)]
    pub roulette_size: usize,
    #[arg(long, default_value_t = 0.1)]
    pub rho: f64,
    #[arg(long, default_value_t = 10.0)]
    pub boost: f64,
    #[arg(long, default_value_t = 10)]
    pub iterations: usize,

    // 0 derives the chunk from the city and ant counts
    #[arg(long, default_value_t = 0)]
    pub evaporation_chunk: usize,

    #[arg(long, value_enum, default_value_t = Execution::Parallel)]
    pub execution: Execution,
}

impl Default for ColonyParams {
    fn default() -> Self {
        Self {
            ants: 12,
            ant_memory: 5,
            roulette_size: 3,
            rho: 0.1,
            boost: 10.0,
            iterations: 10,
            evaporation_chunk: 0,
            execution: Execution::Parallel,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetParams {
    #[arg(long, default_value_t = 10)]
    pub cities: usize,
    #[arg(long, default_value_t = 1000)]
    pub x_max: i32,
    #[arg(long, default_value_t = 1000)]
    pub y_max: i32,
    #[arg(long, default_value_t = false)]
    pub fixed_dataset: bool,
    #[arg(long)]
    pub dataset_seed: Option<u64>,
}

impl Default for DatasetParams {
    fn default() -> Self {
        Self {
            cities: 10,
            x_max: 1000,
            y_max: 1000,
            fixed_dataset: false,
            dataset_seed: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineParams {
    /// Chance of taking the second-nearest city in the naive nearest neighbor walk.
    #[arg(long, default_value_t = 0.3)]
    pub naive_probability: f64,
    #[arg(long, default_value_t = 10_000)]
    pub swap_iterations: usize,
}

impl Default for BaselineParams {
    fn default() -> Self {
        Self {
            naive_probability: 0.3,
            swap_iterations: 10_000,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AcsResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every flag the user actually typed over the file-loaded values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(colony.ants);
        update_if_present!(colony.ant_memory);
        update_if_present!(colony.roulette_size);
        update_if_present!(colony.rho);
        update_if_present!(colony.boost);
        update_if_present!(colony.iterations);
        update_if_present!(colony.evaporation_chunk);
        update_if_present!(colony.execution);

        update_if_present!(dataset.cities);
        update_if_present!(dataset.x_max);
        update_if_present!(dataset.y_max);
        update_if_present!(dataset.fixed_dataset);
        update_if_present!(dataset.dataset_seed);

        update_if_present!(baseline.naive_probability);
        update_if_present!(baseline.swap_iterations);
    }

    pub fn validate(&self) -> AcsResult<()> {
        self.colony.validate(self.dataset.cities)?;

        if self.dataset.x_max < 0 || self.dataset.y_max < 0 {
            return Err(AcsError::Config(format!(
                "grid bounds must be non-negative, got {}x{}",
                self.dataset.x_max, self.dataset.y_max
            )));
        }

        let p = self.baseline.naive_probability;
        if !(0.0..=0.5).contains(&p) {
            return Err(AcsError::Config(format!(
                "naive_probability must lie in [0, 0.5], got {}",
                p
            )));
        }

        Ok(())
    }
}

impl ColonyParams {
    /// Checks the parameters against a dataset of `cities` points.
    pub fn validate(&self, cities: usize) -> AcsResult<()> {
        if cities < 2 {
            return Err(AcsError::Config(format!(
                "at least 2 cities are required, got {}",
                cities
            )));
        }
        if self.ants == 0 {
            return Err(AcsError::Config("ants must be at least 1".to_string()));
        }
        // Each step consumes one unvisited city; past N the roulette would be empty.
        if self.ant_memory < 2 || self.ant_memory > cities {
            return Err(AcsError::Config(format!(
                "ant_memory must lie in [2, {}], got {}",
                cities, self.ant_memory
            )));
        }
        if self.roulette_size == 0 {
            return Err(AcsError::Config(
                "roulette_size must be at least 1".to_string(),
            ));
        }
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(AcsError::Config(format!(
                "rho must lie in (0, 1), got {}",
                self.rho
            )));
        }
        if !(self.boost.is_finite() && self.boost > 0.0) {
            return Err(AcsError::Config(format!(
                "boost must be positive and finite, got {}",
                self.boost
            )));
        }
        Ok(())
    }

    pub fn chunk_for(&self, cities: usize) -> usize {
        if self.evaporation_chunk > 0 {
            self.evaporation_chunk
        } else {
            (4 * (cities / self.ants.max(1))).max(1)
        }
    }
}
