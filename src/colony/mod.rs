pub mod extract;
pub mod pheromone;
pub mod runner;
pub mod selection;

pub use self::extract::extract_tour;
pub use self::pheromone::PheromoneMatrix;
pub use self::runner::{Colony, ColonyOutcome, IterationReport, ProgressCallback, Silent};
pub use self::selection::{evaluate_candidates, roulette_wheel, Candidate};

use crate::config::ColonyParams;
use crate::dataset::Dataset;
use crate::distance::hop_cost;
use crate::error::{AcsError, AcsResult};

/// One hop of an ant's walk: the city reached and the pheromone left on the way in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub city: usize,
    pub deposit: f64,
}

/// Private working state of a single ant for one iteration.
///
/// `unexplored` holds every city index; positions `..=k` are visited and
/// `k + 1..` still open, with `k` the cut that moves one slot per step.
pub struct Ant {
    unexplored: Vec<usize>,
    path: Vec<Step>,
    scratch: Vec<selection::Candidate>,
    rng: fastrand::Rng,
}

impl Ant {
    pub fn new(cities: usize, memory: usize, seed: u64) -> Self {
        Self {
            unexplored: (0..cities).collect(),
            path: Vec::with_capacity(memory),
            scratch: Vec::with_capacity(cities),
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Runs the construction loop to completion, depositing on `matrix` after every hop.
    ///
    /// The walk has `params.ant_memory` cities including the random start.
    pub fn walk(
        mut self,
        dataset: &Dataset,
        matrix: &PheromoneMatrix,
        params: &ColonyParams,
    ) -> AcsResult<Vec<Step>> {
        let n = dataset.len();
        let memory = params.ant_memory.min(n);

        let start = self.rng.usize(0..n);
        self.path.push(Step {
            city: start,
            deposit: 0.0,
        });

        for k in 0..memory.saturating_sub(1) {
            let prev = self.path[k].city;

            // Move the city we are standing on to the visited side of the cut
            let idx = self.unexplored[k..]
                .iter()
                .position(|&c| c == prev)
                .map(|p| p + k)
                .ok_or(AcsError::ElementNotFound { city: prev })?;
            self.unexplored.swap(k, idx);

            selection::evaluate_candidates(
                prev,
                &self.unexplored[k + 1..],
                matrix,
                dataset,
                &mut self.scratch,
            )?;
            let next =
                selection::roulette_wheel(&mut self.scratch, self.rng.f64(), params.roulette_size)?;

            let hop = hop_cost(dataset.city(prev), dataset.city(next));
            let amount = params.boost / hop.cost;
            matrix.deposit(prev, next, amount);

            self.path.push(Step {
                city: next,
                deposit: amount,
            });
        }

        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::City;

    fn line(n: i32) -> Dataset {
        Dataset::new((0..n).map(|i| City::new(i * 10, 0)).collect()).unwrap()
    }

    fn params(memory: usize) -> ColonyParams {
        ColonyParams {
            ant_memory: memory,
            ..ColonyParams::default()
        }
    }

    #[test]
    fn walk_length_matches_memory() {
        let ds = line(8);
        let m = PheromoneMatrix::new(8);
        let path = Ant::new(8, 5, 3).walk(&ds, &m, &params(5)).unwrap();

        assert_eq!(path.len(), 5);
        assert_eq!(path[0].deposit, 0.0);

        let mut seen: Vec<usize> = path.iter().map(|s| s.city).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 5, "ant revisited a city");
    }

    #[test]
    fn deposits_land_on_walked_edges() {
        let ds = line(6);
        let m = PheromoneMatrix::new(6);
        let p = params(6);
        let path = Ant::new(6, 6, 11).walk(&ds, &m, &p).unwrap();

        for w in path.windows(2) {
            let hop = hop_cost(ds.city(w[0].city), ds.city(w[1].city));
            let expected = p.boost / hop.cost;
            assert!((w[1].deposit - expected).abs() < 1e-12);
            assert!(m.get(w[0].city, w[1].city) >= 1.0 + expected - 1e-12);
        }
    }

    #[test]
    fn full_memory_visits_every_city() {
        let ds = line(5);
        let m = PheromoneMatrix::new(5);
        let path = Ant::new(5, 5, 99).walk(&ds, &m, &params(5)).unwrap();
        let mut cities: Vec<usize> = path.iter().map(|s| s.city).collect();
        cities.sort();
        assert_eq!(cities, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn same_seed_same_walk() {
        let ds = line(9);
        let a = Ant::new(9, 6, 42)
            .walk(&ds, &PheromoneMatrix::new(9), &params(6))
            .unwrap();
        let b = Ant::new(9, 6, 42)
            .walk(&ds, &PheromoneMatrix::new(9), &params(6))
            .unwrap();
        assert_eq!(a, b);
    }
}
