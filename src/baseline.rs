//! Simple constructive and swap heuristics used as reference points for the colony.

use crate::dataset::Dataset;
use crate::distance::hop_cost;
use crate::error::AcsResult;
use crate::tour::Tour;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Algorithm {
    RandomSwap,
    NearestNeighbor,
    NaiveNearestNeighbor,
    AntColonySequential,
    AntColonyParallel,
}

/// Greedy walk from city 0, always moving to the closest unvisited city.
pub fn nearest_neighbor(dataset: &Dataset) -> AcsResult<Tour> {
    walk_nearest(dataset, |_| false)
}

/// Like `nearest_neighbor`, but takes the second-closest city with `probability`.
pub fn naive_nearest_neighbor(
    dataset: &Dataset,
    probability: f64,
    rng: &mut fastrand::Rng,
) -> AcsResult<Tour> {
    walk_nearest(dataset, |_| rng.f64() < probability)
}

fn walk_nearest<F>(dataset: &Dataset, mut take_second: F) -> AcsResult<Tour>
where
    F: FnMut(usize) -> bool,
{
    let n = dataset.len();
    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    order.push(0);
    visited[0] = true;

    for step in 1..n {
        let here = dataset.city(order[step - 1]);

        // Two closest unvisited cities
        let mut best: Option<(usize, f64)> = None;
        let mut second: Option<(usize, f64)> = None;
        for (idx, _) in visited.iter().enumerate().filter(|(_, v)| !**v) {
            let cost = hop_cost(here, dataset.city(idx)).cost;
            match best {
                Some((_, b)) if cost >= b => {
                    if second.map_or(true, |(_, s)| cost < s) {
                        second = Some((idx, cost));
                    }
                }
                _ => {
                    second = best;
                    best = Some((idx, cost));
                }
            }
        }

        let next = match (best, second) {
            (Some(_), Some((s, _))) if take_second(step) => s,
            (Some((b, _)), _) => b,
            (None, _) => break,
        };
        order.push(next);
        visited[next] = true;
    }

    Tour::new(order, n)
}

/// Random pairwise swaps on the identity tour, kept only when the touched edges get shorter.
pub fn random_swap(
    dataset: &Dataset,
    iterations: usize,
    rng: &mut fastrand::Rng,
) -> AcsResult<Tour> {
    let n = dataset.len();
    let mut order: Vec<usize> = (0..n).collect();
    if n < 4 {
        return Tour::new(order, n);
    }

    let edge = |order: &[usize], at: usize| {
        hop_cost(dataset.city(order[at]), dataset.city(order[(at + 1) % n])).cost
    };

    // City 0 stays fixed as the tour start
    for _ in 0..iterations {
        let a = rng.usize(1..n);
        let b = rng.usize(1..n);
        if a == b {
            continue;
        }

        let mut edges = vec![(a + n - 1) % n, a, (b + n - 1) % n, b];
        edges.sort_unstable();
        edges.dedup();

        let before: f64 = edges.iter().map(|&e| edge(&order, e)).sum();
        order.swap(a, b);
        let after: f64 = edges.iter().map(|&e| edge(&order, e)).sum();

        if after >= before {
            order.swap(a, b);
        }
    }

    Tour::new(order, n)
}
