use super::pheromone::PheromoneMatrix;
use crate::dataset::Dataset;
use crate::distance::hop_cost;
use crate::error::{AcsError, AcsResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub city: usize,
    pub score: f64,
}

impl Candidate {
    pub fn new(city: usize, score: f64) -> Self {
        Self { city, score }
    }
}

/// Scores every unvisited city from `from` as pheromone / distance.
///
/// `out` is cleared first so an ant can reuse the allocation across steps.
pub fn evaluate_candidates(
    from: usize,
    unvisited: &[usize],
    matrix: &PheromoneMatrix,
    dataset: &Dataset,
    out: &mut Vec<Candidate>,
) -> AcsResult<()> {
    out.clear();
    out.reserve(unvisited.len());

    let origin = dataset.city(from);
    for &to in unvisited {
        let hop = hop_cost(origin, dataset.city(to));
        if hop.cost <= 0.0 {
            return Err(AcsError::CoincidentCities { from, to });
        }
        out.push(Candidate::new(to, matrix.get(from, to) * (1.0 / hop.cost)));
    }
    Ok(())
}

/// Bounded roulette wheel.
///
/// Keeps the `roulette_size` best candidates, turns their ascending prefix
/// sums into a min-max normalized wheel, and returns the first city whose
/// slot reaches `r`. Deterministic for a given list and `r`; the list is
/// consumed as scratch space.
pub fn roulette_wheel(
    candidates: &mut Vec<Candidate>,
    r: f64,
    roulette_size: usize,
) -> AcsResult<usize> {
    if candidates.is_empty() {
        return Err(AcsError::EmptyRoulette);
    }

    // 1. Sort ascending (stable, so equal scores keep evaluation order)
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));

    // 2. Truncate to the elite tail
    let keep = roulette_size.clamp(1, candidates.len());
    candidates.drain(..candidates.len() - keep);

    if candidates.len() == 1 {
        return Ok(candidates[0].city);
    }

    // 3. Running prefix sum
    let mut acc = 0.0;
    for c in candidates.iter_mut() {
        acc += c.score;
        c.score = acc;
    }

    // 4. Min-max normalize against the first and last cumulative value
    let min = candidates[0].score;
    let max = candidates[candidates.len() - 1].score;
    let span = max - min;
    let last = candidates[candidates.len() - 1].city;

    if !(span.is_finite() && span > 0.0) {
        return Ok(last);
    }

    // 5. First slot reaching r
    Ok(candidates
        .iter()
        .find(|c| (c.score - min) / span >= r)
        .map_or(last, |c| c.city))
}
