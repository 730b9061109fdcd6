use super::pheromone::PheromoneMatrix;
use crate::error::{AcsError, AcsResult};
use crate::tour::Tour;

/// Elitist greedy walk over a converged matrix.
///
/// Starts at city 0 and repeatedly follows the strongest pheromone trail
/// leading into the current city among cities not yet in the tour. Equal
/// trails resolve to the highest index (stable ascending sort, last element
/// taken); callers should not depend on that order.
pub fn extract_tour(matrix: &PheromoneMatrix) -> AcsResult<Tour> {
    let n = matrix.size();
    if n == 0 {
        return Err(AcsError::ExhaustedCandidates { step: 0 });
    }

    let mut order = Vec::with_capacity(n);
    let mut in_tour = vec![false; n];
    order.push(0);
    in_tour[0] = true;

    for step in 1..n {
        let current = order[step - 1];

        let mut trail: Vec<(usize, f64)> = matrix
            .column(current)
            .into_iter()
            .enumerate()
            .filter(|&(city, _)| !in_tour[city])
            .collect();
        trail.sort_by(|a, b| a.1.total_cmp(&b.1));

        let (next, _) = trail
            .last()
            .copied()
            .ok_or(AcsError::ExhaustedCandidates { step })?;

        order.push(next);
        in_tour[next] = true;
    }

    Tour::new(order, n)
}
