use crate::dataset::Dataset;
use crate::distance::{tour_cost, TourCost};
use crate::error::{AcsError, AcsResult};
use serde::Serialize;

/// Closed cycle visiting every city exactly once. The last city connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Validates that `order` is a permutation of `0..n`.
    pub fn new(order: Vec<usize>, n: usize) -> AcsResult<Self> {
        if order.len() != n {
            return Err(AcsError::Validation(format!(
                "tour visits {} cities, expected {}",
                order.len(),
                n
            )));
        }
        let mut seen = vec![false; n];
        for &c in &order {
            if c >= n || seen[c] {
                return Err(AcsError::Validation(format!(
                    "city {} is out of range or repeated",
                    c
                )));
            }
            seen[c] = true;
        }
        Ok(Self { order })
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn cost(&self, dataset: &Dataset) -> TourCost {
        tour_cost(dataset, &self.order)
    }
}
