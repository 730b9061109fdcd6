use crate::dataset::{City, Dataset};

/// Euclidean cost of a single hop. `overflow` marks a saturated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HopCost {
    pub overflow: bool,
    pub cost: f64,
}

impl HopCost {
    const SATURATED: HopCost = HopCost {
        overflow: true,
        cost: f64::MAX,
    };
}

#[inline(always)]
pub fn hop_cost(a: City, b: City) -> HopCost {
    // i32 differences squared need more than 64 bits
    let dx = a.x as i128 - b.x as i128;
    let dy = a.y as i128 - b.y as i128;
    from_squared((dx * dx + dy * dy) as f64)
}

#[inline(always)]
fn from_squared(squared: f64) -> HopCost {
    let cost = squared.sqrt();
    if cost.is_finite() {
        HopCost {
            overflow: false,
            cost,
        }
    } else {
        HopCost::SATURATED
    }
}

/// Accumulated cost of a walk.
///
/// A saturated hop terminates the running sum; the next hop opens a new
/// segment. A single-element result with `overflowed() == false` is an exact sum.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TourCost {
    pub segments: Vec<f64>,
    overflowed: bool,
    sealed: bool,
}

impl TourCost {
    pub fn push(&mut self, hop: HopCost) {
        if hop.overflow {
            self.overflowed = true;
            self.sealed = true;
            self.segments.push(hop.cost);
            return;
        }
        match self.segments.last_mut() {
            Some(last) if !self.sealed => *last += hop.cost,
            _ => self.segments.push(hop.cost),
        }
        self.sealed = false;
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Sum of all segments, saturating at `f64::MAX`.
    pub fn total(&self) -> f64 {
        let sum: f64 = self.segments.iter().sum();
        if sum.is_finite() {
            sum
        } else {
            f64::MAX
        }
    }
}

/// Cost of visiting `order` without returning to the start.
pub fn path_cost(dataset: &Dataset, order: &[usize]) -> TourCost {
    let mut cost = TourCost::default();
    for w in order.windows(2) {
        cost.push(hop_cost(dataset.city(w[0]), dataset.city(w[1])));
    }
    cost
}

/// Cost of the closed cycle through `order`.
pub fn tour_cost(dataset: &Dataset, order: &[usize]) -> TourCost {
    let mut cost = path_cost(dataset, order);
    if let (Some(&first), Some(&last)) = (order.first(), order.last()) {
        if order.len() > 1 {
            cost.push(hop_cost(dataset.city(last), dataset.city(first)));
        }
    }
    cost
}
