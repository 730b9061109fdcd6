use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

const INITIAL_PHEROMONE: f64 = 1.0;

/// Dense N x N pheromone store.
///
/// Cells hold `f64` bit patterns so `deposit` can be a lock-free add through
/// `&self` while many ants share the matrix. Evaporation takes `&mut self`,
/// which makes the barrier between the construction and evaporation phases a
/// borrow-checker fact: no ant can still hold the matrix while it decays.
pub struct PheromoneMatrix {
    n: usize,
    cells: Vec<AtomicU64>,
}

impl PheromoneMatrix {
    /// Uniform 1.0 everywhere except the zero diagonal.
    pub fn new(n: usize) -> Self {
        let cells = (0..n * n)
            .map(|idx| {
                let v = if idx / n == idx % n {
                    0.0
                } else {
                    INITIAL_PHEROMONE
                };
                AtomicU64::new(f64::to_bits(v))
            })
            .collect();
        Self { n, cells }
    }

    /// Builds a matrix from explicit rows. Rows must be square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            return None;
        }
        let cells = rows
            .iter()
            .flatten()
            .map(|&v| AtomicU64::new(v.to_bits()))
            .collect();
        Some(Self { n, cells })
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        f64::from_bits(self.cells[from * self.n + to].load(Ordering::Relaxed))
    }

    /// Atomically adds `amount` to cell (from, to).
    #[inline(always)]
    pub fn deposit(&self, from: usize, to: usize, amount: f64) {
        debug_assert!(amount >= 0.0, "negative deposit {}", amount);
        let cell = &self.cells[from * self.n + to];
        // The closure always returns Some, so the update cannot fail.
        let _ = cell.fetch_update(Ordering::AcqRel, Ordering::Relaxed, |bits| {
            Some((f64::from_bits(bits) + amount).to_bits())
        });
    }

    /// Scales every cell by `1 - rho`.
    pub fn evaporate_all(&mut self, rho: f64) {
        let retention = 1.0 - rho;
        for cell in self.cells.iter_mut() {
            scale(cell, retention);
        }
    }

    /// Same as `evaporate_all`, split over the current rayon pool in `chunk`-sized blocks.
    pub fn par_evaporate_all(&mut self, rho: f64, chunk: usize) {
        let retention = 1.0 - rho;
        self.cells
            .par_chunks_mut(chunk.max(1))
            .for_each(|block| {
                for cell in block {
                    scale(cell, retention);
                }
            });
    }

    /// Pheromone flowing into `to` from every city, indexed by origin.
    pub fn column(&self, to: usize) -> Vec<f64> {
        (0..self.n).map(|from| self.get(from, to)).collect()
    }

    pub fn row(&self, from: usize) -> Vec<f64> {
        (0..self.n).map(|to| self.get(from, to)).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n).map(|i| self.row(i)).collect()
    }

    pub fn total(&self) -> f64 {
        self.cells
            .iter()
            .map(|c| f64::from_bits(c.load(Ordering::Relaxed)))
            .sum()
    }
}

#[inline(always)]
fn scale(cell: &mut AtomicU64, factor: f64) {
    let v = cell.get_mut();
    *v = (f64::from_bits(*v) * factor).to_bits();
}

impl Clone for PheromoneMatrix {
    fn clone(&self) -> Self {
        Self {
            n: self.n,
            cells: self
                .cells
                .iter()
                .map(|c| AtomicU64::new(c.load(Ordering::Relaxed)))
                .collect(),
        }
    }
}

impl std::fmt::Debug for PheromoneMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PheromoneMatrix")
            .field("n", &self.n)
            .field("rows", &self.to_rows())
            .finish()
    }
}
