use crate::error::{AcsError, AcsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    pub x: i32,
    pub y: i32,
}

impl City {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

const FIXED_DATASET: [(i32, i32); 10] = [
    (565, 575),
    (25, 185),
    (345, 750),
    (945, 685),
    (845, 655),
    (880, 660),
    (25, 230),
    (525, 1000),
    (580, 175),
    (650, 130),
];

/// Read-only set of cities. Construction guarantees no two cities share a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    cities: Vec<City>,
}

impl Dataset {
    pub fn new(cities: Vec<City>) -> AcsResult<Self> {
        if cities.len() < 2 {
            return Err(AcsError::Validation(format!(
                "a dataset needs at least 2 cities, got {}",
                cities.len()
            )));
        }

        let mut seen = HashSet::with_capacity(cities.len());
        for (i, c) in cities.iter().enumerate() {
            if !seen.insert(*c) {
                return Err(AcsError::Validation(format!(
                    "duplicate city ({}, {}) at index {}",
                    c.x, c.y, i
                )));
            }
        }

        Ok(Self { cities })
    }

    /// Draws `n` distinct cities uniformly from `[0, x_max] x [0, y_max]`.
    pub fn random(n: usize, x_max: i32, y_max: i32, rng: &mut fastrand::Rng) -> AcsResult<Self> {
        if x_max < 0 || y_max < 0 {
            return Err(AcsError::Validation(format!(
                "grid bounds must be non-negative, got {}x{}",
                x_max, y_max
            )));
        }

        let capacity = (x_max as u64 + 1) * (y_max as u64 + 1);
        if n as u64 > capacity {
            return Err(AcsError::Validation(format!(
                "cannot place {} distinct cities on a grid of {} points",
                n, capacity
            )));
        }

        let mut seen = HashSet::with_capacity(n);
        let mut cities = Vec::with_capacity(n);
        let mut rejected = 0usize;

        while cities.len() < n {
            let c = City::new(rng.i32(0..=x_max), rng.i32(0..=y_max));
            if seen.insert(c) {
                cities.push(c);
            } else {
                rejected += 1;
            }
        }

        if rejected > 0 {
            debug!("Redrew {} coincident cities", rejected);
        }

        Self::new(cities)
    }

    pub fn fixed() -> Self {
        Self {
            cities: FIXED_DATASET
                .iter()
                .map(|&(x, y)| City::new(x, y))
                .collect(),
        }
    }

    /// Loads one "x,y" pair per line, the same format `export` writes.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> AcsResult<Self> {
        let file = File::open(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut cities = Vec::new();
        for (row, result) in rdr.records().enumerate() {
            let rec = result?;
            if rec.len() < 2 {
                return Err(AcsError::Validation(format!(
                    "row {} has {} fields, expected 2",
                    row + 1,
                    rec.len()
                )));
            }
            let parse = |s: &str| {
                s.parse::<i32>().map_err(|_| {
                    AcsError::Validation(format!("row {}: '{}' is not an integer", row + 1, s))
                })
            };
            cities.push(City::new(parse(&rec[0])?, parse(&rec[1])?));
        }

        Self::new(cities)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    #[inline(always)]
    pub fn city(&self, idx: usize) -> City {
        self.cities[idx]
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates() {
        let res = Dataset::new(vec![City::new(0, 0), City::new(1, 1), City::new(0, 0)]);
        assert!(matches!(res, Err(AcsError::Validation(_))));
    }

    #[test]
    fn rejects_single_city() {
        assert!(Dataset::new(vec![City::new(3, 4)]).is_err());
    }

    #[test]
    fn random_is_unique_and_bounded() {
        let mut rng = fastrand::Rng::with_seed(7);
        let ds = Dataset::random(50, 10, 10, &mut rng).unwrap();
        assert_eq!(ds.len(), 50);
        for c in ds.cities() {
            assert!((0..=10).contains(&c.x) && (0..=10).contains(&c.y));
        }
    }

    #[test]
    fn random_fills_whole_grid() {
        let mut rng = fastrand::Rng::with_seed(1);
        let ds = Dataset::random(4, 1, 1, &mut rng).unwrap();
        assert_eq!(ds.len(), 4);
        assert!(Dataset::random(5, 1, 1, &mut rng).is_err());
    }

    #[test]
    fn fixed_dataset_is_valid() {
        let ds = Dataset::fixed();
        assert!(Dataset::new(ds.cities().to_vec()).is_ok());
    }
}
