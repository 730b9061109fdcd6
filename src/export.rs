use crate::dataset::Dataset;
use crate::error::AcsResult;
use crate::tour::Tour;
use std::path::Path;
use tracing::info;

/// Writes one "x,y" line per city in tour order.
pub fn write_tour<P: AsRef<Path>>(path: P, dataset: &Dataset, tour: &Tour) -> AcsResult<()> {
    write_points(path, tour.order().iter().map(|&i| dataset.city(i)))
}

/// Writes the dataset in index order, in the format `Dataset::from_csv_path` reads.
pub fn write_dataset<P: AsRef<Path>>(path: P, dataset: &Dataset) -> AcsResult<()> {
    write_points(path, dataset.cities().iter().copied())
}

fn write_points<P, I>(path: P, points: I) -> AcsResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = crate::dataset::City>,
{
    let path = path.as_ref();
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut count = 0;
    for c in points {
        wtr.write_record(&[c.x.to_string(), c.y.to_string()])?;
        count += 1;
    }
    wtr.flush()?;

    info!("Exported {} points to {}", count, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::City;

    #[test]
    fn tour_file_lists_coordinates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.csv");

        let ds = Dataset::new(vec![City::new(1, 2), City::new(3, 4), City::new(-5, 6)]).unwrap();
        let tour = Tour::new(vec![0, 2, 1], 3).unwrap();
        write_tour(&path, &ds, &tour).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "1,2\n-5,6\n3,4\n");
    }

    #[test]
    fn dataset_survives_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.csv");

        let ds = Dataset::fixed();
        write_dataset(&path, &ds).unwrap();
        assert_eq!(Dataset::from_csv_path(&path).unwrap(), ds);
    }
}
