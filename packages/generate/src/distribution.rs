//! Rating distribution CSV for the stacked bar chart.

use std::io::Write;
use std::path::Path;

use canopy_map_analytics_models::RatingShare;

use crate::GenerateError;

/// Writes the distribution rows to any writer as CSV.
///
/// Rows are written in the order given, which the analytics layer has
/// already arranged by rating display order then species name.
///
/// # Errors
///
/// Returns [`GenerateError`] if serialization fails.
pub fn write_distribution<W: Write>(writer: W, shares: &[RatingShare]) -> Result<(), GenerateError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["scientific_name", "water_use_rating", "percent"])?;
    for share in shares {
        csv_writer.write_record([
            share.scientific_name.as_str(),
            &share.water_use_rating.to_string(),
            &format!("{:.4}", share.percent),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the distribution CSV file.
///
/// # Errors
///
/// Returns [`GenerateError`] if the file cannot be written.
pub fn write_distribution_csv(path: &Path, shares: &[RatingShare]) -> Result<(), GenerateError> {
    let file = std::fs::File::create(path)?;
    write_distribution(file, shares)?;
    log::info!(
        "Rating distribution written: {} ({} rows)",
        path.display(),
        shares.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use canopy_map_tree_models::WaterUseRating;

    use super::*;

    fn share(name: &str, rating: WaterUseRating, percent: f64) -> RatingShare {
        RatingShare {
            scientific_name: name.to_string(),
            water_use_rating: rating,
            tree_count: 1,
            percent,
        }
    }

    #[test]
    fn writes_header_and_display_labels() {
        let shares = vec![
            share("Ficus mysteriosa", WaterUseRating::Unknown, 25.0),
            share("Quercus agrifolia", WaterUseRating::VeryLow, 75.0),
        ];

        let mut buffer = Vec::new();
        write_distribution(&mut buffer, &shares).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "scientific_name,water_use_rating,percent"
        );
        assert_eq!(lines.next().unwrap(), "Ficus mysteriosa,Unknown,25.0000");
        assert_eq!(
            lines.next().unwrap(),
            "Quercus agrifolia,Very Low,75.0000"
        );
    }

    #[test]
    fn empty_distribution_writes_header_only() {
        let mut buffer = Vec::new();
        write_distribution(&mut buffer, &[]).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
