//! Total canopy area from per-tree canopy width measurements.

use canopy_map_analytics_models::CanopyAreaSummary;
use canopy_map_tree_models::TreeRecord;

use crate::units::circle_area_from_diameter;

/// Computes the total canopy area across the inventory, treating each
/// canopy as a perfect circle with diameter equal to the measured width.
///
/// Records with no width measurement contribute zero and are tallied in
/// `missing_width`. Negative widths would contribute a spurious positive
/// area once squared, so they also contribute zero and are tallied in
/// `invalid_width` with a warning.
#[must_use]
pub fn total_canopy_area(records: &[TreeRecord]) -> CanopyAreaSummary {
    let mut summary = CanopyAreaSummary {
        tree_count: records.len() as u64,
        measured_count: 0,
        missing_width: 0,
        invalid_width: 0,
        total_sq_ft: 0.0,
    };

    for record in records {
        match record.canopy_width_ft {
            None => summary.missing_width += 1,
            Some(width) if width < 0.0 => {
                log::warn!(
                    "Ignoring negative canopy width {width} ft for '{}'",
                    record.scientific_name
                );
                summary.invalid_width += 1;
            }
            Some(width) => {
                summary.measured_count += 1;
                summary.total_sq_ft += circle_area_from_diameter(width);
            }
        }
    }

    if summary.missing_width > 0 {
        log::warn!(
            "{} of {} trees have no canopy width measurement (zero contribution)",
            summary.missing_width,
            summary.tree_count
        );
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, width: Option<f64>) -> TreeRecord {
        TreeRecord {
            scientific_name: name.to_string(),
            canopy_width_ft: width,
        }
    }

    #[test]
    fn sums_circular_areas_from_diameters() {
        // widths [0, 10, 20] -> pi * (0 + 25 + 100)
        let records = vec![
            record("a", Some(0.0)),
            record("b", Some(10.0)),
            record("c", Some(20.0)),
        ];
        let summary = total_canopy_area(&records);
        assert!((summary.total_sq_ft - 125.0 * std::f64::consts::PI).abs() < 1e-9);
        assert_eq!(summary.measured_count, 3);
    }

    #[test]
    fn total_is_monotone_under_appends() {
        let mut records = vec![record("a", Some(12.0))];
        let before = total_canopy_area(&records).total_sq_ft;
        records.push(record("b", Some(3.0)));
        let after = total_canopy_area(&records).total_sq_ft;
        assert!(after >= before);
    }

    #[test]
    fn missing_width_contributes_zero() {
        let records = vec![record("a", None), record("b", Some(10.0))];
        let summary = total_canopy_area(&records);
        assert!((summary.total_sq_ft - 25.0 * std::f64::consts::PI).abs() < 1e-9);
        assert_eq!(summary.missing_width, 1);
        assert_eq!(summary.measured_count, 1);
    }

    #[test]
    fn negative_width_is_guarded() {
        let records = vec![record("a", Some(-10.0))];
        let summary = total_canopy_area(&records);
        assert!(summary.total_sq_ft.abs() < f64::EPSILON);
        assert_eq!(summary.invalid_width, 1);
        assert_eq!(summary.measured_count, 0);
    }

    #[test]
    fn empty_inventory_totals_zero() {
        let summary = total_canopy_area(&[]);
        assert_eq!(summary.tree_count, 0);
        assert!(summary.total_sq_ft.abs() < f64::EPSILON);
    }
}
