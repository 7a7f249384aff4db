//! Tree inventory CSV loading.
//!
//! The inventory is the primary input table: one row per surveyed tree with
//! at least a scientific name and a canopy width measurement. Extra columns
//! are ignored.

use std::io::Read;
use std::path::Path;

use canopy_map_tree_models::TreeRecord;
use serde::Deserialize;

use crate::SourceError;
use crate::parsing::{ensure_columns, normalize_species_name};

/// Columns the inventory CSV must provide.
const REQUIRED_COLUMNS: &[&str] = &["scientific_name", "canopy_width_ft"];

/// Raw inventory row as deserialized from CSV. Blank width cells become
/// `None`; non-numeric width cells are a deserialization error.
#[derive(Debug, Deserialize)]
struct InventoryRow {
    scientific_name: String,
    canopy_width_ft: Option<f64>,
}

/// Loads the tree inventory from a CSV file.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read, a required column is
/// missing, or a width cell is present but not numeric.
pub fn load_tree_inventory(path: &Path) -> Result<Vec<TreeRecord>, SourceError> {
    let file = std::fs::File::open(path)?;
    load_tree_inventory_from_reader(file, &path.display().to_string())
}

/// Loads tree inventory records from any CSV reader.
///
/// `label` identifies the input in log messages and errors (usually the
/// file path).
///
/// # Errors
///
/// Returns [`SourceError`] if a required column is missing or a row fails
/// to deserialize.
pub fn load_tree_inventory_from_reader<R: Read>(
    reader: R,
    label: &str,
) -> Result<Vec<TreeRecord>, SourceError> {
    let mut rdr = csv::Reader::from_reader(reader);
    ensure_columns(rdr.headers()?, REQUIRED_COLUMNS, label)?;

    let mut records = Vec::new();
    let mut unnamed: u64 = 0;

    for row in rdr.deserialize::<InventoryRow>() {
        let row = row?;
        let scientific_name = normalize_species_name(&row.scientific_name);
        if scientific_name.is_empty() {
            // A nameless row can never join to the rating lookup.
            unnamed += 1;
            continue;
        }
        records.push(TreeRecord {
            scientific_name,
            canopy_width_ft: row.canopy_width_ft,
        });
    }

    if unnamed > 0 {
        log::warn!("[{label}] Skipped {unnamed} rows with an empty scientific name");
    }
    log::info!("[{label}] Loaded {} tree records", records.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_records_with_extra_columns_ignored() {
        let csv = "tree_id,scientific_name,canopy_width_ft\n\
                   1,Quercus agrifolia,35.5\n\
                   2,Platanus racemosa,48\n";
        let records = load_tree_inventory_from_reader(csv.as_bytes(), "test").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].scientific_name, "Quercus agrifolia");
        assert!((records[0].canopy_width_ft.unwrap() - 35.5).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_width_loads_as_none() {
        let csv = "scientific_name,canopy_width_ft\nQuercus agrifolia,\n";
        let records = load_tree_inventory_from_reader(csv.as_bytes(), "test").unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].canopy_width_ft.is_none());
    }

    #[test]
    fn rejects_missing_width_column() {
        let csv = "scientific_name\nQuercus agrifolia\n";
        let err = load_tree_inventory_from_reader(csv.as_bytes(), "test").unwrap_err();
        assert!(matches!(
            err,
            SourceError::MissingColumn { ref column, .. } if column == "canopy_width_ft"
        ));
    }

    #[test]
    fn rejects_non_numeric_width() {
        let csv = "scientific_name,canopy_width_ft\nQuercus agrifolia,wide\n";
        assert!(load_tree_inventory_from_reader(csv.as_bytes(), "test").is_err());
    }

    #[test]
    fn skips_rows_with_empty_name() {
        let csv = "scientific_name,canopy_width_ft\n  ,10\nQuercus agrifolia,20\n";
        let records = load_tree_inventory_from_reader(csv.as_bytes(), "test").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn normalizes_species_names_on_load() {
        let csv = "scientific_name,canopy_width_ft\n Quercus   agrifolia ,10\n";
        let records = load_tree_inventory_from_reader(csv.as_bytes(), "test").unwrap();
        assert_eq!(records[0].scientific_name, "Quercus agrifolia");
    }
}
