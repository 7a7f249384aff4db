//! Shared parsing and normalization utilities for tabular inputs.
//!
//! Species names are the join key between the inventory and the rating
//! lookup, so both loaders must normalize them the same way.

use crate::SourceError;

/// Normalizes a species name for join-key equality: trims leading/trailing
/// whitespace and collapses internal whitespace runs to a single space.
///
/// Botanical synonyms are NOT resolved; two spellings of the same species
/// remain distinct join keys.
#[must_use]
pub fn normalize_species_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Verifies that every required column appears in the CSV header row.
pub(crate) fn ensure_columns(
    headers: &csv::StringRecord,
    required: &[&str],
    label: &str,
) -> Result<(), SourceError> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(SourceError::MissingColumn {
                column: (*column).to_string(),
                file: label.to_string(),
            });
        }
    }
    Ok(())
}
