//! Species-to-rating lookup table loading.
//!
//! The lookup is a curated static table mapping scientific names to
//! water-use ratings. It is joined to the inventory by normalized name
//! equality, so a typo in one rating label should warn rather than reject
//! the whole batch.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr as _;

use canopy_map_tree_models::WaterUseRating;
use serde::Deserialize;

use crate::SourceError;
use crate::parsing::{ensure_columns, normalize_species_name};

/// Columns the rating CSV must provide.
const REQUIRED_COLUMNS: &[&str] = &["scientific_name", "water_use_rating"];

#[derive(Debug, Deserialize)]
struct RatingRow {
    scientific_name: String,
    water_use_rating: String,
}

/// Loads the species rating lookup from a CSV file.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or a required column
/// is missing.
pub fn load_species_ratings(path: &Path) -> Result<BTreeMap<String, WaterUseRating>, SourceError> {
    let file = std::fs::File::open(path)?;
    load_species_ratings_from_reader(file, &path.display().to_string())
}

/// Loads the species rating lookup from any CSV reader, keyed by normalized
/// scientific name.
///
/// Unrecognized rating labels map to [`WaterUseRating::Unknown`] with a
/// warning. Duplicate species keep the last entry.
///
/// # Errors
///
/// Returns [`SourceError`] if a required column is missing or a row fails
/// to deserialize.
pub fn load_species_ratings_from_reader<R: Read>(
    reader: R,
    label: &str,
) -> Result<BTreeMap<String, WaterUseRating>, SourceError> {
    let mut rdr = csv::Reader::from_reader(reader);
    ensure_columns(rdr.headers()?, REQUIRED_COLUMNS, label)?;

    let mut lookup = BTreeMap::new();

    for row in rdr.deserialize::<RatingRow>() {
        let row = row?;
        let scientific_name = normalize_species_name(&row.scientific_name);
        if scientific_name.is_empty() {
            log::warn!("[{label}] Skipping rating row with an empty scientific name");
            continue;
        }

        let rating = WaterUseRating::from_str(row.water_use_rating.trim()).unwrap_or_else(|_| {
            log::warn!(
                "[{label}] Unrecognized water use rating '{}' for '{scientific_name}'",
                row.water_use_rating
            );
            WaterUseRating::Unknown
        });

        if let Some(previous) = lookup.insert(scientific_name.clone(), rating) {
            log::warn!(
                "[{label}] Duplicate rating entry for '{scientific_name}' \
                 ({previous} replaced by {rating})"
            );
        }
    }

    log::info!("[{label}] Loaded {} species ratings", lookup.len());

    Ok(lookup)
}
