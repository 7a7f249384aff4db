//! Water-use rating distribution across the inventory.

use std::collections::{BTreeMap, BTreeSet};

use canopy_map_analytics_models::RatingShare;
use canopy_map_tree_models::{TreeRecord, WaterUseRating};

/// Joins each tree to the species rating lookup and computes, per
/// (species, rating) group, its percentage of the total tree count.
///
/// The join is a left join on normalized scientific name: species with no
/// lookup entry land in [`WaterUseRating::Unknown`] rather than being
/// dropped. Rows come back sorted by rating display order, then species
/// name, ready for stacked-bar rendering. Percentages across all rows sum
/// to 100 (up to float tolerance).
#[must_use]
pub fn rating_distribution(
    records: &[TreeRecord],
    ratings: &BTreeMap<String, WaterUseRating>,
) -> Vec<RatingShare> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut groups: BTreeMap<(String, WaterUseRating), u64> = BTreeMap::new();
    let mut unmatched: BTreeSet<&str> = BTreeSet::new();

    for record in records {
        let rating = ratings
            .get(&record.scientific_name)
            .copied()
            .unwrap_or_else(|| {
                unmatched.insert(record.scientific_name.as_str());
                WaterUseRating::Unknown
            });
        *groups
            .entry((record.scientific_name.clone(), rating))
            .or_default() += 1;
    }

    if !unmatched.is_empty() {
        log::warn!(
            "{} species have no water use rating entry; labeled Unknown",
            unmatched.len()
        );
    }

    #[allow(clippy::cast_precision_loss)]
    let total = records.len() as f64;

    let mut shares: Vec<RatingShare> = groups
        .into_iter()
        .map(|((scientific_name, water_use_rating), tree_count)| {
            #[allow(clippy::cast_precision_loss)]
            let percent = tree_count as f64 / total * 100.0;
            RatingShare {
                scientific_name,
                water_use_rating,
                tree_count,
                percent,
            }
        })
        .collect();

    shares.sort_by(|a, b| {
        a.water_use_rating
            .display_rank()
            .cmp(&b.water_use_rating.display_rank())
            .then_with(|| a.scientific_name.cmp(&b.scientific_name))
    });

    shares
}
