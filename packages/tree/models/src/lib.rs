#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Tree inventory domain types and the water-use rating taxonomy.
//!
//! This crate defines the canonical water-use rating categories used across
//! the canopy-map system. The inventory loader normalizes source-specific
//! rating labels into this shared taxonomy.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Water-use rating for a tree species, indicating typical irrigation need.
///
/// `Unknown` is a first-class category, not a sentinel string: species with
/// no entry in the rating lookup land here so downstream display logic can
/// place them in a defined position instead of silently dropping them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum WaterUseRating {
    /// Species that need frequent irrigation
    High,
    /// Species with average irrigation need
    Moderate,
    /// Drought-tolerant species
    Low,
    /// Species that thrive with little to no irrigation
    #[strum(to_string = "Very Low", serialize = "VERY_LOW")]
    VeryLow,
    /// Species absent from the rating lookup
    Unknown,
}

/// Chart display order for rating categories.
///
/// This is a presentation choice, not a domain ordering: it fixes where each
/// rating segment lands in the stacked bar chart, with `Unknown` first so
/// unrated species are visibly accounted for.
pub const RATING_DISPLAY_ORDER: [WaterUseRating; 5] = [
    WaterUseRating::Unknown,
    WaterUseRating::High,
    WaterUseRating::Low,
    WaterUseRating::Moderate,
    WaterUseRating::VeryLow,
];

impl WaterUseRating {
    /// Position of this rating in [`RATING_DISPLAY_ORDER`].
    #[must_use]
    pub fn display_rank(self) -> usize {
        RATING_DISPLAY_ORDER
            .iter()
            .position(|r| *r == self)
            .unwrap_or(RATING_DISPLAY_ORDER.len())
    }
}

/// A single tree inventory row.
///
/// Immutable input record; the inventory is read once, transformed, and
/// discarded. Canopy width is the measured crown diameter in feet, absent
/// where the survey recorded no measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRecord {
    /// Scientific (botanical) species name, e.g. "Quercus agrifolia".
    pub scientific_name: String,
    /// Measured canopy diameter in feet, if surveyed.
    pub canopy_width_ft: Option<f64>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn parses_human_rating_labels() {
        assert_eq!(
            WaterUseRating::from_str("Moderate").unwrap(),
            WaterUseRating::Moderate
        );
        assert_eq!(
            WaterUseRating::from_str("Very Low").unwrap(),
            WaterUseRating::VeryLow
        );
        assert_eq!(
            WaterUseRating::from_str("very low").unwrap(),
            WaterUseRating::VeryLow
        );
    }

    #[test]
    fn rejects_unrecognized_rating_label() {
        assert!(WaterUseRating::from_str("Medium").is_err());
    }

    #[test]
    fn displays_multi_word_label() {
        assert_eq!(WaterUseRating::VeryLow.to_string(), "Very Low");
        assert_eq!(WaterUseRating::High.to_string(), "High");
    }

    #[test]
    fn display_order_covers_every_rating() {
        for rating in [
            WaterUseRating::High,
            WaterUseRating::Moderate,
            WaterUseRating::Low,
            WaterUseRating::VeryLow,
            WaterUseRating::Unknown,
        ] {
            assert!(rating.display_rank() < RATING_DISPLAY_ORDER.len());
        }
    }

    #[test]
    fn unknown_sorts_first_for_display() {
        assert_eq!(WaterUseRating::Unknown.display_rank(), 0);
        assert!(WaterUseRating::High.display_rank() > 0);
    }
}
