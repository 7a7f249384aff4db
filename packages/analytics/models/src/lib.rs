#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canopy analytics result types.
//!
//! Typed result rows produced by `canopy_map_analytics` and consumed by the
//! artifact writers (summary text, distribution CSV, choropleth `GeoJSON`).

use canopy_map_tree_models::WaterUseRating;
use serde::{Deserialize, Serialize};

/// Total canopy area across the inventory, with measurement bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanopyAreaSummary {
    /// Number of tree records in the inventory.
    pub tree_count: u64,
    /// Records with a usable (non-negative) canopy width.
    pub measured_count: u64,
    /// Records with no canopy width measurement (zero contribution).
    pub missing_width: u64,
    /// Records with a negative canopy width (zero contribution).
    pub invalid_width: u64,
    /// Total canopy area in square feet, treating each canopy as a circle
    /// with diameter equal to the measured width.
    pub total_sq_ft: f64,
}

/// Share of the total tree count held by one (species, rating) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingShare {
    /// Scientific species name.
    pub scientific_name: String,
    /// Water-use rating joined from the species lookup; `Unknown` where the
    /// species has no lookup entry.
    pub water_use_rating: WaterUseRating,
    /// Trees in this group.
    pub tree_count: u64,
    /// Percentage of the total tree count (all shares sum to 100).
    pub percent: f64,
}

/// Canopy cover result for a single census tract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TractCanopyCover {
    /// Census tract GEOID.
    pub geoid: String,
    /// Summed canopy intersection area in acres.
    pub canopy_area_acres: f64,
    /// Tract land area in acres, as provided by the tract layer.
    pub land_area_acres: f64,
    /// Coverage percentage (100 × canopy / land area). `None` where the
    /// tract has no positive land area; values above 100 are reported
    /// as-is.
    pub canopy_cover_percent: Option<f64>,
}
