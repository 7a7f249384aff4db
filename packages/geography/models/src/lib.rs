#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Census tract attribute types.
//!
//! These types carry the non-geometric attributes of a census tract. The
//! polygon itself travels separately with the layer types in
//! `canopy_map_geography`, keeping this crate free of geometry
//! dependencies.

use serde::{Deserialize, Serialize};

/// Attributes of a census tract as provided by the tract boundary layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TractInfo {
    /// Census GEOID (state FIPS + county FIPS + tract code, e.g.
    /// "06001400100").
    pub geoid: String,
    /// Human-readable tract name, when the layer provides one.
    pub name: Option<String>,
    /// Tract land area in acres, precomputed by the layer publisher.
    pub land_area_acres: f64,
}
