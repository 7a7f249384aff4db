#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spatial layer loading and coordinate system consistency checks.
//!
//! Loads the canopy polygon, census tract, and city boundary layers from
//! `GeoJSON` files. All layers are expected in one shared projected CRS
//! with meter units; layers that declare conflicting CRS names reject the
//! batch before any geometry work happens.

pub mod layers;

use thiserror::Error;

/// Errors that can occur while loading spatial layers.
#[derive(Debug, Error)]
pub enum GeoError {
    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `GeoJSON` parsing failed.
    #[error("GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),

    /// The file parsed as `GeoJSON` but is not a `FeatureCollection`.
    #[error("{file}: expected a GeoJSON FeatureCollection")]
    NotAFeatureCollection {
        /// Input file (or parse label).
        file: String,
    },

    /// A feature is missing a required property.
    #[error("{file}: feature {feature} is missing required property '{property}'")]
    MissingProperty {
        /// Input file (or parse label).
        file: String,
        /// Name of the missing property.
        property: String,
        /// Zero-based index of the offending feature.
        feature: usize,
    },

    /// A feature carries a geometry the layer cannot use.
    #[error("{file}: feature {feature} has invalid geometry: {message}")]
    InvalidGeometry {
        /// Input file (or parse label).
        file: String,
        /// Zero-based index of the offending feature.
        feature: usize,
        /// Description of what was expected.
        message: String,
    },

    /// Two layers declare different coordinate reference systems.
    #[error("CRS mismatch: {layer_a} declares '{crs_a}' but {layer_b} declares '{crs_b}'")]
    CrsMismatch {
        /// First layer label.
        layer_a: String,
        /// CRS declared by the first layer.
        crs_a: String,
        /// Second layer label.
        layer_b: String,
        /// CRS declared by the second layer.
        crs_b: String,
    },
}
