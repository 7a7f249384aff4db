#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Output artifact generation for external rendering collaborators.
//!
//! Turns the typed analytics results into the files the chart and map
//! renderers consume: a human-readable summary, a rating distribution CSV
//! for the stacked bar chart, and choropleth `GeoJSON` keyed by tract.

pub mod choropleth;
pub mod distribution;
pub mod summary;

use thiserror::Error;

/// Errors that can occur while writing output artifacts.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// I/O error (file create/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
