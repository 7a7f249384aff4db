#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Tabular input loading for the canopy-map toolchain.
//!
//! Reads the tree inventory and the species-to-rating lookup from CSV files
//! and normalizes them into the shared types from
//! [`canopy_map_tree_models`]. Loading is strict about shape (missing
//! required columns reject the batch) and lenient about individual
//! measurements (missing widths load as `None`).

pub mod inventory;
pub mod parsing;
pub mod progress;
pub mod ratings;

/// Errors that can occur while loading tabular inputs.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or deserialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the CSV header row.
    #[error("{file}: missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
        /// Input file (or reader label) the column was expected in.
        file: String,
    },
}
