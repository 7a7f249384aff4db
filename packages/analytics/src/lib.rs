#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canopy analytics computations.
//!
//! Each public function is a pure, one-shot reduction over in-memory
//! tables: it takes its inputs as explicit arguments and returns a typed
//! result for the artifact writers, with no shared state between calls.

pub mod area;
pub mod cover;
pub mod distribution;
pub mod units;
