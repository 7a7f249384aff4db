#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! CLI tool for generating canopy statistics artifacts.
//!
//! Loads the tree inventory, species rating lookup, and spatial layers,
//! runs the canopy computations, and writes the summary, bar-chart CSV,
//! and choropleth `GeoJSON` artifacts for the frontend renderers.

use std::path::PathBuf;

use canopy_map_analytics::area::total_canopy_area;
use canopy_map_analytics::cover::canopy_cover_by_tract;
use canopy_map_analytics::distribution::rating_distribution;
use canopy_map_cli_utils::{IndicatifProgress, MultiProgress};
use canopy_map_generate::{choropleth, distribution, summary};
use canopy_map_geography::layers;
use canopy_map_source::{inventory, ratings};
use canopy_map_spatial::CanopyIndex;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "canopy_map_generate", about = "Canopy statistics artifact generation tool")]
struct Cli {
    /// Tree inventory CSV
    #[arg(long, default_value = "data/tree_inventory.csv")]
    inventory: PathBuf,

    /// Species water-use rating lookup CSV
    #[arg(long, default_value = "data/species_ratings.csv")]
    ratings: PathBuf,

    /// Canopy polygon layer (`GeoJSON`)
    #[arg(long, default_value = "data/canopy.geojson")]
    canopy: PathBuf,

    /// Census tract polygon layer (`GeoJSON`)
    #[arg(long, default_value = "data/census_tracts.geojson")]
    tracts: PathBuf,

    /// City boundary layer (`GeoJSON`), passed through for the map underlay
    #[arg(long)]
    boundary: Option<PathBuf>,

    /// Directory for generated artifacts
    #[arg(long, default_value = "data/generated")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total canopy area summary
    Summary,
    /// Water-use rating distribution CSV
    Distribution,
    /// Per-tract canopy cover `GeoJSON`
    Cover,
    /// Generate all artifacts
    All,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = canopy_map_cli_utils::init_logger();
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.output_dir)?;

    match cli.command {
        Commands::Summary => generate_summary(&cli)?,
        Commands::Distribution => generate_distribution(&cli)?,
        Commands::Cover => generate_cover(&cli, &multi)?,
        Commands::All => {
            generate_summary(&cli)?;
            generate_distribution(&cli)?;
            generate_cover(&cli, &multi)?;
        }
    }

    Ok(())
}

/// Computes the total canopy area and writes/prints the summary.
fn generate_summary(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let records = inventory::load_tree_inventory(&cli.inventory)?;
    let area_summary = total_canopy_area(&records);

    print!("{}", summary::summary_text(&area_summary));
    summary::write_summary(&cli.output_dir.join("canopy_summary.txt"), &area_summary)?;

    Ok(())
}

/// Joins the inventory to the rating lookup and writes the bar-chart CSV.
fn generate_distribution(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let records = inventory::load_tree_inventory(&cli.inventory)?;
    let rating_lookup = ratings::load_species_ratings(&cli.ratings)?;

    let shares = rating_distribution(&records, &rating_lookup);
    distribution::write_distribution_csv(
        &cli.output_dir.join("rating_distribution.csv"),
        &shares,
    )?;

    Ok(())
}

/// Intersects canopy with tracts and writes the choropleth `GeoJSON`.
fn generate_cover(cli: &Cli, multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    let tract_layer = layers::load_tract_layer(&cli.tracts)?;
    let canopy_layer = layers::load_canopy_layer(&cli.canopy)?;
    let boundary_layer = match &cli.boundary {
        Some(path) => Some(layers::load_boundary_layer(path)?),
        None => None,
    };

    let mut layer_crs = vec![
        ("tracts", tract_layer.crs.as_deref()),
        ("canopy", canopy_layer.crs.as_deref()),
    ];
    if let Some(boundary) = &boundary_layer {
        layer_crs.push(("boundary", boundary.crs.as_deref()));
    }
    layers::ensure_shared_crs(&layer_crs)?;

    let index = CanopyIndex::build(canopy_layer.polygons);

    let progress = IndicatifProgress::records_bar(multi, "Intersecting canopy with tracts");
    let results = canopy_cover_by_tract(&tract_layer.tracts, &index, &progress);

    choropleth::write_cover_geojson(
        &cli.output_dir.join("canopy_cover.geojson"),
        &tract_layer.tracts,
        &results,
    )?;

    if let Some(boundary) = &boundary_layer {
        choropleth::write_boundary_geojson(
            &cli.output_dir.join("city_boundary.geojson"),
            boundary,
        )?;
    }

    Ok(())
}
