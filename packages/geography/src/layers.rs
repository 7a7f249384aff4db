//! `GeoJSON` layer loading for the canopy, census tract, and city boundary
//! layers.
//!
//! Modern `GeoJSON` (RFC 7946) dropped the `crs` member, but municipal open
//! data portals still emit it for projected layers. Each loader captures the
//! declaration when present so [`ensure_shared_crs`] can reject mixed-CRS
//! inputs instead of silently intersecting incompatible coordinates.

use std::path::Path;

use canopy_map_geography_models::TractInfo;
use geo::MultiPolygon;
use geojson::{Feature, FeatureCollection, GeoJson};

use crate::GeoError;

/// Property aliases accepted for the tract GEOID.
const GEOID_PROPS: &[&str] = &["geoid", "GEOID"];

/// Property aliases accepted for the tract land area (acres).
const LAND_AREA_PROPS: &[&str] = &["land_area_acres", "ALAND_ACRES"];

/// Property aliases accepted for the tract display name.
const NAME_PROPS: &[&str] = &["name", "NAME", "NAMELSAD"];

/// Tree canopy polygons in the shared projected CRS.
#[derive(Debug)]
pub struct CanopyLayer {
    /// One entry per usable canopy feature.
    pub polygons: Vec<MultiPolygon<f64>>,
    /// CRS name the layer declared, if any.
    pub crs: Option<String>,
}

/// A census tract with its attributes and boundary polygon.
#[derive(Debug)]
pub struct TractFeature {
    /// Non-geometric tract attributes.
    pub info: TractInfo,
    /// Tract boundary in the shared projected CRS.
    pub polygon: MultiPolygon<f64>,
}

/// The census tract layer.
#[derive(Debug)]
pub struct TractLayer {
    /// All tracts in the layer, in file order.
    pub tracts: Vec<TractFeature>,
    /// CRS name the layer declared, if any.
    pub crs: Option<String>,
}

/// The city boundary layer, passed through to the map output unchanged.
pub struct BoundaryLayer {
    /// Boundary polygons (usually a single multipolygon).
    pub polygons: Vec<MultiPolygon<f64>>,
    /// CRS name the layer declared, if any.
    pub crs: Option<String>,
}

/// Loads the canopy polygon layer from a `GeoJSON` file.
///
/// # Errors
///
/// Returns [`GeoError`] if the file cannot be read or parsed.
pub fn load_canopy_layer(path: &Path) -> Result<CanopyLayer, GeoError> {
    let raw = std::fs::read_to_string(path)?;
    parse_canopy_layer(&raw, &path.display().to_string())
}

/// Parses the canopy polygon layer from a `GeoJSON` string.
///
/// Features with non-polygon geometry are skipped with a warning; a canopy
/// layer exported from raster classification can carry stray points.
///
/// # Errors
///
/// Returns [`GeoError`] if the input is not a `FeatureCollection`.
pub fn parse_canopy_layer(raw: &str, label: &str) -> Result<CanopyLayer, GeoError> {
    let collection = read_collection(raw, label)?;
    let crs = declared_crs(&collection);

    let mut polygons = Vec::new();

    for (idx, feature) in collection.features.iter().enumerate() {
        if let Some(polygon) = feature_multipolygon(feature) {
            polygons.push(polygon);
        } else {
            log::warn!("[{label}] Skipping canopy feature {idx}: not a polygon geometry");
        }
    }

    log::info!("[{label}] Loaded {} canopy polygons", polygons.len());

    Ok(CanopyLayer { polygons, crs })
}

/// Loads the census tract layer from a `GeoJSON` file.
///
/// # Errors
///
/// Returns [`GeoError`] if the file cannot be read or parsed, or if any
/// tract is missing its GEOID, land area, or polygon geometry.
pub fn load_tract_layer(path: &Path) -> Result<TractLayer, GeoError> {
    let raw = std::fs::read_to_string(path)?;
    parse_tract_layer(&raw, &path.display().to_string())
}

/// Parses the census tract layer from a `GeoJSON` string.
///
/// The tract layer is the authoritative aggregation frame, so every feature
/// must carry a GEOID, a land area, and polygon geometry; anything less
/// rejects the batch rather than silently shrinking the output.
///
/// # Errors
///
/// Returns [`GeoError`] on a malformed collection or any incomplete tract
/// feature.
pub fn parse_tract_layer(raw: &str, label: &str) -> Result<TractLayer, GeoError> {
    let collection = read_collection(raw, label)?;
    let crs = declared_crs(&collection);

    let mut tracts = Vec::new();

    for (idx, feature) in collection.features.iter().enumerate() {
        let geoid =
            prop_string(feature, GEOID_PROPS).ok_or_else(|| GeoError::MissingProperty {
                file: label.to_string(),
                property: "geoid".to_string(),
                feature: idx,
            })?;
        let land_area_acres =
            prop_f64(feature, LAND_AREA_PROPS).ok_or_else(|| GeoError::MissingProperty {
                file: label.to_string(),
                property: "land_area_acres".to_string(),
                feature: idx,
            })?;
        let polygon = feature_multipolygon(feature).ok_or_else(|| GeoError::InvalidGeometry {
            file: label.to_string(),
            feature: idx,
            message: format!("tract {geoid} must have Polygon or MultiPolygon geometry"),
        })?;

        tracts.push(TractFeature {
            info: TractInfo {
                geoid,
                name: prop_string(feature, NAME_PROPS),
                land_area_acres,
            },
            polygon,
        });
    }

    log::info!("[{label}] Loaded {} census tracts", tracts.len());

    Ok(TractLayer { tracts, crs })
}

/// Loads the city boundary layer from a `GeoJSON` file.
///
/// # Errors
///
/// Returns [`GeoError`] if the file cannot be read or parsed.
pub fn load_boundary_layer(path: &Path) -> Result<BoundaryLayer, GeoError> {
    let raw = std::fs::read_to_string(path)?;
    parse_boundary_layer(&raw, &path.display().to_string())
}

/// Parses the city boundary layer from a `GeoJSON` string.
///
/// # Errors
///
/// Returns [`GeoError`] if the input is not a `FeatureCollection`.
pub fn parse_boundary_layer(raw: &str, label: &str) -> Result<BoundaryLayer, GeoError> {
    let collection = read_collection(raw, label)?;
    let crs = declared_crs(&collection);

    let mut polygons = Vec::new();
    for (idx, feature) in collection.features.iter().enumerate() {
        if let Some(polygon) = feature_multipolygon(feature) {
            polygons.push(polygon);
        } else {
            log::warn!("[{label}] Skipping boundary feature {idx}: not a polygon geometry");
        }
    }

    if polygons.is_empty() {
        log::warn!("[{label}] Boundary layer contains no polygon features");
    }

    Ok(BoundaryLayer { polygons, crs })
}

/// Fails the batch if any two layers declare different CRS names.
///
/// Layers without a declaration are assumed to be in the shared projected
/// CRS per the input contract, so only explicit disagreements are fatal.
///
/// # Errors
///
/// Returns [`GeoError::CrsMismatch`] naming the first conflicting pair.
pub fn ensure_shared_crs(layers: &[(&str, Option<&str>)]) -> Result<(), GeoError> {
    let mut declared: Option<(&str, &str)> = None;

    for (label, crs) in layers.iter().copied() {
        let Some(crs) = crs else { continue };
        match declared {
            None => declared = Some((label, crs)),
            Some((first_label, first_crs)) if first_crs != crs => {
                return Err(GeoError::CrsMismatch {
                    layer_a: first_label.to_string(),
                    crs_a: first_crs.to_string(),
                    layer_b: label.to_string(),
                    crs_b: crs.to_string(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Parses a `GeoJSON` string and requires a `FeatureCollection`.
fn read_collection(raw: &str, label: &str) -> Result<FeatureCollection, GeoError> {
    let geojson: GeoJson = raw.parse()?;
    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(_) | GeoJson::Geometry(_) => Err(GeoError::NotAFeatureCollection {
            file: label.to_string(),
        }),
    }
}

/// Extracts the legacy `crs.properties.name` declaration, if present.
fn declared_crs(collection: &FeatureCollection) -> Option<String> {
    collection
        .foreign_members
        .as_ref()?
        .get("crs")?
        .get("properties")?
        .get("name")?
        .as_str()
        .map(ToString::to_string)
}

/// Converts a feature's geometry into a [`MultiPolygon`].
/// Handles both `Polygon` and `MultiPolygon` geometry types.
fn feature_multipolygon(feature: &Feature) -> Option<MultiPolygon<f64>> {
    let geometry = feature.geometry.as_ref()?;
    let geo_geometry: geo::Geometry<f64> = geometry.clone().try_into().ok()?;
    match geo_geometry {
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        geo::Geometry::Polygon(p) => Some(MultiPolygon(vec![p])),
        _ => None,
    }
}

/// Looks up a string-valued property under any of the accepted key aliases.
/// Numeric values are stringified (GEOIDs often arrive as JSON numbers).
fn prop_string(feature: &Feature, keys: &[&str]) -> Option<String> {
    let props = feature.properties.as_ref()?;
    for key in keys {
        match props.get(*key) {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => {
                return Some(s.trim().to_string());
            }
            Some(serde_json::Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// Looks up a numeric property under any of the accepted key aliases.
/// Numeric strings are parsed (spreadsheet exports quote numbers).
fn prop_f64(feature: &Feature, keys: &[&str]) -> Option<f64> {
    let props = feature.properties.as_ref()?;
    for key in keys {
        match props.get(*key) {
            Some(serde_json::Value::Number(n)) => return n.as_f64(),
            Some(serde_json::Value::String(s)) => {
                if let Ok(value) = s.trim().parse() {
                    return Some(value);
                }
            }
            _ => {}
        }
    }
    None
}
