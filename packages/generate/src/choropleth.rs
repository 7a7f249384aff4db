//! Choropleth `GeoJSON` for canopy cover rendering.
//!
//! Joins the per-tract cover results back to the tract geometries and emits
//! a `FeatureCollection` the map renderer colors by `canopyCoverPercent`.
//! Every tract in the layer gets a feature; tracts where coverage is
//! undefined carry a `null` percentage so the renderer can style them as
//! "no data" rather than omitting them.

use std::collections::BTreeMap;
use std::path::Path;

use canopy_map_analytics_models::TractCanopyCover;
use canopy_map_geography::layers::{BoundaryLayer, TractFeature};
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, JsonValue};

use crate::GenerateError;

/// Builds the choropleth `FeatureCollection` from tract geometries and
/// cover results, joined by GEOID.
#[must_use]
pub fn cover_feature_collection(
    tracts: &[TractFeature],
    results: &[TractCanopyCover],
) -> FeatureCollection {
    let by_geoid: BTreeMap<&str, &TractCanopyCover> =
        results.iter().map(|r| (r.geoid.as_str(), r)).collect();

    let features = tracts
        .iter()
        .map(|tract| cover_feature(tract, by_geoid.get(tract.info.geoid.as_str()).copied()))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn cover_feature(tract: &TractFeature, result: Option<&TractCanopyCover>) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(
        "geoid".to_string(),
        JsonValue::from(tract.info.geoid.clone()),
    );
    if let Some(name) = &tract.info.name {
        properties.insert("name".to_string(), JsonValue::from(name.clone()));
    }

    let percent = result.and_then(|r| r.canopy_cover_percent);
    if let Some(result) = result {
        properties.insert(
            "canopyAreaAcres".to_string(),
            JsonValue::from(result.canopy_area_acres),
        );
        properties.insert(
            "landAreaAcres".to_string(),
            JsonValue::from(result.land_area_acres),
        );
    }
    properties.insert(
        "canopyCoverPercent".to_string(),
        percent.map_or(JsonValue::Null, JsonValue::from),
    );
    properties.insert(
        "popup".to_string(),
        JsonValue::from(popup_text(&tract.info.geoid, percent)),
    );

    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(
            &tract.polygon,
        ))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Popup text shown when a tract is clicked: the tract id and the coverage
/// percentage rounded to a whole percent.
fn popup_text(geoid: &str, percent: Option<f64>) -> String {
    percent.map_or_else(
        || format!("Tract {geoid}: no data"),
        |p| format!("Tract {geoid}: {p:.0}%"),
    )
}

/// Writes the choropleth `GeoJSON` file.
///
/// # Errors
///
/// Returns [`GenerateError`] if the file cannot be written.
pub fn write_cover_geojson(
    path: &Path,
    tracts: &[TractFeature],
    results: &[TractCanopyCover],
) -> Result<(), GenerateError> {
    let collection = cover_feature_collection(tracts, results);
    std::fs::write(path, GeoJson::from(collection).to_string())?;
    log::info!(
        "Canopy cover choropleth written: {} ({} tracts)",
        path.display(),
        tracts.len()
    );
    Ok(())
}

/// Builds a plain `FeatureCollection` from the city boundary layer.
#[must_use]
pub fn boundary_feature_collection(layer: &BoundaryLayer) -> FeatureCollection {
    let features = layer
        .polygons
        .iter()
        .map(|polygon| Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(polygon))),
            id: None,
            properties: None,
            foreign_members: None,
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Writes the city boundary pass-through `GeoJSON` file.
///
/// # Errors
///
/// Returns [`GenerateError`] if the file cannot be written.
pub fn write_boundary_geojson(path: &Path, layer: &BoundaryLayer) -> Result<(), GenerateError> {
    let collection = boundary_feature_collection(layer);
    std::fs::write(path, GeoJson::from(collection).to_string())?;
    log::info!("City boundary written: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use canopy_map_geography_models::TractInfo;
    use geo::{MultiPolygon, Rect, coord};

    use super::*;

    fn tract(geoid: &str, land_area_acres: f64) -> TractFeature {
        TractFeature {
            info: TractInfo {
                geoid: geoid.to_string(),
                name: Some(format!("Census Tract {geoid}")),
                land_area_acres,
            },
            polygon: MultiPolygon(vec![
                Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 }).to_polygon(),
            ]),
        }
    }

    fn cover(geoid: &str, percent: Option<f64>) -> TractCanopyCover {
        TractCanopyCover {
            geoid: geoid.to_string(),
            canopy_area_acres: 25.0,
            land_area_acres: 100.0,
            canopy_cover_percent: percent,
        }
    }

    #[test]
    fn joins_results_to_tracts_by_geoid() {
        let tracts = vec![tract("06001400100", 100.0)];
        let results = vec![cover("06001400100", Some(25.0))];

        let collection = cover_feature_collection(&tracts, &results);
        assert_eq!(collection.features.len(), 1);

        let props = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(props["geoid"], "06001400100");
        assert_eq!(props["canopyCoverPercent"], 25.0);
        assert_eq!(props["popup"], "Tract 06001400100: 25%");
    }

    #[test]
    fn undefined_coverage_serializes_as_null() {
        let tracts = vec![tract("06001400200", 0.0)];
        let results = vec![cover("06001400200", None)];

        let collection = cover_feature_collection(&tracts, &results);
        let props = collection.features[0].properties.as_ref().unwrap();
        assert!(props["canopyCoverPercent"].is_null());
        assert_eq!(props["popup"], "Tract 06001400200: no data");
    }

    #[test]
    fn every_tract_gets_a_feature() {
        let tracts = vec![tract("a", 10.0), tract("b", 20.0)];
        let results = vec![cover("a", Some(5.0))];

        let collection = cover_feature_collection(&tracts, &results);
        assert_eq!(collection.features.len(), 2);

        let orphan = collection.features[1].properties.as_ref().unwrap();
        assert!(orphan["canopyCoverPercent"].is_null());
    }

    #[test]
    fn popup_rounds_to_whole_percent() {
        assert_eq!(popup_text("x", Some(24.6)), "Tract x: 25%");
        assert_eq!(popup_text("x", Some(0.0)), "Tract x: 0%");
    }

    #[test]
    fn collection_serializes_with_feature_geometry() {
        let tracts = vec![tract("06001400100", 100.0)];
        let results = vec![cover("06001400100", Some(25.0))];

        let geojson = GeoJson::from(cover_feature_collection(&tracts, &results)).to_string();
        assert!(geojson.contains("\"FeatureCollection\""));
        assert!(geojson.contains("\"MultiPolygon\""));
        assert!(geojson.contains("canopyCoverPercent"));
    }
}
