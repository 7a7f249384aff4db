#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! In-memory spatial index for canopy polygons.
//!
//! Builds an R-tree over the canopy layer once, then answers per-tract
//! intersection-area queries. The R-tree prunes the candidate set by
//! bounding-box overlap; the exact polygon intersection runs only against
//! the survivors.

use geo::{Area, BooleanOps, BoundingRect, MultiPolygon};
use rstar::{AABB, RTree, RTreeObject};

/// A canopy polygon stored in the R-tree with its precomputed envelope.
struct CanopyEntry {
    envelope: AABB<[f64; 2]>,
    polygon: MultiPolygon<f64>,
}

impl RTreeObject for CanopyEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Pre-built spatial index over the canopy polygon layer.
///
/// Constructed once per batch and queried for every tract. Coordinates are
/// expected in a projected CRS with meter units, so intersection areas come
/// back in square meters.
pub struct CanopyIndex {
    canopies: RTree<CanopyEntry>,
}

impl CanopyIndex {
    /// Builds the R-tree from canopy polygons.
    #[must_use]
    pub fn build(polygons: Vec<MultiPolygon<f64>>) -> Self {
        let entries = polygons
            .into_iter()
            .map(|polygon| CanopyEntry {
                envelope: compute_envelope(&polygon),
                polygon,
            })
            .collect();

        let canopies = RTree::bulk_load(entries);
        log::info!("Built canopy index with {} polygons", canopies.size());

        Self { canopies }
    }

    /// Number of canopy polygons in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.canopies.size()
    }

    /// Whether the index contains no canopy polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canopies.size() == 0
    }

    /// Total area, in square meters, of the intersection between `area` and
    /// every canopy polygon in the index.
    ///
    /// Overlapping canopy polygons are each counted in full, so the sum can
    /// exceed the true covered area where the layer double-maps a crown.
    #[must_use]
    pub fn intersection_area_sq_m(&self, area: &MultiPolygon<f64>) -> f64 {
        let Some(rect) = area.bounding_rect() else {
            return 0.0;
        };
        let query_env =
            AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]);

        self.canopies
            .locate_in_envelope_intersecting(&query_env)
            .map(|entry| area.intersection(&entry.polygon).unsigned_area())
            .sum()
    }
}

/// Compute the bounding box envelope for a [`MultiPolygon`].
fn compute_envelope(mp: &MultiPolygon<f64>) -> AABB<[f64; 2]> {
    mp.bounding_rect().map_or_else(
        || AABB::from_point([0.0, 0.0]),
        |rect| AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
    )
}

#[cfg(test)]
mod tests {
    use geo::{Rect, coord};

    use super::*;

    fn square(min_x: f64, min_y: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![
            Rect::new(
                coord! { x: min_x, y: min_y },
                coord! { x: min_x + size, y: min_y + size },
            )
            .to_polygon(),
        ])
    }

    #[test]
    fn fully_contained_canopy_contributes_its_whole_area() {
        let index = CanopyIndex::build(vec![square(10.0, 10.0, 10.0)]);
        let tract = square(0.0, 0.0, 100.0);
        assert!((index.intersection_area_sq_m(&tract) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn partial_overlap_contributes_only_the_overlap() {
        // Canopy square half inside the tract.
        let index = CanopyIndex::build(vec![square(-5.0, 0.0, 10.0)]);
        let tract = square(0.0, 0.0, 100.0);
        assert!((index.intersection_area_sq_m(&tract) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_canopy_contributes_zero() {
        let index = CanopyIndex::build(vec![square(1000.0, 1000.0, 10.0)]);
        let tract = square(0.0, 0.0, 100.0);
        assert!(index.intersection_area_sq_m(&tract).abs() < 1e-9);
    }

    #[test]
    fn splitting_a_canopy_polygon_preserves_total_area() {
        let whole = CanopyIndex::build(vec![square(0.0, 0.0, 10.0)]);
        let halves = CanopyIndex::build(vec![
            MultiPolygon(vec![
                Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 5.0, y: 10.0 }).to_polygon(),
            ]),
            MultiPolygon(vec![
                Rect::new(coord! { x: 5.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 }).to_polygon(),
            ]),
        ]);
        let tract = square(0.0, 0.0, 100.0);

        let area_whole = whole.intersection_area_sq_m(&tract);
        let area_halves = halves.intersection_area_sq_m(&tract);
        assert!((area_whole - area_halves).abs() < 1e-9);
    }

    #[test]
    fn empty_index_reports_empty() {
        let index = CanopyIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        let tract = square(0.0, 0.0, 100.0);
        assert!(index.intersection_area_sq_m(&tract).abs() < f64::EPSILON);
    }
}
