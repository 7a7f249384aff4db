//! Per-tract canopy cover from spatial intersection.

use std::sync::Arc;

use canopy_map_analytics_models::TractCanopyCover;
use canopy_map_geography::layers::TractFeature;
use canopy_map_source::progress::ProgressCallback;
use canopy_map_spatial::CanopyIndex;

use crate::units::sq_m_to_acres;

/// Computes canopy cover for every tract in the tract layer.
///
/// Iteration is over tracts, so the output has left-join semantics by
/// construction: a tract with no intersecting canopy still appears, with 0
/// acres and 0% cover, and the choropleth renders it as zero rather than
/// "no data". Coverage above 100% (overlapping canopy polygons) is
/// reported as-is with a warning; tracts without a positive land area get
/// `None` instead of a division.
#[must_use]
pub fn canopy_cover_by_tract(
    tracts: &[TractFeature],
    canopy: &CanopyIndex,
    progress: &Arc<dyn ProgressCallback>,
) -> Vec<TractCanopyCover> {
    progress.set_total(tracts.len() as u64);

    let mut results = Vec::with_capacity(tracts.len());

    for tract in tracts {
        let canopy_area_acres = sq_m_to_acres(canopy.intersection_area_sq_m(&tract.polygon));
        let land_area_acres = tract.info.land_area_acres;

        let canopy_cover_percent = if land_area_acres > 0.0 {
            let percent = 100.0 * canopy_area_acres / land_area_acres;
            if percent > 100.0 {
                log::warn!(
                    "Tract {} canopy cover {percent:.1}% exceeds 100% \
                     (overlapping canopy polygons)",
                    tract.info.geoid
                );
            }
            Some(percent)
        } else {
            log::warn!(
                "Tract {} has no positive land area; coverage undefined",
                tract.info.geoid
            );
            None
        };

        results.push(TractCanopyCover {
            geoid: tract.info.geoid.clone(),
            canopy_area_acres,
            land_area_acres,
            canopy_cover_percent,
        });
        progress.inc(1);
    }

    progress.finish(format!("Computed canopy cover for {} tracts", tracts.len()));

    results
}
