//! Corner-similarity mask
//!
//! Marks as background every pixel whose color sits close to any of the
//! four image corners. Works directly on the RGB triples; the distance
//! metric is configurable.

use crate::error::SegmentResult;
use chromata_color::{Metric, compare};
use chromata_core::{MaskGrid, PixelGrid};

/// Arguments of the corner-similarity strategy
#[derive(Debug, Clone)]
pub struct SimCornersOptions {
    /// Colors closer than this to a corner count as background
    pub max_distance: f64,
    /// Distance metric over the raw RGB triples
    pub metric: Metric,
}

impl Default for SimCornersOptions {
    fn default() -> Self {
        Self {
            max_distance: 0.1,
            metric: Metric::Euclidean,
        }
    }
}

/// Extract the corner-similarity background mask
pub fn extract(grid: &PixelGrid, options: &SimCornersOptions) -> SegmentResult<MaskGrid> {
    let corner_colors: Vec<[f64; 3]> = grid.corner_cells().map(|rgb| *rgb).to_vec();

    Ok(grid.map(|rgb| {
        corner_colors
            .iter()
            .any(|corner| compare(rgb, corner, options.metric) < options.max_distance)
    }))
}
