//! Edge-based flood fill mask
//!
//! Marks background pixels by segmenting a grayscale edge-intensity
//! image: everything connected to the image corners without crossing an
//! edge line is background. The edge image itself comes from the caller
//! (negation, grayscale quantization, noise reduction and edge detection
//! are pixel-buffer operations outside this crate); cells hold the
//! per-pixel lightness in [0, 1], bright where an edge runs.

use crate::error::{SegmentError, SegmentResult};
use crate::label::{Connectivity, label_regions};
use crate::morph::{dilate, erode};
use chromata_core::{Grid, MaskGrid, PixelGrid};

/// Arguments of the flood fill strategy
#[derive(Debug, Clone)]
pub struct FloodFillOptions {
    /// Edge-lightness image, same shape as the pixel grid
    pub edges: Grid<f64>,
    /// Pixels at or below this lightness count as non-edge
    pub gray_threshold: f64,
}

impl FloodFillOptions {
    /// Default threshold over a caller-supplied edge image
    pub fn new(edges: Grid<f64>) -> Self {
        Self {
            edges,
            gray_threshold: 0.05,
        }
    }
}

/// Extract the flood fill background mask
///
/// Fails when the edge image shape differs from the pixel grid.
pub fn extract(grid: &PixelGrid, options: &FloodFillOptions) -> SegmentResult<MaskGrid> {
    if !grid.same_shape(&options.edges) {
        return Err(SegmentError::Core(chromata_core::Error::DimensionMismatch {
            expected: grid.shape(),
            actual: options.edges.shape(),
        }));
    }

    // binary threshold: non-edge candidates true, edges false
    let mask = options.edges.map(|&v| v <= options.gray_threshold);

    // thicken and reconnect broken edge lines before segmenting
    let mask = erode(&dilate(&mask, false, 3), false, 1);

    // image borders always count as background candidates
    let mask = with_true_border(mask);

    // everything sharing a region with a corner is background
    let labels = label_regions(&mask, Connectivity::Four);
    let corners = labels.corner_cells();
    let background = labels.map(|label| corners.contains(&label));

    // drop residual thin inclusions
    Ok(erode(&dilate(&background, true, 1), true, 1))
}

fn with_true_border(mut mask: MaskGrid) -> MaskGrid {
    let (rows, cols) = mask.shape();
    for j in 0..cols {
        mask[(0, j)] = true;
        mask[(rows - 1, j)] = true;
    }
    for i in 0..rows {
        mask[(i, 0)] = true;
        mask[(i, cols - 1)] = true;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromata_test::{uniform_grid, uniform_lightness};

    /// Edge image with a square ring of bright edge cells
    fn ring_edges(side: usize, lo: usize, hi: usize) -> Grid<f64> {
        let mut edges = uniform_lightness(side, side, 0.0);
        for k in lo..=hi {
            edges[(lo, k)] = 1.0;
            edges[(hi, k)] = 1.0;
            edges[(k, lo)] = 1.0;
            edges[(k, hi)] = 1.0;
        }
        edges
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let grid = uniform_grid(4, 4, [0.5; 3]);
        let options = FloodFillOptions::new(uniform_lightness(4, 5, 0.0));
        assert!(extract(&grid, &options).is_err());
    }

    #[test]
    fn test_featureless_image_all_background() {
        let grid = uniform_grid(10, 10, [0.5; 3]);
        let options = FloodFillOptions::new(uniform_lightness(10, 10, 0.0));
        let mask = extract(&grid, &options).unwrap();
        assert_eq!(mask.count(true), 100);
    }

    #[test]
    fn test_ring_seals_interior() {
        // a closed edge ring separates the interior from the corners:
        // outside becomes background, the enclosed center does not
        let grid = uniform_grid(40, 40, [0.5; 3]);
        let options = FloodFillOptions::new(ring_edges(40, 10, 30));
        let mask = extract(&grid, &options).unwrap();

        assert!(mask[(1, 1)]);
        assert!(mask[(1, 38)]);
        assert!(mask[(38, 38)]);
        assert!(!mask[(20, 20)]);
        let coverage = mask.coverage_percent();
        assert!(coverage > 0.0 && coverage < 100.0);
    }

    #[test]
    fn test_threshold_splits_edges() {
        // a lightness just above the threshold is an edge, one at the
        // threshold is not
        let grid = uniform_grid(20, 20, [0.5; 3]);

        let mut edges = uniform_lightness(20, 20, 0.051);
        let options = FloodFillOptions::new(edges.clone());
        let mask = extract(&grid, &options).unwrap();
        // everything is edge except the forced border; after the final
        // erosion nothing sticks out as background
        assert!(mask.coverage_percent() < 100.0);

        edges = uniform_lightness(20, 20, 0.05);
        let options = FloodFillOptions::new(edges);
        let mask = extract(&grid, &options).unwrap();
        assert_eq!(mask.count(true), 400);
    }
}
