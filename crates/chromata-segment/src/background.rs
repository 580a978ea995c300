//! Background mask selection policy
//!
//! No single heuristic segments backgrounds reliably, so the extraction
//! runs every requested strategy and arbitrates between them by
//! coverage. The union of all masks wins as long as it stays reasonable;
//! a union judging almost the whole image as background signals
//! disagreeing heuristics, in which case the least invasive usable
//! single mask wins, and when even the single masks are implausible the
//! extraction refuses to mark anything rather than erase foreground.

use crate::error::SegmentResult;
use crate::floodfill::{self, FloodFillOptions};
use crate::simcorners::{self, SimCornersOptions};
use chromata_core::{MaskGrid, PixelGrid};

/// A union or single mask above this coverage is considered implausible
pub const MAX_COVERAGE: f64 = 80.0;

/// A named background heuristic with its arguments
#[derive(Debug, Clone)]
pub enum MaskStrategy {
    /// Edge-based flood fill from the image corners
    FloodFill(FloodFillOptions),
    /// Similarity to the corner colors
    SimCorners(SimCornersOptions),
}

impl MaskStrategy {
    /// Strategy name for logging
    pub fn name(&self) -> &'static str {
        match self {
            MaskStrategy::FloodFill(_) => "flood_fill",
            MaskStrategy::SimCorners(_) => "sim_corners",
        }
    }

    fn extract(&self, grid: &PixelGrid) -> SegmentResult<MaskGrid> {
        match self {
            MaskStrategy::FloodFill(options) => floodfill::extract(grid, options),
            MaskStrategy::SimCorners(options) => simcorners::extract(grid, options),
        }
    }
}

/// Combine the requested strategies into one background mask
///
/// Returns the selected mask and its coverage percentage. An empty
/// strategy list yields an all-false mask and 0% coverage.
pub fn extract_mask(
    grid: &PixelGrid,
    strategies: &[MaskStrategy],
) -> SegmentResult<(MaskGrid, f64)> {
    let no_background = grid.map(|_| false);
    if strategies.is_empty() {
        return Ok((no_background, 0.0));
    }

    // run every strategy and rank by individual coverage
    let mut extracted = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let mask = strategy.extract(grid)?;
        let cover = mask.coverage_percent();
        extracted.push((strategy.name(), cover, mask));
    }
    extracted.sort_by(|a, b| b.1.total_cmp(&a.1));

    log::info!("mask coverage over total image size:");
    for (name, cover, _) in &extracted {
        log::info!("  - mask {name}: {cover}%");
    }

    // cell-wise union of all masks
    let mut union = no_background.clone();
    for (_, _, mask) in &extracted {
        union.union_assign(mask)?;
    }

    let union_cover = union.coverage_percent();
    if union_cover < MAX_COVERAGE {
        log::info!("applying all masks ({union_cover}%)");
        return Ok((union, union_cover));
    }

    // union too invasive: fall back to the strongest single mask that
    // still looks plausible
    if let Some((name, cover, mask)) = extracted
        .into_iter()
        .find(|&(_, cover, _)| cover < MAX_COVERAGE)
    {
        log::info!("applying mask {name} ({cover}%)");
        return Ok((mask, cover));
    }

    log::info!("applying no background mask (masks too invasive)");
    Ok((no_background, 0.0))
}
