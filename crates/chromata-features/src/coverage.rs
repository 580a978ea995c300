//! Color coverage by nearest cluster
//!
//! Classifies every pixel onto its nearest palette cluster center and
//! tallies per-label coverage percentages. This is the manual,
//! classifier-free way of naming the colors of an image; the winning
//! cluster per pixel is kept so callers can recolor or visualize the
//! assignment.

use crate::error::{FeatureError, FeatureResult};
use chromata_color::{Metric, Palette, PaletteSize, Space, cluster_palette, compare, convert_slice, rgb};
use chromata_core::PixelGrid;

/// Per-label coverage tallies of one image
#[derive(Debug)]
pub struct CoverageHistogram {
    palette: &'static Palette,
    total: usize,
    counts: Vec<usize>,
    assignments: Vec<usize>,
}

/// Classify every pixel onto its nearest cluster center
///
/// Pixels and centers are both converted to `space` before measuring;
/// ties keep the earlier palette entry.
pub fn coverage_histogram(
    grid: &PixelGrid,
    clusters: PaletteSize,
    space: Space,
    metric: Metric,
) -> FeatureResult<CoverageHistogram> {
    if !space.is_numeric() {
        return Err(FeatureError::InvalidParameters(format!(
            "{space} yields no numeric components to classify"
        )));
    }

    let palette = cluster_palette(clusters);
    let centers_rgb = palette.rgb_colors()?;
    let centers = convert_slice(&centers_rgb, space)?;

    let mut counts = vec![0usize; palette.len()];
    let mut assignments = Vec::with_capacity(grid.len());

    for value in grid.iter() {
        let components = rgb::components(*value, space)?;

        let mut best = 0usize;
        let mut best_score = f64::MAX;
        for (idx, center) in centers.iter().enumerate() {
            let d = compare(&components, center, metric);
            if d < best_score {
                best_score = d;
                best = idx;
            }
        }

        counts[best] += 1;
        assignments.push(best);
    }

    Ok(CoverageHistogram {
        palette,
        total: grid.len(),
        counts,
        assignments,
    })
}

impl CoverageHistogram {
    /// Number of classified pixels
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(label, percent)` pairs sorted by descending coverage
    ///
    /// Percentages are rounded to 2 decimals and sum to 100 within
    /// rounding error.
    pub fn percentages(&self) -> Vec<(&'static str, f64)> {
        let mut out: Vec<_> = self
            .palette
            .labels()
            .into_iter()
            .zip(&self.counts)
            .map(|(label, &count)| (label, self.percent(count)))
            .collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }

    /// Coverage folded onto top-level labels, sorted descending
    pub fn main_percentages(&self) -> Vec<(&'static str, f64)> {
        let mains = self.palette.main_labels();
        let mut totals = vec![0usize; mains.len()];

        for (&(_, label), &count) in self.palette.entries().iter().zip(&self.counts) {
            let main = Palette::main_label(label);
            if let Some(pos) = mains.iter().position(|&m| m == main) {
                totals[pos] += count;
            }
        }

        let mut out: Vec<_> = mains
            .into_iter()
            .zip(totals)
            .map(|(label, count)| (label, self.percent(count)))
            .collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }

    /// Winning label per pixel, in raster order
    pub fn assigned_labels(&self) -> Vec<&'static str> {
        let labels = self.palette.labels();
        self.assignments.iter().map(|&idx| labels[idx]).collect()
    }

    /// Winning cluster hex key per pixel, for recoloring
    pub fn assigned_hex(&self) -> Vec<&'static str> {
        let colors = self.palette.hex_colors();
        self.assignments.iter().map(|&idx| colors[idx]).collect()
    }

    fn percent(&self, count: usize) -> f64 {
        let pct = count as f64 / self.total as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromata_test::{uniform_grid, vertical_stripes};

    #[test]
    fn test_uniform_white() {
        let grid = uniform_grid(3, 3, [1.0, 1.0, 1.0]);
        let coverage =
            coverage_histogram(&grid, PaletteSize::Twelve, Space::Rgb, Metric::Euclidean)
                .unwrap();

        let pcts = coverage.percentages();
        assert_eq!(pcts[0], ("white", 100.0));
        assert!(pcts[1..].iter().all(|&(_, pct)| pct == 0.0));
        assert!(coverage.assigned_labels().iter().all(|&l| l == "white"));
        assert!(coverage.assigned_hex().iter().all(|&h| h == "#FFFFFF"));
    }

    #[test]
    fn test_stripes_split_evenly() {
        let grid = vertical_stripes(4, 4, &[[1.0, 1.0, 1.0], [0.0, 0.0, 0.0]]);
        let coverage =
            coverage_histogram(&grid, PaletteSize::Twelve, Space::Rgb, Metric::Euclidean)
                .unwrap();

        let pcts = coverage.percentages();
        assert_eq!(pcts[0].1, 50.0);
        assert_eq!(pcts[1].1, 50.0);
        let names: Vec<_> = pcts[..2].iter().map(|&(l, _)| l).collect();
        assert!(names.contains(&"white") && names.contains(&"black"));

        let sum: f64 = pcts.iter().map(|&(_, pct)| pct).sum();
        assert!((sum - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_main_fold() {
        // a dark red pixel lands on a shade cluster of the 31 palette;
        // the main fold must absorb it into plain red
        let grid = uniform_grid(2, 2, [0.65, 0.0, 0.0]);
        let coverage =
            coverage_histogram(&grid, PaletteSize::ThirtyOne, Space::Rgb, Metric::Euclidean)
                .unwrap();

        assert_eq!(coverage.percentages()[0], ("red|darkRed", 100.0));
        assert_eq!(coverage.main_percentages()[0], ("red", 100.0));
    }

    #[test]
    fn test_rejects_non_numeric_space() {
        let grid = uniform_grid(1, 1, [0.0, 0.0, 0.0]);
        assert!(
            coverage_histogram(&grid, PaletteSize::Twelve, Space::Hex, Metric::Euclidean)
                .is_err()
        );
    }
}
