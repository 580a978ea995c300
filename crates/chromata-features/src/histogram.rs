//! 3D color histograms
//!
//! A histogram splits each axis of a color space's declared component
//! range into `nbins` equal-width intervals. Every interval is half-open
//! `[lo, hi)` except the last, which is closed on both ends so the range
//! maximum lands in a bin. Values are bucketed by membership test, never
//! clamped: a component outside every interval is an error.

use crate::error::{FeatureError, FeatureResult};
use chromata_color::Space;

/// Bin intervals for a 3-component color space
#[derive(Debug, Clone)]
pub struct Bins {
    nbins: usize,
    axes: [Vec<(f64, f64)>; 3],
}

impl Bins {
    /// Build the interval table for `space` with `nbins` bins per axis
    pub fn new(space: Space, nbins: usize) -> FeatureResult<Self> {
        if nbins == 0 {
            return Err(FeatureError::InvalidParameters(
                "nbins must be at least 1".into(),
            ));
        }
        let ranges = space.component_ranges().ok_or_else(|| {
            FeatureError::InvalidParameters(format!(
                "{space} has no declared component ranges to bin"
            ))
        })?;

        let axes = ranges.map(|(vmin, vmax)| {
            let step = (vmax - vmin) / nbins as f64;
            let mut intervals: Vec<(f64, f64)> = (0..nbins)
                .map(|k| {
                    let lo = vmin + k as f64 * step;
                    (lo, lo + step)
                })
                .collect();
            // last interval anchored at the exact range maximum
            intervals[nbins - 1] = (vmax - step, vmax);
            intervals
        });

        Ok(Self { nbins, axes })
    }

    /// Bins per axis
    pub fn nbins(&self) -> usize {
        self.nbins
    }

    /// Length of the flattened histogram vector
    pub fn len(&self) -> usize {
        self.nbins * self.nbins * self.nbins
    }

    /// Never zero: `nbins == 0` is rejected at construction
    pub fn is_empty(&self) -> bool {
        self.nbins == 0
    }

    /// Find the interval holding `value` on one axis
    fn axis_index(&self, axis: usize, value: f64) -> FeatureResult<usize> {
        let intervals = &self.axes[axis];
        let last = intervals.len() - 1;

        for (idx, &(lo, hi)) in intervals.iter().enumerate() {
            let inside = if idx == last {
                value >= lo && value <= hi
            } else {
                value >= lo && value < hi
            };
            if inside {
                return Ok(idx);
            }
        }
        Err(FeatureError::ValueOutOfBins { axis, value })
    }

    /// Histogram of a flat component buffer (consecutive triples)
    ///
    /// Returns the flattened `nbins^3` grid normalized by the sample
    /// count, so the result sums to 1.0.
    pub fn histogram(&self, values: &[f64]) -> FeatureResult<Vec<f64>> {
        let mut hist = vec![0.0; self.len()];
        let mut count = 0usize;

        for triple in values.chunks_exact(3) {
            let i = self.axis_index(0, triple[0])?;
            let j = self.axis_index(1, triple[1])?;
            let k = self.axis_index(2, triple[2])?;

            hist[(i * self.nbins + j) * self.nbins + k] += 1.0;
            count += 1;
        }

        if count == 0 {
            return Err(FeatureError::InvalidParameters(
                "no samples to bin".into(),
            ));
        }

        for cell in &mut hist {
            *cell /= count as f64;
        }
        Ok(hist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intervals_cover_range() {
        let bins = Bins::new(Space::Rgb, 4).unwrap();
        assert_eq!(bins.len(), 64);
        assert_eq!(bins.axis_index(0, 0.0).unwrap(), 0);
        assert_eq!(bins.axis_index(0, 0.25).unwrap(), 1);
        assert_eq!(bins.axis_index(0, 0.999).unwrap(), 3);
        // range maximum falls in the last, closed interval
        assert_eq!(bins.axis_index(0, 1.0).unwrap(), 3);
    }

    #[test]
    fn test_out_of_bins() {
        let bins = Bins::new(Space::Rgb, 4).unwrap();
        assert!(matches!(
            bins.axis_index(0, 1.1),
            Err(FeatureError::ValueOutOfBins { axis: 0, .. })
        ));
        assert!(bins.axis_index(1, -0.01).is_err());
    }

    #[test]
    fn test_lab_axes_differ() {
        let bins = Bins::new(Space::Lab, 2).unwrap();
        assert_eq!(bins.axis_index(0, 49.0).unwrap(), 0);
        assert_eq!(bins.axis_index(0, 51.0).unwrap(), 1);
        assert_eq!(bins.axis_index(1, -1.0).unwrap(), 0);
        assert_eq!(bins.axis_index(1, 1.0).unwrap(), 1);
        assert_eq!(bins.axis_index(2, 128.0).unwrap(), 1);
    }

    #[test]
    fn test_histogram_normalized() {
        let bins = Bins::new(Space::Rgb, 2).unwrap();
        let values = [
            0.0, 0.0, 0.0, // bin (0, 0, 0)
            1.0, 1.0, 1.0, // bin (1, 1, 1)
            0.9, 0.9, 0.9, // bin (1, 1, 1)
            0.1, 0.9, 0.1, // bin (0, 1, 0)
        ];
        let hist = bins.histogram(&values).unwrap();
        assert_eq!(hist.len(), 8);
        assert!((hist.iter().sum::<f64>() - 1.0).abs() < 1e-6);
        assert_eq!(hist[0], 0.25);
        assert_eq!(hist[7], 0.5);
        assert_eq!(hist[2], 0.25);
    }

    #[test]
    fn test_histogram_rejects_stray_value() {
        let bins = Bins::new(Space::Rgb, 4).unwrap();
        assert!(bins.histogram(&[0.5, 0.5, 2.0]).is_err());
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert!(Bins::new(Space::Rgb, 0).is_err());
        assert!(Bins::new(Space::Rgbc, 4).is_err());
    }
}
