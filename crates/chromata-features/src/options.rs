//! Feature extraction options
//!
//! [`FeatureOptions`] carries one variant per supported combination of
//! extraction level and feature type, so invalid pairings (a pixel-level
//! histogram, an image-level distance) cannot be expressed at all.
//! The constructors reproduce the default parameter sets:
//!
//! | level  | type      | defaults                             |
//! |--------|-----------|--------------------------------------|
//! | pixel  | value     | rgb                                  |
//! | pixel  | distance  | 12 clusters, euclidean, rgb          |
//! | region | value     | size 3, sliding, rgb                 |
//! | region | histogram | size 100, tiled, 4 bins, rgb         |
//! | image  | value     | rgb                                  |
//! | image  | histogram | 4 bins, rgb                          |

use crate::error::{FeatureError, FeatureResult};
use chromata_color::{Metric, PaletteSize, Space};

/// One variant per valid (level, type) combination
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureOptions {
    /// Per-pixel color components
    PixelValue { space: Space },
    /// Per-pixel distances to every cluster center of a palette
    PixelDistance {
        clusters: PaletteSize,
        metric: Metric,
        space: Space,
    },
    /// Flattened components of each square window
    RegionValue {
        size: usize,
        sliding: bool,
        space: Space,
    },
    /// 3D color histogram of each square window
    RegionHistogram {
        size: usize,
        sliding: bool,
        nbins: usize,
        space: Space,
    },
    /// Flattened components of the whole image
    ImageValue { space: Space },
    /// 3D color histogram of the whole image
    ImageHistogram { nbins: usize, space: Space },
}

impl FeatureOptions {
    /// Pixel values with default arguments
    pub fn pixel_value() -> Self {
        Self::PixelValue { space: Space::Rgb }
    }

    /// Pixel-to-cluster distances with default arguments
    pub fn pixel_distance() -> Self {
        Self::PixelDistance {
            clusters: PaletteSize::Twelve,
            metric: Metric::Euclidean,
            space: Space::Rgb,
        }
    }

    /// Region values with default arguments
    pub fn region_value() -> Self {
        Self::RegionValue {
            size: 3,
            sliding: true,
            space: Space::Rgb,
        }
    }

    /// Region histograms with default arguments
    pub fn region_histogram() -> Self {
        Self::RegionHistogram {
            size: 100,
            sliding: false,
            nbins: 4,
            space: Space::Rgb,
        }
    }

    /// Image values with default arguments
    pub fn image_value() -> Self {
        Self::ImageValue { space: Space::Rgb }
    }

    /// Image histograms with default arguments
    pub fn image_histogram() -> Self {
        Self::ImageHistogram {
            nbins: 4,
            space: Space::Rgb,
        }
    }

    /// The color space this extraction works in
    pub fn space(&self) -> Space {
        match *self {
            Self::PixelValue { space }
            | Self::PixelDistance { space, .. }
            | Self::RegionValue { space, .. }
            | Self::RegionHistogram { space, .. }
            | Self::ImageValue { space }
            | Self::ImageHistogram { space, .. } => space,
        }
    }

    /// Check argument consistency before extraction
    pub fn validate(&self) -> FeatureResult<()> {
        let space = self.space();
        if !space.is_numeric() {
            return Err(FeatureError::InvalidParameters(format!(
                "{space} yields no numeric feature components"
            )));
        }

        match *self {
            Self::RegionHistogram { nbins, space, .. } | Self::ImageHistogram { nbins, space } => {
                if nbins == 0 {
                    return Err(FeatureError::InvalidParameters(
                        "nbins must be at least 1".into(),
                    ));
                }
                if space.component_ranges().is_none() {
                    return Err(FeatureError::InvalidParameters(format!(
                        "{space} has no declared component ranges to bin"
                    )));
                }
            }
            _ => {}
        }

        Ok(())
    }
}
