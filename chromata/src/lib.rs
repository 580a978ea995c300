//! Chromata - Color analysis for machine-learning feature generation
//!
//! Extracts and classifies dominant colors from raster images that have
//! already been decoded into pixel grids.
//!
//! # Overview
//!
//! - Color space conversion and distance metrics (RGB, HSL, HSV, YIQ,
//!   XYZ, LAB, RGBC; Euclidean variants and CIEDE2000)
//! - Named color-cluster palettes used as classification targets
//! - Lazy feature extraction at pixel, region and image level
//! - Background segmentation combining flood fill and corner-similarity
//!   masks under a coverage policy
//!
//! Image codecs, EXIF handling and the statistical classifier live with
//! the caller; this workspace starts at the pixel grid and stops at
//! feature vectors and masks.
//!
//! # Example
//!
//! ```
//! use chromata::PixelGrid;
//! use chromata::features::{FeatureOptions, generate};
//!
//! // a 2x2 all-white image
//! let grid = PixelGrid::new(2, 2, [1.0, 1.0, 1.0]).unwrap();
//! let features: Vec<_> = generate(&grid, &FeatureOptions::pixel_value())
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(features.len(), 4);
//! assert_eq!(features[0], vec![1.0, 1.0, 1.0]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use chromata_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use chromata_color as color;
pub use chromata_features as features;
pub use chromata_segment as segment;
