//! chromata-test - Test support for the chromata workspace
//!
//! Provides the pieces the per-crate regression tests share:
//!
//! - [`CheckParams`]: failure-accumulating value and mask comparisons
//! - Synthetic grid builders ([`uniform_grid`], [`checkerboard`], ...)
//!
//! # Usage
//!
//! ```
//! use chromata_test::{CheckParams, uniform_grid};
//!
//! let mut cp = CheckParams::new("example");
//! let grid = uniform_grid(2, 2, [1.0, 1.0, 1.0]);
//! cp.compare_values(4.0, grid.len() as f64, 0.0);
//! assert!(cp.cleanup());
//! ```

mod grids;
mod params;

pub use grids::{checkerboard, framed_mask, uniform_grid, uniform_lightness, vertical_stripes};
pub use params::CheckParams;
