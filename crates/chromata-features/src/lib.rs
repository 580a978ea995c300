//! Chromata Features - Feature extraction for color classification
//!
//! Turns a [`PixelGrid`](chromata_core::PixelGrid) into numeric feature
//! vectors at three granularities (pixel, square region, whole image)
//! and three flavors (raw values, distances to palette clusters, 3D
//! color histograms):
//!
//! - **Options** ([`options`]): valid level/type combinations with their
//!   argument sets
//! - **Generation** ([`generate`]): the lazy [`Features`] iterator
//! - **Histograms** ([`histogram`]): interval tables and binning
//! - **Coverage** ([`coverage`]): nearest-cluster color naming
//! - **Dataset** ([`dataset`]): the NDJSON sample boundary

pub mod coverage;
pub mod dataset;
pub mod error;
pub mod generate;
pub mod histogram;
pub mod options;

// Re-export error types
pub use error::{FeatureError, FeatureResult};

// Re-export extraction types and entry points
pub use generate::{FeatureVector, Features, generate};
pub use options::FeatureOptions;

// Re-export histogram types
pub use histogram::Bins;

// Re-export coverage analysis
pub use coverage::{CoverageHistogram, coverage_histogram};

// Re-export the dataset boundary
pub use dataset::write_samples;
