//! Chromata Color - Color science for image feature extraction
//!
//! This crate provides the color-level building blocks of the workspace:
//!
//! - **Color space conversion** ([`convert`], [`rgb`], [`hex`],
//!   [`packed`]): packed pixel / hex / RGB inputs into RGB, HSL, HSV,
//!   YIQ, XYZ, LAB and RGBC
//! - **Distance metrics** ([`distance`]): Euclidean, two weighted
//!   variants, CIEDE2000
//! - **Cluster palettes** ([`palette`]): fixed hex-to-label mappings in
//!   three published sizes
//! - **Comparison** ([`compare`]): metric dispatch with optional
//!   cross-space conversion

pub mod compare;
pub mod convert;
pub mod distance;
pub mod error;
pub mod hex;
pub mod packed;
pub mod palette;
pub mod rgb;
pub mod space;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export conversion types and entry points
pub use convert::{ColorForm, convert, convert_slice, rgb_of};
pub use space::Space;

// Re-export distance types and functions
pub use distance::{
    Metric,
    WN_WEIGHTS,
    WP_WEIGHTS,
    delta_e,
    distance as metric_distance,
    euclidean,
    euclidean_wn,
    euclidean_wp,
};

// Re-export palette types and lookups
pub use palette::{LABEL_SEPARATOR, Palette, PaletteSize, for_clusters, palette as cluster_palette};

// Re-export comparison functions
pub use compare::{compare, compare_as};
