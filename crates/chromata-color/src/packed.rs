//! Packed pixel representation
//!
//! Thin bridge between the `0xRRGGBBAA` pixel contract in
//! [`chromata_core::pixel`] and the float triples the conversion
//! formulas operate on.

use chromata_core::pixel;

/// Unpack a pixel into an RGB float triple on the [0, 1] scale
pub fn to_rgb(packed: u32) -> [f64; 3] {
    pixel::unpack_rgb(packed)
}

/// Format a packed pixel as a canonical hex string
pub fn to_hex(packed: u32) -> String {
    crate::rgb::to_hex(to_rgb(packed))
}
