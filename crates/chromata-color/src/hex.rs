//! Hex string representation
//!
//! The canonical external representation of a color is a 7-character
//! `#RRGGBB` string with uppercase digits. Parsing accepts either digit
//! case; formatting always emits the canonical form.

use crate::error::{ColorError, ColorResult};
use crate::rgb;

/// Validate the shape of a hex color string
///
/// Accepts exactly `#` followed by six hex digits.
pub fn validate(color: &str) -> ColorResult<()> {
    let digits = color.strip_prefix('#').ok_or_else(|| bad_input(color))?;
    if color.len() != 7 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad_input(color));
    }
    Ok(())
}

fn bad_input(color: &str) -> ColorError {
    ColorError::InvalidInput(format!("bad hex color {color:?}, expected \"#RRGGBB\""))
}

/// Parse a hex string into an RGB float triple on the [0, 1] scale
pub fn to_rgb(color: &str) -> ColorResult<[f64; 3]> {
    validate(color)?;

    let mut rgb = [0.0; 3];
    for (k, channel) in rgb.iter_mut().enumerate() {
        let pair = &color[1 + 2 * k..3 + 2 * k];
        let value = u8::from_str_radix(pair, 16).map_err(|_| bad_input(color))?;
        *channel = value as f64 / 255.0;
    }
    Ok(rgb)
}

/// Parse a hex string into a packed `0xRRGGBBAA` pixel
pub fn to_packed(color: &str) -> ColorResult<u32> {
    Ok(rgb::to_packed(to_rgb(color)?))
}
