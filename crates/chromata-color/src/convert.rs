//! Color conversion dispatch
//!
//! [`convert`] is the single entry point for turning one of the three
//! external color representations into any supported target. Inputs are
//! normalized to an RGB float triple first, then re-expressed in the
//! requested space with an exhaustive match over [`Space`].

use crate::error::{ColorError, ColorResult};
use crate::rgb;
use crate::space::Space;
use crate::{hex, packed};

/// A color in one of the accepted external representations
#[derive(Debug, Clone, PartialEq)]
pub enum ColorForm {
    /// Packed `0xRRGGBBAA` pixel
    Packed(u32),
    /// `#RRGGBB` hex string
    Hex(String),
    /// Numeric component vector; inputs must hold exactly 3 RGB values
    Components(Vec<f64>),
}

impl ColorForm {
    /// The numeric components, when this form carries any
    pub fn as_components(&self) -> Option<&[f64]> {
        match self {
            ColorForm::Components(values) => Some(values),
            _ => None,
        }
    }
}

impl From<[f64; 3]> for ColorForm {
    fn from(rgb: [f64; 3]) -> Self {
        ColorForm::Components(rgb.to_vec())
    }
}

/// Normalize an input form to an RGB float triple
///
/// Fails with [`ColorError::InvalidInput`] when the input does not match
/// one of the accepted shapes (hex: 7 characters, `#` prefix, hex digits;
/// components: exactly 3 values).
pub fn rgb_of(color: &ColorForm) -> ColorResult<[f64; 3]> {
    match color {
        ColorForm::Packed(pixel) => Ok(packed::to_rgb(*pixel)),
        ColorForm::Hex(text) => hex::to_rgb(text),
        ColorForm::Components(values) => {
            let triple: [f64; 3] = values.as_slice().try_into().map_err(|_| {
                ColorError::InvalidInput(format!(
                    "bad component count {}, expected an RGB triple",
                    values.len()
                ))
            })?;
            Ok(triple)
        }
    }
}

/// Convert a color into another color space or representation
pub fn convert(color: &ColorForm, space: Space) -> ColorResult<ColorForm> {
    let rgb = rgb_of(color)?;

    Ok(match space {
        Space::Pixel => ColorForm::Packed(rgb::to_packed(rgb)),
        Space::Hex => ColorForm::Hex(rgb::to_hex(rgb)),
        _ => ColorForm::Components(rgb::components(rgb, space)?),
    })
}

/// Convert a slice of RGB triples into another numeric color space
pub fn convert_slice(colors: &[[f64; 3]], space: Space) -> ColorResult<Vec<Vec<f64>>> {
    colors.iter().map(|&rgb| rgb::components(rgb, space)).collect()
}
