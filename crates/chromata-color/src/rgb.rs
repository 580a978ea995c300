//! Conversions out of RGB
//!
//! Every derived space is computed from an RGB float triple with channels
//! in [0, 1]. Hue components are normalized into [0, 1) by dividing by
//! 360, so that all non-LAB spaces share a uniform [0, 1] component scale.

use crate::error::{ColorError, ColorResult};
use crate::space::Space;
use chromata_core::pixel;

/// D65 reference white point, on the same x100 scale as [`to_xyz`] output
pub const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// Format an RGB triple as a canonical `#RRGGBB` hex string
///
/// Channels are scaled by 255 and truncated; digits are uppercase.
pub fn to_hex(rgb: [f64; 3]) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        (rgb[0] * 255.0) as u8,
        (rgb[1] * 255.0) as u8,
        (rgb[2] * 255.0) as u8
    )
}

/// Pack an RGB triple into a `0xRRGGBBAA` pixel with opaque alpha
pub fn to_packed(rgb: [f64; 3]) -> u32 {
    pixel::pack_rgb(rgb)
}

/// Convert RGB to HSL
///
/// Hue is divided by 360 into [0, 1); saturation and lightness stay on
/// the [0, 1] scale rather than the conventional 0-100 one.
pub fn to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let l = (cmax + cmin) / 2.0;
    let h = hue_degrees(rgb, cmax, delta);
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    [h / 360.0, s, l]
}

/// Convert RGB to HSV
///
/// Hue is divided by 360 into [0, 1); saturation and value stay in [0, 1].
pub fn to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let h = hue_degrees(rgb, cmax, delta);
    let s = if cmax == 0.0 { 0.0 } else { delta / cmax };

    [h / 360.0, s, cmax]
}

/// Hexagonal hue in degrees [0, 360)
fn hue_degrees(rgb: [f64; 3], cmax: f64, delta: f64) -> f64 {
    let [r, g, b] = rgb;
    if delta == 0.0 {
        0.0
    } else if cmax == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if cmax == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    }
}

/// Convert RGB to YIQ
///
/// Negative components are clamped to 0.0; values above 1.0 are left
/// untouched (asymmetric clamp).
pub fn to_yiq(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;

    let y = r * 0.299 + g * 0.587 + b * 0.114;
    let i = r * 0.596 - g * 0.275 - b * 0.321;
    let q = r * 0.212 - g * 0.523 + b * 0.311;

    [y.max(0.0), i.max(0.0), q.max(0.0)]
}

/// Convert RGB to CIE XYZ (D65, sRGB primaries), on a x100 scale
pub fn to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let r = expand_srgb(rgb[0]) * 100.0;
    let g = expand_srgb(rgb[1]) * 100.0;
    let b = expand_srgb(rgb[2]) * 100.0;

    [
        0.412453 * r + 0.357580 * g + 0.180423 * b,
        0.212671 * r + 0.715160 * g + 0.072169 * b,
        0.019334 * r + 0.119193 * g + 0.950227 * b,
    ]
}

/// sRGB gamma expansion of a single channel
fn expand_srgb(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert RGB to CIE L*a*b* via XYZ
pub fn to_lab(rgb: [f64; 3]) -> [f64; 3] {
    let xyz = to_xyz(rgb);

    let x = lab_f(xyz[0] / D65_WHITE[0]);
    let y = lab_f(xyz[1] / D65_WHITE[1]);
    let z = lab_f(xyz[2] / D65_WHITE[2]);

    [116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z)]
}

/// Piecewise cube-root function of the LAB transform
fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.powf(1.0 / 3.0)
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Convert RGB to RGBC: the RGB triple plus its LAB chroma
pub fn to_rgbc(rgb: [f64; 3]) -> [f64; 4] {
    let [_, a, b] = to_lab(rgb);
    let chroma = (a * a + b * b).sqrt();
    [rgb[0], rgb[1], rgb[2], chroma]
}

/// Numeric component vector of `rgb` in the requested space
///
/// `Pixel` and `Hex` are not numeric targets here; use
/// [`crate::convert`] for those.
pub fn components(rgb: [f64; 3], space: Space) -> ColorResult<Vec<f64>> {
    match space {
        Space::Rgb => Ok(rgb.to_vec()),
        Space::Hsl => Ok(to_hsl(rgb).to_vec()),
        Space::Hsv => Ok(to_hsv(rgb).to_vec()),
        Space::Yiq => Ok(to_yiq(rgb).to_vec()),
        Space::Xyz => Ok(to_xyz(rgb).to_vec()),
        Space::Lab => Ok(to_lab(rgb).to_vec()),
        Space::Rgbc => Ok(to_rgbc(rgb).to_vec()),
        Space::Pixel | Space::Hex => Err(ColorError::InvalidParameters(format!(
            "{space} is not a numeric component space"
        ))),
    }
}
