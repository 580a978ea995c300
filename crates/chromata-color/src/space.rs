//! Color space and representation tags
//!
//! [`Space`] enumerates every conversion target: the two external
//! representations (`Pixel`, `Hex`), plain `Rgb`, and the derived spaces.
//! Dispatching on the enum keeps conversion selection exhaustive at
//! compile time instead of resolving method names at runtime.

/// Conversion target: external representation or derived color space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Space {
    /// Packed `0xRRGGBBAA` pixel
    Pixel,
    /// `#RRGGBB` hex string
    Hex,
    /// RGB float triple, channels in [0, 1]
    #[default]
    Rgb,
    /// Hue-saturation-lightness, all components in [0, 1]
    Hsl,
    /// Hue-saturation-value, all components in [0, 1]
    Hsv,
    /// Luma plus chrominance, negative components clamped to 0
    Yiq,
    /// CIE XYZ (D65, sRGB primaries)
    Xyz,
    /// CIE L*a*b*
    Lab,
    /// RGB plus a fourth LAB-chroma component
    Rgbc,
}

impl Space {
    /// Name used in log and error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Space::Pixel => "pixel",
            Space::Hex => "hex",
            Space::Rgb => "rgb",
            Space::Hsl => "hsl",
            Space::Hsv => "hsv",
            Space::Yiq => "yiq",
            Space::Xyz => "xyz",
            Space::Lab => "lab",
            Space::Rgbc => "rgbc",
        }
    }

    /// Declared `(min, max)` range per component, used for histogram
    /// binning. `None` for representations without a fixed 3-component
    /// numeric range.
    pub fn component_ranges(self) -> Option<[(f64, f64); 3]> {
        match self {
            Space::Rgb | Space::Hsl | Space::Hsv | Space::Yiq | Space::Xyz => {
                Some([(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)])
            }
            Space::Lab => Some([(0.0, 100.0), (-128.0, 128.0), (-128.0, 128.0)]),
            Space::Pixel | Space::Hex | Space::Rgbc => None,
        }
    }

    /// Whether conversion to this space yields a numeric component vector
    pub fn is_numeric(self) -> bool {
        !matches!(self, Space::Pixel | Space::Hex)
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
