//! Named color-cluster palettes
//!
//! Fixed hex-to-label mappings used as classification targets and as
//! cluster centers for distance-based color naming. Three published sets
//! exist (12, 13 and 31 entries); their contents are frozen since numeric
//! fixtures depend on the exact hex values and labels.
//!
//! Labels in the 31-entry set encode a shade hierarchy with a `|`
//! separator: `"brown|darkBrown"` reads as "darkBrown is a shade of
//! brown". [`Palette::main_label`] derives the top-level name.

use crate::error::{ColorError, ColorResult};
use crate::hex;
use std::sync::LazyLock;

/// Shade separator in hierarchical labels
pub const LABEL_SEPARATOR: char = '|';

const CLUSTERS_12: [(&str, &str); 12] = [
    ("#FFFFFF", "white"),
    ("#000000", "black"),
    ("#616161", "gray"),
    ("#FF0000", "red"),
    ("#00B300", "green"),
    ("#0000FF", "blue"),
    ("#008B8B", "cyan"),
    ("#8B5A2B", "brown"),
    ("#FFFF00", "yellow"),
    ("#FFA500", "orange"),
    ("#FF1493", "pink"),
    ("#8A2BE2", "purple"),
];

const CLUSTERS_13: [(&str, &str); 13] = [
    ("#FFFFFF", "white"),
    ("#000000", "black"),
    ("#616161", "gray"),
    ("#FF0000", "red"),
    ("#00B300", "green"),
    ("#0000FF", "blue"),
    ("#008B8B", "cyan"),
    ("#8B5A2B", "brown"),
    ("#FFFF00", "yellow"),
    ("#FFA500", "orange"),
    ("#FF1493", "pink"),
    ("#8A2BE2", "purple"),
    ("#FFE0BD", "skin"),
];

const CLUSTERS_31: [(&str, &str); 31] = [
    ("#FFFFFF", "white"),
    ("#000000", "black"),
    ("#404040", "grey"),
    ("#BFBFBF", "grey|lightGrey"),
    ("#FF0000", "red"),
    ("#FFA2A2", "red|lightRed"),
    ("#A60000", "red|darkRed"),
    ("#CC8019", "brown"),
    ("#FFD0A2", "brown|lightBrown"),
    ("#A65300", "brown|darkBrown"),
    ("#FFF200", "yellow"),
    ("#FFFFA2", "yellow|lightYellow"),
    ("#A6A600", "yellow|darkYellow"),
    ("#80FF00", "chartreuse"),
    ("#D0FFA2", "chartreuse|lightChartreuse"),
    ("#53A600", "chartreuse|darkChartreuse"),
    ("#00FF40", "green"),
    ("#A2FFB9", "green|lightGreen"),
    ("#00A629", "green|darkGreen"),
    ("#00ADEF", "cyan"),
    ("#A2FFFF", "cyan|lightCyan"),
    ("#00A6A6", "cyan|darkCyan"),
    ("#0000FF", "blue"),
    ("#A2B9FF", "blue|lightBlue"),
    ("#0029A6", "blue|darkBlue"),
    ("#800080", "magenta"),
    ("#D0A2FF", "magenta|lightMagenta"),
    ("#5300A6", "magenta|darkMagenta"),
    ("#EC008C", "pink"),
    ("#FFA2E8", "pink|lightPink"),
    ("#A6007C", "pink|darkPink"),
];

/// The supported palette sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteSize {
    /// 12 basic clusters
    #[default]
    Twelve,
    /// 12 basic clusters plus skin
    Thirteen,
    /// 31 clusters with light/dark shades
    ThirtyOne,
}

impl PaletteSize {
    /// Map a cluster count onto a palette size
    pub fn from_clusters(clusters: usize) -> ColorResult<Self> {
        match clusters {
            12 => Ok(Self::Twelve),
            13 => Ok(Self::Thirteen),
            31 => Ok(Self::ThirtyOne),
            given => Err(ColorError::InvalidClusterCount { given }),
        }
    }

    /// Number of clusters in this palette
    pub fn clusters(self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::Thirteen => 13,
            Self::ThirtyOne => 31,
        }
    }
}

/// An immutable named cluster palette
#[derive(Debug)]
pub struct Palette {
    size: PaletteSize,
    entries: &'static [(&'static str, &'static str)],
}

static PALETTE_12: LazyLock<Palette> = LazyLock::new(|| Palette {
    size: PaletteSize::Twelve,
    entries: &CLUSTERS_12,
});
static PALETTE_13: LazyLock<Palette> = LazyLock::new(|| Palette {
    size: PaletteSize::Thirteen,
    entries: &CLUSTERS_13,
});
static PALETTE_31: LazyLock<Palette> = LazyLock::new(|| Palette {
    size: PaletteSize::ThirtyOne,
    entries: &CLUSTERS_31,
});

/// The process-wide palette for a given size
pub fn palette(size: PaletteSize) -> &'static Palette {
    match size {
        PaletteSize::Twelve => &PALETTE_12,
        PaletteSize::Thirteen => &PALETTE_13,
        PaletteSize::ThirtyOne => &PALETTE_31,
    }
}

/// Palette lookup by raw cluster count
pub fn for_clusters(clusters: usize) -> ColorResult<&'static Palette> {
    Ok(palette(PaletteSize::from_clusters(clusters)?))
}

impl Palette {
    /// The palette size tag
    pub fn size(&self) -> PaletteSize {
        self.size
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Palettes are never empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hex, label)` pairs in publication order
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Hex keys in publication order
    pub fn hex_colors(&self) -> Vec<&'static str> {
        self.entries.iter().map(|&(hex, _)| hex).collect()
    }

    /// Labels in publication order
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|&(_, label)| label).collect()
    }

    /// RGB float triples of all cluster centers, in publication order
    pub fn rgb_colors(&self) -> ColorResult<Vec<[f64; 3]>> {
        self.entries
            .iter()
            .map(|&(color, _)| hex::to_rgb(color))
            .collect()
    }

    /// Label of a hex key, if present
    pub fn label_of(&self, color: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(hex, _)| hex == color)
            .map(|&(_, label)| label)
    }

    /// Hex key of a label, if present
    pub fn hex_of(&self, label: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(_, name)| name == label)
            .map(|&(hex, _)| hex)
    }

    /// Top-level name of a possibly hierarchical label
    pub fn main_label(label: &str) -> &str {
        label.split(LABEL_SEPARATOR).next().unwrap_or(label)
    }

    /// Distinct top-level labels in first-appearance order
    pub fn main_labels(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for &(_, label) in self.entries {
            let main = Self::main_label(label);
            if !seen.contains(&main) {
                seen.push(main);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(palette(PaletteSize::Twelve).len(), 12);
        assert_eq!(palette(PaletteSize::Thirteen).len(), 13);
        assert_eq!(palette(PaletteSize::ThirtyOne).len(), 31);
    }

    #[test]
    fn test_from_clusters() {
        assert_eq!(
            PaletteSize::from_clusters(13).unwrap(),
            PaletteSize::Thirteen
        );
        assert!(matches!(
            PaletteSize::from_clusters(16),
            Err(ColorError::InvalidClusterCount { given: 16 })
        ));
        assert!(PaletteSize::from_clusters(0).is_err());
    }

    #[test]
    fn test_lookups() {
        let p = palette(PaletteSize::Twelve);
        assert_eq!(p.label_of("#FFFFFF"), Some("white"));
        assert_eq!(p.hex_of("brown"), Some("#8B5A2B"));
        assert_eq!(p.label_of("#123456"), None);

        // the 13-entry set is the 12-entry set plus skin
        let p13 = palette(PaletteSize::Thirteen);
        assert_eq!(p13.hex_of("skin"), Some("#FFE0BD"));
        assert_eq!(&p13.entries()[..12], palette(PaletteSize::Twelve).entries());
    }

    #[test]
    fn test_rgb_colors() {
        let rgb = palette(PaletteSize::Twelve).rgb_colors().unwrap();
        assert_eq!(rgb.len(), 12);
        assert_eq!(rgb[0], [1.0, 1.0, 1.0]);
        assert_eq!(rgb[1], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_main_labels() {
        assert_eq!(Palette::main_label("brown|darkBrown"), "brown");
        assert_eq!(Palette::main_label("white"), "white");

        let mains = palette(PaletteSize::ThirtyOne).main_labels();
        assert_eq!(mains.len(), 12);
        assert!(mains.contains(&"chartreuse"));
        assert!(!mains.iter().any(|label| label.contains('|')));
    }
}
