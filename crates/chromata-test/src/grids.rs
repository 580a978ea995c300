//! Synthetic grid builders
//!
//! Small deterministic inputs for exercising the analysis crates without
//! decoding real images.

use chromata_core::{Grid, MaskGrid, PixelGrid};

/// Pixel grid with every cell set to `color`
pub fn uniform_grid(rows: usize, cols: usize, color: [f64; 3]) -> PixelGrid {
    PixelGrid::new(rows, cols, color).expect("nonzero test grid dimensions")
}

/// Pixel grid of vertical stripes cycling through `colors`
pub fn vertical_stripes(rows: usize, cols: usize, colors: &[[f64; 3]]) -> PixelGrid {
    let mut grid = uniform_grid(rows, cols, colors[0]);
    for i in 0..rows {
        for j in 0..cols {
            grid[(i, j)] = colors[j % colors.len()];
        }
    }
    grid
}

/// Alternating boolean checkerboard, `true` at even parity
pub fn checkerboard(rows: usize, cols: usize) -> MaskGrid {
    let mut mask = MaskGrid::new(rows, cols, false).expect("nonzero test grid dimensions");
    for i in 0..rows {
        for j in 0..cols {
            mask[(i, j)] = (i + j) % 2 == 0;
        }
    }
    mask
}

/// Mask with a `true` frame of the given thickness around a `false` core
pub fn framed_mask(rows: usize, cols: usize, border: usize) -> MaskGrid {
    let mut mask = MaskGrid::new(rows, cols, false).expect("nonzero test grid dimensions");
    for i in 0..rows {
        for j in 0..cols {
            if i < border || j < border || i >= rows - border || j >= cols - border {
                mask[(i, j)] = true;
            }
        }
    }
    mask
}

/// Lightness grid with every cell set to `value`
pub fn uniform_lightness(rows: usize, cols: usize, value: f64) -> Grid<f64> {
    Grid::new(rows, cols, value).expect("nonzero test grid dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_stripes_cycle() {
        let grid = vertical_stripes(2, 5, &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(grid[(0, 0)], [1.0, 0.0, 0.0]);
        assert_eq!(grid[(1, 1)], [0.0, 1.0, 0.0]);
        assert_eq!(grid[(0, 4)], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_checkerboard_parity() {
        let board = checkerboard(3, 3);
        assert!(board[(0, 0)]);
        assert!(!board[(0, 1)]);
        assert!(board[(2, 2)]);
        assert_eq!(board.count(true), 5);
    }

    #[test]
    fn test_framed_mask() {
        let mask = framed_mask(5, 5, 1);
        assert!(mask[(0, 2)] && mask[(4, 4)] && mask[(2, 0)]);
        assert!(!mask[(2, 2)]);
        assert_eq!(mask.count(false), 9);
    }
}
