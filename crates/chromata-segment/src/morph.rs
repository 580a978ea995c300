//! Boolean mask morphology
//!
//! Value-targeted erosion and dilation over [`MaskGrid`]s with square
//! `(2r+1) x (2r+1)` neighborhoods, clipped at the grid bounds. Unlike
//! classic binary morphology these operate on either cell value: eroding
//! or dilating `false` works on the complement without an explicit
//! inversion pass.

use chromata_core::MaskGrid;

/// Erode the `value` region by `radius`
///
/// A cell keeps `value` only when every in-bounds cell of its centered
/// neighborhood also holds `value`; all other cells become `!value`.
/// Radius 0 is the identity.
pub fn erode(mask: &MaskGrid, value: bool, radius: usize) -> MaskGrid {
    let (rows, cols) = mask.shape();
    let r = radius as isize;

    let mut eroded = mask.map(|_| !value);
    for i in 0..rows {
        for j in 0..cols {
            if mask[(i, j)] != value {
                continue;
            }

            let mut keep = true;
            'window: for m in i as isize - r..=i as isize + r {
                for n in j as isize - r..=j as isize + r {
                    if m < 0 || m >= rows as isize || n < 0 || n >= cols as isize {
                        continue;
                    }
                    if mask[(m as usize, n as usize)] != value {
                        keep = false;
                        break 'window;
                    }
                }
            }

            if keep {
                eroded[(i, j)] = value;
            }
        }
    }

    eroded
}

/// Dilate the `value` region by `radius`
///
/// Every `value` cell spreads `value` over its centered neighborhood,
/// clipped at the bounds. Radius 0 is the identity.
pub fn dilate(mask: &MaskGrid, value: bool, radius: usize) -> MaskGrid {
    let (rows, cols) = mask.shape();
    let r = radius as isize;

    let mut dilated = mask.map(|_| !value);
    for i in 0..rows {
        for j in 0..cols {
            if mask[(i, j)] != value {
                continue;
            }

            for m in i as isize - r..=i as isize + r {
                for n in j as isize - r..=j as isize + r {
                    if m < 0 || m >= rows as isize || n < 0 || n >= cols as isize {
                        continue;
                    }
                    dilated[(m as usize, n as usize)] = value;
                }
            }
        }
    }

    dilated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromata_core::MaskGrid;
    use rand::RngExt;

    fn from_pattern(pattern: &[&[u8]]) -> MaskGrid {
        MaskGrid::from_rows(
            pattern
                .iter()
                .map(|row| row.iter().map(|&c| c == 1).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_radius_zero_identity() {
        let mut rng = rand::rng();
        let rows: Vec<Vec<bool>> = (0..8)
            .map(|_| (0..11).map(|_| rng.random_bool(0.5)).collect())
            .collect();
        let mask = MaskGrid::from_rows(rows).unwrap();

        for value in [true, false] {
            assert_eq!(erode(&mask, value, 0), mask);
            assert_eq!(dilate(&mask, value, 0), mask);
        }
    }

    #[test]
    fn test_dilate_spreads() {
        let mask = from_pattern(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let dilated = dilate(&mask, true, 1);
        assert_eq!(dilated.count(true), 9);
        assert!(dilated[(1, 1)] && dilated[(3, 3)]);
        assert!(!dilated[(0, 0)]);
    }

    #[test]
    fn test_erode_shrinks() {
        let mask = from_pattern(&[
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 1, 1, 1, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let eroded = erode(&mask, true, 1);
        assert_eq!(eroded.count(true), 1);
        assert!(eroded[(2, 2)]);
    }

    #[test]
    fn test_erode_survives_at_clipped_border() {
        // a solid mask stays solid: out-of-bounds neighbors are skipped,
        // not counted as mismatches
        let mask = MaskGrid::new(4, 4, true).unwrap();
        assert_eq!(erode(&mask, true, 1), mask);
    }

    #[test]
    fn test_false_valued_morphology() {
        // dilating the false region eats into the true region
        let mask = from_pattern(&[
            &[1, 1, 1],
            &[1, 0, 1],
            &[1, 1, 1],
        ]);
        let dilated = dilate(&mask, false, 1);
        assert_eq!(dilated.count(false), 9);
    }

    #[test]
    fn test_dilate_then_erode_closes_gap() {
        // two separated edge cells merge after dilation; the erosion
        // leaves them thicker than the original
        let mask = from_pattern(&[
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 1, 0, 0, 0, 1, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
        ]);
        let closed = erode(&dilate(&mask, true, 2), true, 1);
        assert!(closed[(3, 3)]);
        assert!(closed.count(true) > mask.count(true));
    }
}
