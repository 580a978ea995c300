//! Segmentation regression test
//!
//! Covers the policy branches end to end, the morphology identity and
//! the labeling partition on synthetic grids.

use chromata_segment::{
    Connectivity, FloodFillOptions, MaskStrategy, SimCornersOptions, dilate, erode, extract_mask,
    label_regions,
};
use chromata_test::{CheckParams, checkerboard, uniform_grid, uniform_lightness};

#[test]
fn segment_reg() {
    let mut cp = CheckParams::new("segment");

    // --- Empty strategy list ---

    for (rows, cols) in [(2, 2), (9, 5)] {
        let grid = uniform_grid(rows, cols, [0.5; 3]);
        let (mask, cover) = extract_mask(&grid, &[]).expect("extract");
        cp.compare_values(0.0, cover, 0.0);
        cp.compare_values(0.0, mask.count(true) as f64, 0.0);
    }

    // --- Uniform image: corner mask marks everything, policy refuses ---

    let grid = uniform_grid(12, 12, [0.2, 0.8, 0.4]);
    let strategies = [MaskStrategy::SimCorners(SimCornersOptions::default())];
    let (mask, cover) = extract_mask(&grid, &strategies).expect("extract");
    cp.compare_values(0.0, cover, 0.0);
    cp.compare_values(0.0, mask.count(true) as f64, 0.0);

    // the raw strategy itself marks every pixel
    let raw = chromata_segment::simcorners::extract(&grid, &SimCornersOptions::default())
        .expect("simcorners");
    cp.compare_values(100.0, raw.coverage_percent(), 0.0);

    // --- Flood fill plus corner mask on a framed image ---

    let mut grid = uniform_grid(30, 30, [1.0, 1.0, 1.0]);
    for i in 10..20 {
        for j in 10..20 {
            grid.set(i, j, [0.8, 0.1, 0.1]).expect("in bounds");
        }
    }
    let mut edges = uniform_lightness(30, 30, 0.0);
    for k in 9..=20 {
        edges[(9, k)] = 1.0;
        edges[(20, k)] = 1.0;
        edges[(k, 9)] = 1.0;
        edges[(k, 20)] = 1.0;
    }

    let strategies = [
        MaskStrategy::FloodFill(FloodFillOptions::new(edges)),
        MaskStrategy::SimCorners(SimCornersOptions::default()),
    ];
    let (mask, cover) = extract_mask(&grid, &strategies).expect("extract");
    cp.compare_values(1.0, if mask[(0, 0)] { 1.0 } else { 0.0 }, 0.0);
    cp.compare_values(0.0, if mask[(15, 15)] { 1.0 } else { 0.0 }, 0.0);
    let plausible = cover > 0.0 && cover < 80.0;
    cp.compare_values(1.0, if plausible { 1.0 } else { 0.0 }, 0.0);

    // --- Morphology identity at radius 0 ---

    let board = checkerboard(7, 9);
    for value in [true, false] {
        let same = erode(&board, value, 0) == board && dilate(&board, value, 0) == board;
        cp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Labeling partition on synthetic grids ---

    let labels = label_regions(&checkerboard(5, 5), Connectivity::Four);
    let mut distinct: Vec<u32> = labels.iter().copied().collect();
    distinct.sort_unstable();
    distinct.dedup();
    cp.compare_values(25.0, distinct.len() as f64, 0.0);

    let solid = uniform_lightness(4, 4, 0.0).map(|_| true);
    let labels = label_regions(&solid, Connectivity::Four);
    let single = labels.iter().all(|&l| l == 1);
    cp.compare_values(1.0, if single { 1.0 } else { 0.0 }, 0.0);

    assert!(cp.cleanup(), "segment regression test failed");
}
