//! Connected-component labeling
//!
//! Partitions a boolean grid into maximal regions of adjacent
//! equal-valued cells using union-find with path compression. One raster
//! scan unions each cell with its matching already-visited neighbors; a
//! second pass resolves roots into compact region identifiers. Two cells
//! share a label exactly when a path of equal-valued neighbor steps
//! connects them.

use chromata_core::{LabelGrid, MaskGrid};

/// Neighborhood used when joining cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    Four,
    /// 8-way connectivity (includes diagonals)
    Eight,
}

impl Connectivity {
    /// Offsets of the already-visited neighbors in a raster scan
    fn scan_offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &[(-1, 0), (0, -1)],
            Connectivity::Eight => &[(-1, -1), (-1, 0), (-1, 1), (0, -1)],
        }
    }
}

/// Label every maximal region of adjacent equal-valued cells
///
/// Region identifiers start at 1 and are assigned in raster order of
/// each region's first cell.
pub fn label_regions(mask: &MaskGrid, connectivity: Connectivity) -> LabelGrid {
    let (rows, cols) = mask.shape();
    let offsets = connectivity.scan_offsets();
    let mut forest = UnionFind::new(rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            let cell = mask[(i, j)];
            for &(di, dj) in offsets {
                let (ni, nj) = (i as isize + di, j as isize + dj);
                if ni < 0 || nj < 0 || nj >= cols as isize {
                    continue;
                }
                let (ni, nj) = (ni as usize, nj as usize);
                if mask[(ni, nj)] == cell {
                    forest.union(i * cols + j, ni * cols + nj);
                }
            }
        }
    }

    // compact the roots into sequential labels
    let mut labels = mask.map(|_| 0u32);
    let mut next_label = 0u32;
    let mut compact = vec![0u32; rows * cols];

    for i in 0..rows {
        for j in 0..cols {
            let root = forest.find(i * cols + j);
            if compact[root] == 0 {
                next_label += 1;
                compact[root] = next_label;
            }
            labels[(i, j)] = compact[root];
        }
    }

    labels
}

/// Disjoint-set forest over cell indices
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // path compression
        let mut cursor = x;
        while self.parent[cursor] != root {
            let next = self.parent[cursor];
            self.parent[cursor] = root;
            cursor = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // lower index wins, keeping labels in raster order
            let (keep, absorb) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[absorb] = keep;
        }
    }
}
