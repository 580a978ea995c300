//! Feature vector generation
//!
//! [`generate`] walks a pixel grid and produces feature vectors lazily,
//! one per pixel, window or image depending on the options. The returned
//! [`Features`] iterator lets callers consume huge corpora with
//! backpressure instead of materializing them; running `generate` again
//! restarts the walk from the top.

use crate::error::FeatureResult;
use crate::histogram::Bins;
use crate::options::FeatureOptions;
use chromata_color::{Metric, Space, compare, convert_slice, cluster_palette, rgb};
use chromata_core::PixelGrid;

/// A single extracted feature vector
pub type FeatureVector = Vec<f64>;

/// Start a feature extraction over `grid`
///
/// Options are validated up front; per-item conversion failures surface
/// through the iterator, which ends at the first error.
pub fn generate<'a>(
    grid: &'a PixelGrid,
    options: &FeatureOptions,
) -> FeatureResult<Features<'a>> {
    options.validate()?;

    let state = match *options {
        FeatureOptions::PixelValue { space } => State::PixelValue { space, next: 0 },
        FeatureOptions::PixelDistance {
            clusters,
            metric,
            space,
        } => {
            let centers_rgb = cluster_palette(clusters).rgb_colors()?;
            let centers = convert_slice(&centers_rgb, space)?;
            State::PixelDistance {
                space,
                metric,
                centers,
                next: 0,
            }
        }
        FeatureOptions::RegionValue {
            size,
            sliding,
            space,
        } => State::RegionValue {
            space,
            windows: Windows::new(grid.rows(), grid.cols(), size, sliding),
        },
        FeatureOptions::RegionHistogram {
            size,
            sliding,
            nbins,
            space,
        } => State::RegionHistogram {
            space,
            bins: Bins::new(space, nbins)?,
            windows: Windows::new(grid.rows(), grid.cols(), size, sliding),
        },
        FeatureOptions::ImageValue { space } => State::ImageValue { space, done: false },
        FeatureOptions::ImageHistogram { nbins, space } => State::ImageHistogram {
            space,
            bins: Bins::new(space, nbins)?,
            done: false,
        },
    };

    Ok(Features { grid, state })
}

/// Lazy sequence of feature vectors over one grid
pub struct Features<'a> {
    grid: &'a PixelGrid,
    state: State,
}

enum State {
    PixelValue {
        space: Space,
        next: usize,
    },
    PixelDistance {
        space: Space,
        metric: Metric,
        centers: Vec<Vec<f64>>,
        next: usize,
    },
    RegionValue {
        space: Space,
        windows: Windows,
    },
    RegionHistogram {
        space: Space,
        bins: Bins,
        windows: Windows,
    },
    ImageValue {
        space: Space,
        done: bool,
    },
    ImageHistogram {
        space: Space,
        bins: Bins,
        done: bool,
    },
}

impl Iterator for Features<'_> {
    type Item = FeatureResult<FeatureVector>;

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;

        match &mut self.state {
            State::PixelValue { space, next } => {
                let rgb = *pixel_at(grid, *next)?;
                *next += 1;
                Some(rgb::components(rgb, *space).map_err(Into::into))
            }
            State::PixelDistance {
                space,
                metric,
                centers,
                next,
            } => {
                let rgb = *pixel_at(grid, *next)?;
                *next += 1;
                Some(rgb::components(rgb, *space).map_err(Into::into).map(|v| {
                    centers
                        .iter()
                        .map(|center| compare(&v, center, *metric))
                        .collect()
                }))
            }
            State::RegionValue { space, windows } => {
                let (top, left, size) = windows.next()?;
                Some(window_components(grid, top, left, size, *space))
            }
            State::RegionHistogram {
                space,
                bins,
                windows,
            } => {
                let (top, left, size) = windows.next()?;
                Some(
                    window_components(grid, top, left, size, *space)
                        .and_then(|values| bins.histogram(&values)),
                )
            }
            State::ImageValue { space, done } => {
                if *done {
                    return None;
                }
                *done = true;
                Some(image_components(grid, *space))
            }
            State::ImageHistogram { space, bins, done } => {
                if *done {
                    return None;
                }
                *done = true;
                Some(image_components(grid, *space).and_then(|values| bins.histogram(&values)))
            }
        }
    }
}

fn pixel_at(grid: &PixelGrid, index: usize) -> Option<&[f64; 3]> {
    if index >= grid.len() {
        return None;
    }
    Some(&grid[(index / grid.cols(), index % grid.cols())])
}

/// Flattened converted components of one square window, in raster order
fn window_components(
    grid: &PixelGrid,
    top: usize,
    left: usize,
    size: usize,
    space: Space,
) -> FeatureResult<FeatureVector> {
    let mut values = Vec::with_capacity(size * size * 3);
    for i in top..top + size {
        for j in left..left + size {
            values.extend(rgb::components(grid[(i, j)], space)?);
        }
    }
    Ok(values)
}

/// Flattened converted components of the whole grid
fn image_components(grid: &PixelGrid, space: Space) -> FeatureResult<FeatureVector> {
    let mut values = Vec::with_capacity(grid.len() * 3);
    for rgb in grid.iter() {
        values.extend(rgb::components(*rgb, space)?);
    }
    Ok(values)
}

/// Square window positions over a grid
///
/// Sliding mode steps by one pixel in both axes; tiled mode steps by the
/// window side and discards remainder rows/columns. A window side of 0
/// or one exceeding either grid dimension produces no windows at all.
struct Windows {
    nj: usize,
    total: usize,
    step: usize,
    size: usize,
    k: usize,
}

impl Windows {
    fn new(rows: usize, cols: usize, size: usize, sliding: bool) -> Self {
        let (ni, nj, step) = if size == 0 || size > rows || size > cols {
            (0, 0, 1)
        } else if sliding {
            (rows - size + 1, cols - size + 1, 1)
        } else {
            (rows / size, cols / size, size)
        };

        Self {
            nj,
            total: ni * nj,
            step,
            size,
            k: 0,
        }
    }
}

impl Iterator for Windows {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.k >= self.total {
            return None;
        }
        let top = (self.k / self.nj) * self.step;
        let left = (self.k % self.nj) * self.step;
        self.k += 1;
        Some((top, left, self.size))
    }
}
