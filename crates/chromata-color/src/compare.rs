//! Color comparison
//!
//! Thin composition of the distance metrics with an optional conversion
//! step, so callers can compare colors that arrive in different
//! representations or spaces.

use crate::convert::{self, ColorForm};
use crate::distance::{self, Metric};
use crate::error::{ColorError, ColorResult};
use crate::space::Space;

/// Distance between two same-space component vectors
pub fn compare(color1: &[f64], color2: &[f64], metric: Metric) -> f64 {
    distance::distance(metric, color1, color2)
}

/// Convert both colors to `space`, then compare them there
///
/// Fails when either input is malformed or when `space` has no numeric
/// components to compare.
pub fn compare_as(
    color1: &ColorForm,
    color2: &ColorForm,
    metric: Metric,
    space: Space,
) -> ColorResult<f64> {
    let v1 = numeric(color1, space)?;
    let v2 = numeric(color2, space)?;
    Ok(distance::distance(metric, &v1, &v2))
}

fn numeric(color: &ColorForm, space: Space) -> ColorResult<Vec<f64>> {
    match convert::convert(color, space)? {
        ColorForm::Components(values) => Ok(values),
        _ => Err(ColorError::InvalidParameters(format!(
            "cannot compare colors in {space}"
        ))),
    }
}
