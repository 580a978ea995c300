//! Training corpus boundary
//!
//! Feature vectors leave the core as newline-delimited JSON, one object
//! per sample: `{"category": <label>, "features": [<floats>]}`. The
//! writer takes any `io::Write`; paths and files stay with the caller.

use crate::error::FeatureResult;
use serde::Serialize;
use std::io::Write;

/// One labeled training sample
#[derive(Debug, Serialize)]
struct Sample<'a> {
    category: &'a str,
    features: &'a [f64],
}

/// Write every feature vector as one NDJSON sample line
///
/// Stops at the first extraction or I/O error and returns the number of
/// samples written on success.
pub fn write_samples<W, I>(out: &mut W, category: &str, features: I) -> FeatureResult<usize>
where
    W: Write,
    I: IntoIterator<Item = FeatureResult<Vec<f64>>>,
{
    let mut count = 0usize;

    for feature in features {
        let feature = feature?;
        let sample = Sample {
            category,
            features: &feature,
        };
        serde_json::to_writer(&mut *out, &sample)?;
        out.write_all(b"\n")?;
        count += 1;
    }

    log::info!("created a corpus with {count} samples for {category}");
    Ok(count)
}
