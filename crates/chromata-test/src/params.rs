//! Check accumulation for regression tests

use chromata_core::MaskGrid;

/// Regression check parameters
///
/// Tracks the state of a regression test: the test name, current check
/// index and recorded failures. Checks never panic on their own;
/// [`CheckParams::cleanup`] reports the overall outcome so one run shows
/// every failing comparison at once.
pub struct CheckParams {
    /// Name of the test (e.g., "segment")
    pub test_name: String,
    /// Current check index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl CheckParams {
    /// Create new check parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if the values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two masks for exact equality
    pub fn compare_mask(&mut self, mask1: &MaskGrid, mask2: &MaskGrid) -> bool {
        self.index += 1;

        if mask1.shape() != mask2.shape() {
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {} - shape mismatch",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for (i, j, &cell) in mask1.enumerate() {
            if cell != mask2[(i, j)] {
                let msg = format!(
                    "Failure in {}_reg: mask comparison for index {} - cell mismatch at ({}, {})",
                    self.test_name, self.index, i, j
                );
                eprintln!("{}", msg);
                self.failures.push(msg);
                self.success = false;
                return false;
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
