//! Regression test parameters and operations

use std::fmt::Debug;
use voxlabel_core::Volume;

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of the
/// current comparison, and every recorded failure. Comparisons do not panic;
/// call [`RegParams::cleanup`] at the end and assert on its result so that
/// all mismatches of one run are reported together.
pub struct RegParams {
    /// Name of the test (e.g., "conncomp")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "conncomp")
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

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
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
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two volumes for exact equality of extents, depth and voxels
    ///
    /// On a voxel mismatch the first differing coordinate is reported.
    pub fn compare_volumes(&mut self, expected: &Volume, actual: &Volume) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: volume comparison for index {} - \
                 shape mismatch {:?}/{}-bit vs {:?}/{}-bit",
                self.test_name,
                self.index,
                expected.dimensions(),
                expected.depth().bits(),
                actual.dimensions(),
                actual.depth().bits()
            );
            self.fail(msg);
            return false;
        }

        let mismatch = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| a != b);

        if let Some(i) = mismatch {
            let (x, y, z) = expected.coords_of(i);
            let msg = format!(
                "Failure in {}_reg: volume comparison for index {} - \
                 voxel mismatch at ({}, {}, {}): expected {}, actual {}",
                self.test_name,
                self.index,
                x,
                y,
                z,
                expected.data()[i],
                actual.data()[i]
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Compare two sequences element by element
    pub fn compare_sequences<T: PartialEq + Debug>(&mut self, expected: &[T], actual: &[T]) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: sequence comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean check
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;

        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} failed: {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        condition
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
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

#[cfg(test)]
mod tests {
    use super::*;
    use voxlabel_core::VoxelDepth;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_volumes_reports_voxel() {
        let a = Volume::from_data(2, 2, 1, VoxelDepth::Bit8, vec![0, 1, 2, 3]).unwrap();
        let b = Volume::from_data(2, 2, 1, VoxelDepth::Bit8, vec![0, 1, 9, 3]).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_volumes(&a, &a.clone()));
        assert!(!rp.compare_volumes(&a, &b));
        assert!(rp.failures()[0].contains("(0, 1, 0)"));
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_sequences() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_sequences(&[1, 2], &[1, 2]));
        assert!(!rp.compare_sequences(&[1, 2], &[2, 1]));
        assert!(!rp.cleanup());
    }
}
