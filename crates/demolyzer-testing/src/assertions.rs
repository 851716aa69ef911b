//! Custom assertions for numeric telemetry results.

/// Default tolerance for degree-valued comparisons.
pub const DEGREE_EPSILON: f64 = 1e-9;

/// Assert that two floats agree within `epsilon`, treating NaN as equal to NaN.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, epsilon: f64) {
    if actual.is_nan() && expected.is_nan() {
        return;
    }
    assert!(
        (actual - expected).abs() <= epsilon,
        "expected {} to be within {} of {}",
        actual,
        epsilon,
        expected
    );
}

/// Check a float against an expected value, returning an error instead of panicking.
pub fn check_close(actual: f64, expected: f64, epsilon: f64) -> anyhow::Result<()> {
    if (actual.is_nan() && expected.is_nan()) || (actual - expected).abs() <= epsilon {
        return Ok(());
    }
    anyhow::bail!("Expected {} within {} of {}", actual, epsilon, expected)
}
