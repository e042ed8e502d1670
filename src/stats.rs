//! # Summary statistics
//!
//! Shared helpers for sample moments over slices and faer matrix columns.

use faer::Mat;
use statrs::statistics::Statistics;

/// Sample mean, or `NaN` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().mean()
}

/// Sample standard deviation with the `n - 1` denominator.
///
/// Returns `NaN` when fewer than two values are available.
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    values.iter().std_dev()
}

/// Sample standard deviation of a single matrix column.
///
/// Returns `NaN` when the column index is out of range or the column holds
/// fewer than two rows.
#[must_use]
pub fn column_std_dev(matrix: &Mat<f64>, column: usize) -> f64 {
    if column >= matrix.ncols() {
        return f64::NAN;
    }
    let values = (0..matrix.nrows())
        .map(|row| matrix[(row, column)])
        .collect::<Vec<_>>();
    sample_std_dev(&values)
}
