//! Ready to use fold functions for `compute_shifts`.
//!
//! Every fold receives the accumulated value, current column
//! value, its index and all the folded column values.

/// Arithmetic mean of the column. Use `0.0` as initial value.
pub fn mean(previous: f64, current: f64, index: usize, values: &[f64]) -> f64 {
    if index + 1 == values.len() {
        (previous + current) / values.len() as f64
    } else {
        previous + current
    }
}

/// Sum of the column values. Use `0.0` as initial value.
pub fn sum(previous: f64, current: f64, _index: usize, _values: &[f64]) -> f64 {
    previous + current
}

/// Minimal column value. Use `f64::INFINITY` as initial value.
pub fn min(previous: f64, current: f64, _index: usize, _values: &[f64]) -> f64 {
    previous.min(current)
}

/// Maximal column value. Use `f64::NEG_INFINITY` as initial value.
pub fn max(previous: f64, current: f64, _index: usize, _values: &[f64]) -> f64 {
    previous.max(current)
}
