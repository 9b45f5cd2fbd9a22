//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{Matrix, Sample};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample)
{
    let (n_sample, n_feature) = sample.shape();

    assert!(n_sample > 0, "The sample has no examples");
    assert!(n_feature > 0, "The sample has no features");
    assert!(
        sample.n_outputs() > 0,
        "The target matrix has no output columns"
    );
}


/// Check that the loss-gradient matrix matches the sample shape.
#[inline(always)]
pub(crate) fn check_gradient_shape(
    gradient: &Matrix,
    n_sample: usize,
    n_outputs: usize,
)
{
    let (rows, cols) = gradient.shape();
    assert!(
        rows == n_sample && cols == n_outputs,
        "The loss gradient has shape ({rows}, {cols}), \
         expected ({n_sample}, {n_outputs})"
    );
}


/// The stump trainer only supports a single output.
#[inline(always)]
pub(crate) fn check_univariate_gradient(gradient: &Matrix) {
    let n_outputs = gradient.n_cols();
    assert!(
        n_outputs == 1,
        "The stump trainer supports single-output targets only, \
         got {n_outputs} outputs"
    );
}


/// Every feature value consumed by the LUT trainer must be
/// a non-negative integer below the LUT size.
#[inline(always)]
pub(crate) fn check_lut_features(sample: &Sample, n_entries: usize) {
    let bound = n_entries as f64;
    for feature in sample.features() {
        let valid = feature.iter()
            .all(|&v| v >= 0.0 && v < bound && v.fract() == 0.0);
        if !valid {
            panic!(
                "Feature '{}' holds values outside the LUT range \
                 [0, {n_entries}) or non-integer values",
                feature.name()
            );
        }
    }
}


/// The Jesorsky loss works on pairs of `(y, x)` coordinates and
/// needs the two anchor pairs in front.
#[inline(always)]
pub(crate) fn check_jesorsky_outputs(n_output: usize) {
    assert!(
        n_output >= 4 && n_output % 2 == 0,
        "The Jesorsky loss requires an even number of outputs (>= 4), \
         got {n_output}"
    );
}


/// A weak machine appended to a boosted machine must agree on the
/// number of outputs.
#[inline(always)]
pub(crate) fn check_output_counts(
    machine_outputs: usize,
    weak_outputs: usize,
)
{
    assert!(
        machine_outputs == weak_outputs,
        "The weak machine has {weak_outputs} output(s), \
         but the boosted machine expects {machine_outputs}"
    );
}
