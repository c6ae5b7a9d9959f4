//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;
use crate::error::{Result, PerceptronError};


/// Check whether the sample has at least one row and one column.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<()> {
    let (n_sample, n_feature) = sample.shape();

    if n_sample == 0 || n_feature == 0 {
        return Err(PerceptronError::EmptySample { n_sample, n_feature });
    }
    Ok(())
}


/// Check whether the sample has `n_feature` columns.
/// An empty sample is rejected as well.
#[inline(always)]
pub(crate) fn check_n_feature(sample: &Sample, n_feature: usize) -> Result<()> {
    check_sample(sample)?;

    let got = sample.shape().1;
    if got != n_feature {
        return Err(PerceptronError::ShapeMismatch {
            what: "features",
            got,
            expected: n_feature,
        });
    }
    Ok(())
}


/// Check the learning rate.
/// It must be a positive finite number.
#[inline(always)]
pub(crate) fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(PerceptronError::InvalidHyperparameter {
            name: "learning_rate",
            value: learning_rate.to_string(),
            reason: "must be a positive finite number",
        });
    }
    Ok(())
}


/// Check the number of epochs.
#[inline(always)]
pub(crate) fn check_n_epochs(n_epochs: usize) -> Result<()> {
    if n_epochs == 0 {
        return Err(PerceptronError::InvalidHyperparameter {
            name: "n_epochs",
            value: n_epochs.to_string(),
            reason: "at least one epoch is required",
        });
    }
    Ok(())
}


/// Check that `predictions` and `labels` can be compared.
#[inline(always)]
pub(crate) fn check_aligned(predictions: &[i64], labels: &[i64]) -> Result<()> {
    if predictions.is_empty() {
        return Err(PerceptronError::EmptySample {
            n_sample: 0,
            n_feature: 0,
        });
    }
    if predictions.len() != labels.len() {
        return Err(PerceptronError::ShapeMismatch {
            what: "labels",
            got: labels.len(),
            expected: predictions.len(),
        });
    }
    Ok(())
}
