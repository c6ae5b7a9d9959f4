use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{Sample, Feature};
use crate::common::checker;
use crate::error::{Result, PerceptronError};


/// Standardizes each feature by `(x - mean) / scale`.
///
/// [`StandardScaler::fit`] learns the mean and
/// the population standard deviation of each column.
/// A column with zero deviation gets the scale `1.0`.
/// Once built, the scaler is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}


impl StandardScaler {
    /// Learn the per-feature mean and scale from `sample`.
    pub fn fit(sample: &Sample) -> Result<Self> {
        checker::check_sample(sample)?;

        let (mean, scale) = sample.features()
            .par_iter()
            .map(|feat| {
                let std = feat.std();
                let scale = if std == 0.0 { 1.0 } else { std };
                (feat.mean(), scale)
            })
            .unzip();

        Ok(Self { mean, scale })
    }


    /// Construct a scaler from already-fitted parameters.
    /// `mean` and `scale` must have the same non-zero length,
    /// every mean must be finite and
    /// every scale must be finite and non-zero.
    pub fn from_parts(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        if mean.is_empty() {
            return Err(PerceptronError::EmptySample {
                n_sample: 0,
                n_feature: 0,
            });
        }
        if scale.len() != mean.len() {
            return Err(PerceptronError::ShapeMismatch {
                what: "scaler scale",
                got: scale.len(),
                expected: mean.len(),
            });
        }
        if let Some(index) = mean.iter().position(|m| !m.is_finite()) {
            return Err(PerceptronError::InvalidScaler {
                index,
                reason: "the mean must be finite",
            });
        }
        let invalid_scale = scale.iter()
            .position(|s| !s.is_finite() || *s == 0.0);
        if let Some(index) = invalid_scale {
            return Err(PerceptronError::InvalidScaler {
                index,
                reason: "the scale must be finite and non-zero",
            });
        }

        Ok(Self { mean, scale })
    }


    /// Number of features this scaler expects.
    pub fn n_feature(&self) -> usize {
        self.mean.len()
    }


    /// Per-feature mean.
    pub fn mean(&self) -> &[f64] {
        &self.mean[..]
    }


    /// Per-feature scale.
    pub fn scale(&self) -> &[f64] {
        &self.scale[..]
    }


    /// Returns a standardized copy of `sample`.
    /// The labels are carried over.
    pub fn transform(&self, sample: &Sample) -> Result<Sample> {
        checker::check_n_feature(sample, self.n_feature())?;

        let features = sample.features()
            .par_iter()
            .zip(self.mean.par_iter())
            .zip(self.scale.par_iter())
            .map(|((feat, &mean), &scale)| {
                let values = feat.iter()
                    .map(|x| (x - mean) / scale)
                    .collect::<Vec<_>>();
                Feature::from_vec(feat.name(), values)
            })
            .collect::<Vec<_>>();

        Ok(sample.with_features(features))
    }
}
