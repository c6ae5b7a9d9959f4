use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::constants::ZERO_INVALID_FEATURES;


/// Replaces the zeros in the configured columns with
/// the median of the non-zero values of the same column.
///
/// The median is computed from the batch being transformed.
/// A column whose values are all zero is left unchanged.
/// Configured names that are not in the batch are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroImputer {
    columns: Vec<String>,
}


impl ZeroImputer {
    /// Construct an imputer for the columns named `columns`.
    pub fn new<I, S>(columns: I) -> Self
        where I: IntoIterator<Item = S>,
              S: ToString,
    {
        let columns = columns.into_iter()
            .map(|name| name.to_string())
            .collect();
        Self { columns }
    }


    /// Construct an imputer for the diabetes features
    /// that cannot be zero
    /// (`Glucose`, `BloodPressure`, `SkinThickness`, `Insulin`, `BMI`).
    pub fn diabetes() -> Self {
        Self::new(ZERO_INVALID_FEATURES)
    }


    /// Returns the configured column names.
    pub fn columns(&self) -> &[String] {
        &self.columns[..]
    }


    /// Returns the medians this imputer would use on `sample`,
    /// keyed by column name.
    /// `None` means the column has no non-zero value.
    pub fn medians<'a>(&'a self, sample: &Sample) -> Vec<(&'a str, Option<f64>)> {
        self.columns.iter()
            .filter_map(|name| {
                let idx = sample.index_of(name)?;
                let median = sample.features()[idx].nonzero_median();
                Some((name.as_str(), median))
            })
            .collect()
    }


    /// Returns a copy of `sample` with the zeros imputed.
    /// The labels are carried over.
    pub fn transform(&self, sample: &Sample) -> Sample {
        let targets = self.columns.iter()
            .filter_map(|name| sample.index_of(name))
            .collect::<Vec<_>>();

        let mut features = sample.features().to_vec();
        features.par_iter_mut()
            .enumerate()
            .filter(|(i, _)| targets.contains(i))
            .for_each(|(_, feat)| {
                if let Some(median) = feat.nonzero_median() {
                    feat.fill_zeros(median);
                }
            });

        sample.with_features(features)
    }
}


impl Default for ZeroImputer {
    fn default() -> Self {
        Self::diabetes()
    }
}
