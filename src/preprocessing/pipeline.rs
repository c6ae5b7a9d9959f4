use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::error::Result;
use super::{ZeroImputer, StandardScaler};


/// Chains [`ZeroImputer`] and [`StandardScaler`].
///
/// # Example
/// ```ignore
/// use miniperceptrons::prelude::*;
///
/// // Training time: impute, then fit the scaler on the imputed sample.
/// let preprocessor = Preprocessor::fit(ZeroImputer::diabetes(), &train)?;
/// let train = preprocessor.preprocess(&train)?;
///
/// // Inference time: the same preprocessor.
/// let batch = preprocessor.preprocess(&batch)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessor {
    imputer: ZeroImputer,
    scaler: StandardScaler,
}


impl Preprocessor {
    /// Construct a pipeline from its components.
    pub fn new(imputer: ZeroImputer, scaler: StandardScaler) -> Self {
        Self { imputer, scaler }
    }


    /// Fit the scaler on the imputed `sample`.
    pub fn fit(imputer: ZeroImputer, sample: &Sample) -> Result<Self> {
        let imputed = imputer.transform(sample);
        let scaler = StandardScaler::fit(&imputed)?;
        Ok(Self { imputer, scaler })
    }


    /// Returns the imputer.
    pub fn imputer(&self) -> &ZeroImputer {
        &self.imputer
    }


    /// Returns the scaler.
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }


    /// Impute and standardize `sample`.
    /// Fails if the width of `sample` differs from the scaler's.
    pub fn preprocess(&self, sample: &Sample) -> Result<Sample> {
        let imputed = self.imputer.transform(sample);
        self.scaler.transform(&imputed)
    }
}


/// Impute the diabetes features of `sample` and standardize it with `scaler`.
///
/// The feature names travel with `sample` as its column names.
/// They locate the columns in [`ZERO_INVALID_FEATURES`]
/// wherever they appear, and a missing one is skipped.
/// The scaler is applied column by column in the order of `sample`,
/// so that order must be the one the scaler was fitted on.
/// Use [`Preprocessor`] to impute a different set of columns.
///
/// [`ZERO_INVALID_FEATURES`]: crate::constants::ZERO_INVALID_FEATURES
pub fn preprocess(sample: &Sample, scaler: &StandardScaler) -> Result<Sample> {
    let imputed = ZeroImputer::diabetes().transform(sample);
    scaler.transform(&imputed)
}
