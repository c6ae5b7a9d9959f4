use polars::prelude::*;
use serde::{Serialize, Deserialize};
use std::ops::Index;
use std::slice::Iter;

use crate::error::{Result, PerceptronError};


/// Dense representation of a feature (a named column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name
    pub(crate) name: String,
    /// Feature values.
    pub(crate) sample: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature with `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        let name = name.to_string();
        Self { name, sample: Vec::new(), }
    }


    /// Construct a feature named `name` from the given values.
    pub fn from_vec<T: ToString>(name: T, sample: Vec<f64>) -> Self {
        let name = name.to_string();
        Self { name, sample, }
    }


    /// Convert `polars::Series` into `Feature`.
    /// Integer columns are casted to `f64`.
    /// A `null` entry is rejected.
    pub fn from_series(series: &Series) -> Result<Self> {
        let name = series.name().to_string();

        let casted = series.cast(&DataType::Float64)?;
        let sample = casted.f64()?
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| PerceptronError::NullValue {
                feature: name.clone(),
            })?;

        Ok(Self { name, sample, })
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    pub(crate) fn into_values(self) -> Vec<f64> {
        self.sample
    }


    /// Returns the values of this feature.
    pub fn values(&self) -> &[f64] {
        &self.sample[..]
    }


    /// Returns an iterator over the values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.sample.iter()
    }


    /// Append an example to this feature.
    pub fn append(&mut self, x: f64) {
        self.sample.push(x);
    }


    /// Returns the number of items in `self.sample`.
    pub fn len(&self) -> usize {
        self.sample.len()
    }


    /// Returns `true` if `self.sample` has no item.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }


    /// Returns a new feature that consists of the rows at `ix`.
    pub(crate) fn select(&self, ix: &[usize]) -> Self {
        let sample = ix.iter()
            .map(|&i| self.sample[i])
            .collect::<Vec<_>>();
        Self { name: self.name.clone(), sample, }
    }


    /// Arithmetic mean of the values.
    /// Returns `0.0` for an empty feature.
    pub fn mean(&self) -> f64 {
        if self.is_empty() { return 0.0; }
        self.sample.iter().sum::<f64>() / self.len() as f64
    }


    /// Population standard deviation (`ddof = 0`) of the values.
    pub fn std(&self) -> f64 {
        if self.is_empty() { return 0.0; }
        let mean = self.mean();
        let variance = self.sample.iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>()
            / self.len() as f64;
        variance.sqrt()
    }


    /// Median of the values that are not exactly `0.0`.
    /// For an even count, the mean of the two middle values is returned.
    /// Returns `None` if every value is `0.0`.
    pub fn nonzero_median(&self) -> Option<f64> {
        let mut nonzero = self.sample.iter()
            .copied()
            .filter(|x| *x != 0.0)
            .collect::<Vec<_>>();
        if nonzero.is_empty() { return None; }

        nonzero.sort_by(|a, b| a.total_cmp(b));
        let mid = nonzero.len() / 2;
        let median = if nonzero.len() % 2 == 0 {
            (nonzero[mid - 1] + nonzero[mid]) / 2.0
        } else {
            nonzero[mid]
        };
        Some(median)
    }


    /// Replace every `0.0` with `value`.
    /// Returns the number of replaced entries.
    pub(crate) fn fill_zeros(&mut self, value: f64) -> usize {
        let mut n_filled = 0;
        self.sample.iter_mut()
            .filter(|x| **x == 0.0)
            .for_each(|x| {
                *x = value;
                n_filled += 1;
            });
        n_filled
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}
