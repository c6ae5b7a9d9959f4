use polars::prelude::*;
use rand::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use std::collections::HashMap;
use std::ops::Index;

use crate::constants::DATA_PREVIEW_ROWS;
use crate::error::{Result, PerceptronError};
use super::feature_struct::Feature;


/// Struct `Sample` holds a batch of examples in dense, column-major format.
/// Each column is a named [`Feature`].
/// The target labels are optional;
/// a sample without labels can only be used for prediction.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


/// Class balance of a labeled sample with a preview of its first rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    /// Number of examples.
    pub n_sample: usize,
    /// Number of features.
    pub n_feature: usize,
    /// Number of examples labeled `1`.
    pub diabetic_count: usize,
    /// Number of examples labeled `0`.
    pub non_diabetic_count: usize,
    /// The first `DATA_PREVIEW_ROWS` feature vectors, in row order.
    pub data_preview: Vec<Vec<f64>>,
}


impl Sample {
    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let mut sample = Self::from_features(data)?;

        let n_target = target.len();
        if n_target != sample.n_sample {
            return Err(PerceptronError::ShapeMismatch {
                what: "target labels",
                got: n_target,
                expected: sample.n_sample,
            });
        }
        sample.target = Feature::from_series(&target)?.into_values();
        Ok(sample)
    }


    /// Convert `polars::DataFrame` into `Sample` without target labels.
    pub fn from_features(data: DataFrame) -> Result<Self> {
        let (n_sample, n_feature) = data.shape();

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Result<Vec<_>>>()?;

        let name_to_index = index_names(&features);
        let sample = Self {
            name_to_index,
            features,
            target: Vec::new(),
            n_sample,
            n_feature,
        };
        Ok(sample)
    }


    /// Construct a `Sample` from row vectors.
    /// Each row must have one value per name in `names`.
    /// If `target` is `Some`, it must have one label per row.
    pub fn from_rows<S, R>(
        names: &[S],
        rows: &[R],
        target: Option<&[f64]>,
    ) -> Result<Self>
        where S: ToString,
              R: AsRef<[f64]>,
    {
        let mut features = names.iter()
            .map(|name| Feature::new(name.to_string()))
            .collect::<Vec<_>>();
        let n_feature = features.len();

        for row in rows {
            let row = row.as_ref();
            if row.len() != n_feature {
                return Err(PerceptronError::ShapeMismatch {
                    what: "row length",
                    got: row.len(),
                    expected: n_feature,
                });
            }
            features.iter_mut()
                .zip(row)
                .for_each(|(feat, &x)| { feat.append(x); });
        }

        let n_sample = rows.len();
        let target = match target {
            Some(y) if y.len() != n_sample => {
                return Err(PerceptronError::ShapeMismatch {
                    what: "target labels",
                    got: y.len(),
                    expected: n_sample,
                });
            },
            Some(y) => y.to_vec(),
            None => Vec::new(),
        };

        let name_to_index = index_names(&features);
        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.index_of(target)
            .ok_or_else(|| PerceptronError::UnknownFeature(target.to_string()))?;

        self.target = self.features.remove(pos).into_values();
        self.n_feature -= 1;
        self.name_to_index = index_names(&self.features);

        Ok(self)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature names in column order.
    pub fn feature_names(&self) -> Vec<&str> {
        self.features.iter()
            .map(|feat| feat.name())
            .collect()
    }


    /// Returns the column index of the feature named `name`.
    pub fn index_of<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        self.name_to_index.get(name.as_ref()).copied()
    }


    /// Returns the target labels.
    /// The slice is empty if the labels are not specified.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns `true` if every example has a label.
    pub fn has_target(&self) -> bool {
        self.n_sample > 0 && self.target.len() == self.n_sample
    }


    /// Returns the target labels as integers in `{0, 1}`.
    pub fn binary_target(&self) -> Result<Vec<i64>> {
        if !self.has_target() {
            return Err(PerceptronError::MissingTarget);
        }

        self.target.iter()
            .enumerate()
            .map(|(row, &y)| {
                if y == 0.0 {
                    Ok(0)
                } else if y == 1.0 {
                    Ok(1)
                } else {
                    Err(PerceptronError::NonBinaryLabel { row, value: y })
                }
            })
            .collect()
    }


    /// Returns the `idx`-th feature vector.
    pub fn row(&self, idx: usize) -> Vec<f64> {
        self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>()
    }


    /// Returns all feature vectors in row order.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.n_sample).map(|i| self.row(i))
            .collect()
    }


    /// Returns the `idx`-th instance `(x, y)`.
    /// This method panics if the labels are not specified.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.row(idx);
        let y = self.target[idx];

        (x, y)
    }


    /// Returns a new sample with the same labels and the given columns.
    pub(crate) fn with_features(&self, features: Vec<Feature>) -> Self {
        let n_feature = features.len();
        let name_to_index = index_names(&features);
        Self {
            name_to_index,
            features,
            target: self.target.clone(),
            n_sample: self.n_sample,
            n_feature,
        }
    }


    /// Returns a new sample that consists of the rows at `ix`.
    pub(crate) fn select(&self, ix: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| feat.select(ix))
            .collect::<Vec<_>>();
        let target = if self.has_target() {
            ix.iter().map(|&i| self.target[i]).collect()
        } else {
            Vec::new()
        };

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample: ix.len(),
            n_feature: self.n_feature,
        }
    }


    /// Returns the first `n` examples.
    /// If `n` exceeds the sample size, the whole sample is returned.
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.n_sample);
        let ix = (0..n).collect::<Vec<_>>();
        self.select(&ix)
    }


    /// Returns `n` examples drawn without replacement.
    /// The draw is reproducible for a fixed `seed`.
    /// If `n` exceeds the sample size, every example is returned
    /// in shuffled order.
    pub fn random_subset(&self, n: usize, seed: u64) -> Self {
        let n = n.min(self.n_sample);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ix = (0..self.n_sample).collect::<Vec<_>>();
        ix.shuffle(&mut rng);
        ix.truncate(n);
        self.select(&ix)
    }


    /// Returns the size, the class balance and
    /// the first [`DATA_PREVIEW_ROWS`] rows of this sample.
    pub fn summary(&self) -> Result<SampleSummary> {
        let target = self.binary_target()?;
        let diabetic_count = target.iter()
            .filter(|&&y| y == 1)
            .count();
        let summary = SampleSummary {
            n_sample: self.n_sample,
            n_feature: self.n_feature,
            diabetic_count,
            non_diabetic_count: self.n_sample - diabetic_count,
            data_preview: self.head(DATA_PREVIEW_ROWS).rows(),
        };
        Ok(summary)
    }
}


impl<S: AsRef<str>> Index<S> for Sample {
    type Output = Feature;
    fn index(&self, name: S) -> &Self::Output {
        let name = name.as_ref();
        let idx = self.index_of(name)
            .unwrap_or_else(|| panic!("The feature named `{name}` does not exist"));
        &self.features[idx]
    }
}


fn index_names(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect::<HashMap<_, _>>()
}
