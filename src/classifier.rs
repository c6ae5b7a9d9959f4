//! Defines the [`Classifier`] trait.
//! Any fitted linear model in this crate implements it.
use crate::{Sample, activation};
use crate::common::checker;
use crate::error::Result;


/// A trait that defines the behavor of a binary classifier.
/// You only need to implement `n_feature` and `score` methods.
pub trait Classifier {
    /// Returns the number of features this classifier expects.
    fn n_feature(&self) -> usize;


    /// Computes the raw score of the `row`'th example of `sample`.
    /// This method does not check the shape of `sample`.
    fn score(&self, sample: &Sample, row: usize) -> f64;


    /// Predicts the label (`0` or `1`) of the `row`'th example of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        activation::step(self.score(sample, row))
    }


    /// Predicts the labels of all the examples in `sample`.
    /// Fails if `sample` is empty or
    /// its number of features differs from [`Classifier::n_feature`].
    fn predict_all(&self, sample: &Sample) -> Result<Vec<i64>> {
        checker::check_n_feature(sample, self.n_feature())?;

        let n_sample = sample.shape().0;
        let predictions = (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>();
        Ok(predictions)
    }
}
