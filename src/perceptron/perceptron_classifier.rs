use serde::{Serialize, Deserialize};

use crate::{Sample, Classifier};
use crate::error::{Result, PerceptronError};
use super::{ClassWeights, TrainingHistory};


/// Hyperparameters a [`PerceptronClassifier`] was trained with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    /// Learning rate.
    pub learning_rate: f64,
    /// Number of epochs.
    pub n_epochs: usize,
    /// Random seed.
    pub seed: u64,
}


/// A linear binary classifier of the form
/// `x -> step(<w, x> + b)`.
/// Instances are produced by [`Perceptron::fit`](super::Perceptron::fit)
/// or built from trained parameters by
/// [`PerceptronClassifier::from_parts`].
/// A fitted classifier is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerceptronClassifier {
    pub(crate) weights: Vec<f64>,
    pub(crate) bias: f64,
    pub(crate) hyperparameters: Option<Hyperparameters>,
    pub(crate) class_weights: ClassWeights,
    pub(crate) history: TrainingHistory,
}


impl PerceptronClassifier {
    /// All-zero weights and bias.
    pub(crate) fn zeros(
        n_feature: usize,
        hyperparameters: Hyperparameters,
        class_weights: ClassWeights,
    ) -> Self
    {
        Self {
            weights: vec![0.0; n_feature],
            bias: 0.0,
            hyperparameters: Some(hyperparameters),
            class_weights,
            history: TrainingHistory::with_capacity(hyperparameters.n_epochs),
        }
    }


    /// Construct a classifier from trained parameters.
    /// The resulting classifier has no training history.
    pub fn from_parts(weights: Vec<f64>, bias: f64) -> Result<Self> {
        if weights.is_empty() {
            return Err(PerceptronError::EmptySample {
                n_sample: 0,
                n_feature: 0,
            });
        }
        if let Some(index) = weights.iter().position(|w| !w.is_finite()) {
            return Err(PerceptronError::InvalidHyperparameter {
                name: "weights",
                value: format!("weights[{index}] = {}", weights[index]),
                reason: "every weight must be finite",
            });
        }
        if !bias.is_finite() {
            return Err(PerceptronError::InvalidHyperparameter {
                name: "bias",
                value: bias.to_string(),
                reason: "must be finite",
            });
        }

        let classifier = Self {
            weights,
            bias,
            hyperparameters: None,
            class_weights: ClassWeights::UNIFORM,
            history: TrainingHistory::new(),
        };
        Ok(classifier)
    }


    /// Returns the weight vector.
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the bias.
    pub fn bias(&self) -> f64 {
        self.bias
    }


    /// Returns the hyperparameters used for training.
    /// `None` if this classifier was built by
    /// [`PerceptronClassifier::from_parts`].
    pub fn hyperparameters(&self) -> Option<&Hyperparameters> {
        self.hyperparameters.as_ref()
    }


    /// Returns the class weights used for training.
    pub fn class_weights(&self) -> &ClassWeights {
        &self.class_weights
    }


    /// Returns the per-epoch training history.
    pub fn history(&self) -> &TrainingHistory {
        &self.history
    }
}


impl Classifier for PerceptronClassifier {
    fn n_feature(&self) -> usize {
        self.weights.len()
    }


    fn score(&self, sample: &Sample, row: usize) -> f64 {
        sample.features()
            .iter()
            .zip(&self.weights[..])
            .map(|(feat, w)| feat[row] * w)
            .sum::<f64>()
            + self.bias
    }
}
