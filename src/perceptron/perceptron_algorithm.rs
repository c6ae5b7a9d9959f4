//! Provides the [`Perceptron`] by Rosenblatt, 1958,
//! with an optional per-class weighting of the updates.
use crate::{Sample, activation};
use crate::common::{checker, utils};
use crate::constants::{
    DEFAULT_LEARNING_RATE,
    DEFAULT_N_EPOCHS,
    DEFAULT_SEED,
};
use crate::error::Result;
use crate::research::TrainingLogger;
use super::{
    ClassWeight,
    ClassWeights,
    Hyperparameters,
    PerceptronClassifier,
};

use std::time::Instant;


/// Defines the (weighted) `Perceptron`.
/// `Perceptron` keeps the hyperparameters and
/// produces a [`PerceptronClassifier`] via [`Perceptron::fit`].
///
/// The training is online and mistake-driven.
/// In each epoch, the examples are visited in the given order
/// (no shuffling). For an example `(x, y)`,
/// ```text
/// update = learning_rate * (y - step(<w, x> + b)) * class_weight[y]
/// w     += update * x
/// b     += update
/// ```
/// and the example counts as an error if `update != 0`.
/// The training stops after exactly `n_epochs` epochs.
///
/// # Example
/// ```ignore
/// use miniperceptrons::prelude::*;
///
/// let f = Perceptron::init()
///     .learning_rate(0.01)
///     .n_epochs(100)
///     .class_weight(ClassWeight::Balanced)
///     .fit(&sample)?;
///
/// let predictions = f.predict_all(&sample)?;
/// ```
#[derive(Debug, Clone)]
pub struct Perceptron {
    learning_rate: f64,
    n_epochs: usize,
    // Recorded on the classifier.
    // The update rule itself has no stochastic element.
    seed: u64,
    class_weight: ClassWeight,
    // Print the status every `print_every` epochs.
    print_every: usize,
}


impl Perceptron {
    /// Initialize the `Perceptron`.
    /// By default, the parameters are set as follows;
    /// ```text
    /// learning_rate: DEFAULT_LEARNING_RATE == 0.01,
    /// n_epochs:      DEFAULT_N_EPOCHS == 100,
    /// seed:          DEFAULT_SEED == 42,
    /// class_weight:  ClassWeight::Uniform,
    /// ```
    pub fn init() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            n_epochs: DEFAULT_N_EPOCHS,
            seed: DEFAULT_SEED,
            class_weight: ClassWeight::Uniform,
            print_every: usize::MAX,
        }
    }


    /// Initialize the `Perceptron` with the class weighting `class_weight`.
    pub fn weighted(class_weight: ClassWeight) -> Self {
        Self::init().class_weight(class_weight)
    }


    /// Set the learning rate.
    /// The value is checked in [`Perceptron::fit`].
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }


    /// Set the number of epochs.
    /// The value is checked in [`Perceptron::fit`].
    pub fn n_epochs(mut self, n_epochs: usize) -> Self {
        self.n_epochs = n_epochs;
        self
    }


    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the class weighting.
    pub fn class_weight(mut self, class_weight: ClassWeight) -> Self {
        self.class_weight = class_weight;
        self
    }


    /// Set the interval to print the current status.
    /// By default, nothing is printed.
    pub fn print_every(mut self, round: usize) -> Self {
        self.print_every = round;
        self
    }


    /// Returns the name of the algorithm.
    pub fn name(&self) -> &str {
        match self.class_weight {
            ClassWeight::Uniform => "Perceptron",
            _ => "Weighted Perceptron",
        }
    }


    /// Returns the hyperparameters as `(key, value)` pairs.
    pub fn info(&self) -> Vec<(&str, String)> {
        let class_weight = match &self.class_weight {
            ClassWeight::Uniform => "uniform".to_string(),
            ClassWeight::Balanced => "balanced".to_string(),
            ClassWeight::Explicit(map) => {
                let mut pairs = map.iter().collect::<Vec<_>>();
                pairs.sort_by_key(|(label, _)| **label);
                pairs.into_iter()
                    .map(|(label, weight)| format!("{label}: {weight}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            },
        };
        vec![
            ("Learning rate", self.learning_rate.to_string()),
            ("# of epochs", self.n_epochs.to_string()),
            ("Seed", self.seed.to_string()),
            ("Class weight", class_weight),
        ]
    }


    fn hyperparameters(&self) -> Hyperparameters {
        Hyperparameters {
            learning_rate: self.learning_rate,
            n_epochs: self.n_epochs,
            seed: self.seed,
        }
    }


    /// Train a [`PerceptronClassifier`] on `sample`.
    /// The weights and the bias start from zero.
    ///
    /// Fails if
    /// - the learning rate or the number of epochs is invalid,
    /// - `sample` is empty or has no binary target,
    /// - the class weighting cannot be resolved for the target.
    pub fn fit(&self, sample: &Sample) -> Result<PerceptronClassifier> {
        checker::check_learning_rate(self.learning_rate)?;
        checker::check_n_epochs(self.n_epochs)?;
        checker::check_sample(sample)?;

        let target = sample.binary_target()?;
        let class_weights = self.class_weight.resolve(&target)?;

        let rows = sample.rows();
        let n_feature = sample.shape().1;
        let mut f = PerceptronClassifier::zeros(
            n_feature, self.hyperparameters(), class_weights
        );

        let logger = TrainingLogger::new(self.print_every);
        logger.print_stats(self.name(), &self.info());

        let mut time_acc = 0;
        for epoch in 1..=self.n_epochs {
            let now = Instant::now();

            let errors = train_epoch(
                &mut f.weights,
                &mut f.bias,
                &rows,
                &target,
                self.learning_rate,
                &class_weights,
            );
            let accuracy = accuracy_on(&f.weights, f.bias, &rows, &target);
            f.history.push(errors, accuracy);

            time_acc += now.elapsed().as_millis();
            logger.print_epoch(epoch, self.n_epochs, errors, accuracy, time_acc);
        }

        Ok(f)
    }
}


impl Default for Perceptron {
    fn default() -> Self {
        Self::init()
    }
}


/// One pass over `rows` in order.
/// Returns the number of examples that caused an update.
fn train_epoch(
    weights: &mut [f64],
    bias: &mut f64,
    rows: &[Vec<f64>],
    target: &[i64],
    learning_rate: f64,
    class_weights: &ClassWeights,
) -> usize
{
    let mut errors = 0;
    for (x, &y) in rows.iter().zip(target) {
        if update(weights, bias, x, y, learning_rate, class_weights) {
            errors += 1;
        }
    }
    errors
}


/// The update rule shared by the plain and the weighted variants.
/// Returns `true` if `weights` and `bias` changed.
#[inline]
fn update(
    weights: &mut [f64],
    bias: &mut f64,
    x: &[f64],
    y: i64,
    learning_rate: f64,
    class_weights: &ClassWeights,
) -> bool
{
    let score = utils::inner_product(x, weights) + *bias;
    let predicted = activation::step(score);
    let delta = learning_rate * (y - predicted) as f64 * class_weights.get(y);

    if delta == 0.0 { return false; }

    weights.iter_mut()
        .zip(x)
        .for_each(|(w, xi)| { *w += delta * xi; });
    *bias += delta;
    true
}


/// Fraction of `rows` classified correctly by `(weights, bias)`.
fn accuracy_on(
    weights: &[f64],
    bias: f64,
    rows: &[Vec<f64>],
    target: &[i64],
) -> f64
{
    let n_correct = rows.iter()
        .zip(target)
        .filter(|(x, y)| {
            activation::step(utils::inner_product(x, weights) + bias) == **y
        })
        .count();
    n_correct as f64 / rows.len() as f64
}
