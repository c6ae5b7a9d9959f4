//! Provides the perceptron and its class-weighted variant.
//!
//! Both variants share a single training routine.
//! The weighted variant is a [`Perceptron`] configured with
//! a [`ClassWeight`] other than [`ClassWeight::Uniform`].

/// Defines the weighting strategy over classes.
pub mod class_weight;

/// Defines the per-epoch training history.
pub mod history;

/// Defines the fitted classifier.
pub mod perceptron_classifier;

/// Defines the training algorithm.
pub mod perceptron_algorithm;


pub use class_weight::{ClassWeight, ClassWeights};
pub use history::TrainingHistory;
pub use perceptron_classifier::{PerceptronClassifier, Hyperparameters};
pub use perceptron_algorithm::Perceptron;
