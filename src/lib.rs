#![warn(missing_docs)]

//!
//! A crate that provides perceptron classifiers
//! for diabetes risk prediction.
//!
//! This crate includes two variants of the perceptron.
//!
//! - Perceptron
//!     The classic online perceptron.
//!     Each misclassified example moves the weights and the bias
//!     by the learning rate times the prediction error.
//!
//!
//! - Weighted perceptron
//!     The same routine where each update is scaled by
//!     the weight of the true class of the example.
//!     With `ClassWeight::Balanced`, the minority class gets
//!     a larger weight, which improves its recall
//!     on an imbalanced sample.
//!
//!
//! Before training and before every prediction,
//! a sample goes through the same preprocessing pipeline:
//! the invalid zeros of some features are replaced by the median
//! of the non-zero values, then every feature is standardized.
//!
//! # Example
//! ```ignore
//! use miniperceptrons::prelude::*;
//!
//! let train = Sample::from_dataframe(data, target)?;
//!
//! let preprocessor = Preprocessor::fit(ZeroImputer::diabetes(), &train)?;
//! let train = preprocessor.preprocess(&train)?;
//!
//! let model = Perceptron::weighted(ClassWeight::Balanced)
//!     .learning_rate(0.01)
//!     .n_epochs(100)
//!     .print_every(10)
//!     .fit(&train)?;
//!
//! let predictions = model.predict_all(&train)?;
//! let metrics = evaluate(&predictions, &train.binary_target()?)?;
//! ```

pub mod error;
pub mod constants;
pub mod activation;
pub mod sample;
pub mod classifier;
pub mod perceptron;
pub mod preprocessing;
pub mod metrics;
pub mod serving;
pub mod research;
pub mod prelude;

mod common;


pub use error::{PerceptronError, Result};
pub use constants::*;

pub use sample::{Sample, SampleSummary, Feature};

pub use classifier::Classifier;

pub use perceptron::{
    Perceptron,
    PerceptronClassifier,
    Hyperparameters,
    ClassWeight,
    ClassWeights,
    TrainingHistory,
};

pub use preprocessing::{
    ZeroImputer,
    StandardScaler,
    Preprocessor,
    preprocess,
};

pub use metrics::{
    evaluate,
    Metrics,
    ConfusionMatrix,
    PredictionSummary,
    Label,
};

pub use serving::{
    ServingContext,
    ServingContextBuilder,
    RegisteredModel,
    ModelMetadata,
    ModelRecord,
    PredictionReport,
    ModelPrediction,
    PredictionOutcome,
    ModelInfo,
    ModelDescription,
};
