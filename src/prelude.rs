//! Exports the standard algorithms, traits and types.
//!
pub use crate::perceptron::{
    // Training
    Perceptron,
    ClassWeight,


    // Fitted model
    PerceptronClassifier,
    Hyperparameters,
    ClassWeights,
    TrainingHistory,
};


pub use crate::classifier::Classifier;


pub use crate::sample::{
    Sample,
    SampleSummary,
    Feature,
};


pub use crate::preprocessing::{
    ZeroImputer,
    StandardScaler,
    Preprocessor,
    preprocess,
};


pub use crate::metrics::{
    evaluate,
    Metrics,
    ConfusionMatrix,
    PredictionSummary,
    Label,
};


pub use crate::serving::{
    ServingContext,
    ServingContextBuilder,
    ModelMetadata,
    PredictionReport,
    PredictionOutcome,
    ModelInfo,
};


pub use crate::constants::{
    DIABETES_FEATURES,
    ZERO_INVALID_FEATURES,
    TARGET_FEATURE,
};


pub use crate::error::{PerceptronError, Result};
