//! The serving context.
//!
//! A [`ServingContext`] bundles everything a prediction request needs:
//! the feature order, the fitted [`Preprocessor`](crate::Preprocessor)
//! and the registered models.
//! It is built once by [`ServingContextBuilder`] and never mutated,
//! so it can be shared between threads behind an `Arc`.

/// Defines the metadata document describing the trained models.
pub mod metadata;

/// Defines the builder of [`ServingContext`].
pub mod builder;

/// Defines [`ServingContext`].
pub mod context;

/// Defines the results returned by [`ServingContext`].
pub mod report;


pub use metadata::{ModelMetadata, ModelRecord};
pub use builder::ServingContextBuilder;
pub use context::{ServingContext, RegisteredModel};
pub use report::{
    PredictionReport,
    ModelPrediction,
    PredictionOutcome,
    ModelInfo,
    ModelDescription,
};
