//! Preprocessing applied to a batch before it reaches a classifier.
//!
//! The pipeline is
//! ```text
//! raw sample -> ZeroImputer -> StandardScaler -> scaled sample
//! ```
//! and must be the same at training and inference time.
//!
//! **Note**
//! [`ZeroImputer`] computes its medians from the batch it transforms.
//! A batch at inference time is therefore imputed with its own statistics,
//! not with the ones of the training sample.
//! For a single-row batch, a zero stays zero.
//! The scaler, on the other hand, is fitted once and then frozen.

/// Defines the median imputer for invalid zeros.
pub mod imputer;

/// Defines the standard scaler.
pub mod scaler;

/// Defines the pipeline that chains the imputer and the scaler.
pub mod pipeline;


pub use imputer::ZeroImputer;
pub use scaler::StandardScaler;
pub use pipeline::{Preprocessor, preprocess};
