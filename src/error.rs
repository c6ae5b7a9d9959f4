//! Defines the error type used in this crate.
//!
//! Errors fall into three groups:
//! - configuration errors (bad hyperparameters, bad class weights,
//!   a class missing from a `balanced` weighting),
//! - shape errors (feature count mismatches, empty samples),
//! - errors wrapped from the crates this library depends on.
//!
//! Degenerate data such as an all-zero column or a zero denominator
//! in a metric is **not** an error.
//! Those cases have documented fallback values.
use thiserror::Error;


/// The result type used in this crate.
pub type Result<T> = std::result::Result<T, PerceptronError>;


/// The error type of this crate.
#[derive(Debug, Error)]
pub enum PerceptronError {
    /// A hyperparameter is out of its domain.
    #[error("invalid hyperparameter `{name}` = {value}: {reason}")]
    InvalidHyperparameter {
        /// Name of the hyperparameter.
        name: &'static str,
        /// The rejected value, formatted.
        value: String,
        /// Why the value is rejected.
        reason: &'static str,
    },

    /// `ClassWeight::Balanced` requires both classes in the target.
    #[error("class {label} does not appear in the target, cannot balance class weights")]
    MissingClass {
        /// The absent label.
        label: i64,
    },

    /// An explicit class weight mapping is malformed.
    #[error("invalid class weight for label {label}: {reason}")]
    InvalidClassWeight {
        /// The offending label.
        label: i64,
        /// Why the entry is rejected.
        reason: &'static str,
    },

    /// A target value is not `0` or `1`.
    #[error("target value {value} at row {row} is not a binary label (expected 0 or 1)")]
    NonBinaryLabel {
        /// Row index of the offending value.
        row: usize,
        /// The offending value.
        value: f64,
    },

    /// A column contains a missing (null) value.
    #[error("feature `{feature}` contains a null value")]
    NullValue {
        /// Name of the column.
        feature: String,
    },

    /// Training requires a target column.
    #[error("the target labels are not specified")]
    MissingTarget,

    /// Two things that must agree in size do not.
    #[error("shape mismatch for {what}: got {got}, expected {expected}")]
    ShapeMismatch {
        /// Human-readable context (e.g. "features", "labels").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// The sample has no rows or no columns.
    #[error("the sample is empty ({n_sample} rows, {n_feature} features)")]
    EmptySample {
        /// Number of rows.
        n_sample: usize,
        /// Number of columns.
        n_feature: usize,
    },

    /// A column name differs from the configured feature order.
    #[error("feature #{index} is named `{got}`, expected `{expected}`")]
    FeatureNameMismatch {
        /// Column index.
        index: usize,
        /// Observed name.
        got: String,
        /// Configured name.
        expected: String,
    },

    /// A scaler parameter is unusable.
    #[error("invalid scaler parameter for feature #{index}: {reason}")]
    InvalidScaler {
        /// Column index.
        index: usize,
        /// Why the value is rejected.
        reason: &'static str,
    },

    /// No column has the given name.
    #[error("feature `{0}` does not exist")]
    UnknownFeature(String),

    /// The requested model is not registered.
    #[error("model `{0}` is not registered")]
    UnknownModel(String),

    /// A model name is registered twice.
    #[error("model `{0}` is registered more than once")]
    DuplicateModel(String),

    /// A builder was asked to build without a required component.
    #[error("{0} is not specified")]
    MissingComponent(&'static str),

    /// Error raised by `polars`.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),

    /// Error raised by `serde_json`.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error raised while drawing a plot.
    #[error("failed to draw the plot: {0}")]
    Plot(String),
}
