//! Column names of the diabetes dataset and the default hyperparameters.

/// The feature columns in the order the models were trained on.
pub const DIABETES_FEATURES: [&str; 8] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// Features for which a value of `0` is physiologically impossible
/// and therefore encodes a missing value.
pub const ZERO_INVALID_FEATURES: [&str; 5] = [
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
];

/// Name of the label column.
pub const TARGET_FEATURE: &str = "Outcome";

/// Number of rows in the preview of [`Sample::summary`](crate::Sample::summary).
pub const DATA_PREVIEW_ROWS: usize = 10;

/// Learning rate set as default.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
/// Number of epochs set as default.
pub const DEFAULT_N_EPOCHS: usize = 100;
/// Seed set as default.
pub const DEFAULT_SEED: u64 = 42;
