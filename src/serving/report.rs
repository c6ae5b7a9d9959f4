use serde::Serialize;

use crate::metrics::{Metrics, PredictionSummary, Label};


/// Result of [`ServingContext::predict`](super::ServingContext::predict).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    /// One entry per requested model, in request order.
    pub results: Vec<ModelPrediction>,
    /// Number of examples in the batch.
    pub num_samples: usize,
    /// `true` if the batch carried labels.
    pub has_ground_truth: bool,
}


/// Predictions of a single model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelPrediction {
    /// Registry name of the model.
    pub model_name: String,
    /// Display name of the model.
    pub model_display_name: String,
    /// The predictions, evaluated if labels were given.
    #[serde(flatten)]
    pub outcome: PredictionOutcome,
}


/// Predictions with or without evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionOutcome {
    /// The batch carried labels.
    Evaluated {
        /// One label per example.
        predictions: Vec<i64>,
        /// Evaluation against the labels.
        metrics: Metrics,
        /// Number of predictions per class.
        prediction_summary: PredictionSummary,
    },
    /// The batch carried no labels.
    Unlabeled {
        /// One label per example.
        predictions: Vec<i64>,
        /// Display name of each predicted label.
        prediction_labels: Vec<Label>,
    },
}


impl PredictionOutcome {
    /// Returns the predicted labels.
    pub fn predictions(&self) -> &[i64] {
        match self {
            Self::Evaluated { predictions, .. } => &predictions[..],
            Self::Unlabeled { predictions, .. } => &predictions[..],
        }
    }


    /// Returns the evaluation, if labels were given.
    pub fn metrics(&self) -> Option<&Metrics> {
        match self {
            Self::Evaluated { metrics, .. } => Some(metrics),
            Self::Unlabeled { .. } => None,
        }
    }
}


/// Description of the registered models.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    /// One entry per registered model, in registration order.
    pub models: Vec<ModelDescription>,
    /// Name of the best model, if known.
    pub best_model: Option<String>,
    /// Feature names in column order.
    pub feature_names: Vec<String>,
    /// Descriptions of the preprocessing steps.
    pub preprocessing_steps: Vec<String>,
}


/// Description of a registered model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescription {
    /// Registry name.
    pub name: String,
    /// Display name.
    pub display_name: String,
    /// Free-text description.
    pub description: String,
    /// Evaluation results recorded at training time.
    /// `null` if none were given.
    pub metrics: serde_json::Value,
}
