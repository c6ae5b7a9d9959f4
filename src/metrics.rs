//! Evaluation of binary predictions against ground truth.
//! The positive class is the label `1`.
//!
//! A zero denominator never raises an error;
//! the corresponding rate is defined as `0`.
use serde::{Serialize, Deserialize};

use crate::common::{checker, utils};
use crate::error::Result;


/// Counts of the four prediction outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Predicted `1`, labeled `1`.
    pub tp: usize,
    /// Predicted `0`, labeled `0`.
    pub tn: usize,
    /// Predicted `1`, labeled `0`.
    pub fp: usize,
    /// Predicted `0`, labeled `1`.
    #[serde(rename = "fn")]
    pub fn_: usize,
}


/// Evaluation result of a batch of predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Fraction of correct predictions.
    pub accuracy: f64,
    /// `tp / (tp + fp)`.
    pub precision: f64,
    /// `tp / (tp + fn)`.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1_score: f64,
    /// The outcome counts.
    pub confusion_matrix: ConfusionMatrix,
}


/// Number of predictions per class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionSummary {
    /// Predictions equal to `1`.
    pub diabetic: usize,
    /// Predictions equal to `0`.
    pub non_diabetic: usize,
}


/// Human-readable name of a predicted label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// The label `0`.
    #[serde(rename = "Non-Diabetic")]
    NonDiabetic,
    /// The label `1`.
    #[serde(rename = "Diabetic")]
    Diabetic,
}


impl Label {
    /// Any non-`1` label is [`Label::NonDiabetic`].
    pub fn from_prediction(prediction: i64) -> Self {
        if prediction == 1 { Self::Diabetic } else { Self::NonDiabetic }
    }


    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Diabetic => "Diabetic",
            Self::NonDiabetic => "Non-Diabetic",
        }
    }
}


impl ConfusionMatrix {
    /// Count the outcomes.
    /// Entries are compared pairwise up to the shorter length.
    pub fn from_predictions(predictions: &[i64], labels: &[i64]) -> Self {
        let mut matrix = Self::default();
        predictions.iter()
            .zip(labels)
            .for_each(|(&p, &y)| {
                match (p == 1, y == 1) {
                    (true, true) => matrix.tp += 1,
                    (false, false) => matrix.tn += 1,
                    (true, false) => matrix.fp += 1,
                    (false, true) => matrix.fn_ += 1,
                }
            });
        matrix
    }


    /// Total number of counted pairs.
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }


    /// `tp / (tp + fp)`, or `0` if nothing is predicted positive.
    pub fn precision(&self) -> f64 {
        utils::ratio_or_zero(self.tp as f64, (self.tp + self.fp) as f64)
    }


    /// `tp / (tp + fn)`, or `0` if nothing is labeled positive.
    pub fn recall(&self) -> f64 {
        utils::ratio_or_zero(self.tp as f64, (self.tp + self.fn_) as f64)
    }


    /// `2 * precision * recall / (precision + recall)`, or `0`.
    pub fn f1_score(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        utils::ratio_or_zero(2.0 * precision * recall, precision + recall)
    }
}


impl PredictionSummary {
    /// Count the predictions per class.
    pub fn from_predictions(predictions: &[i64]) -> Self {
        let diabetic = predictions.iter()
            .filter(|&&p| p == 1)
            .count();
        Self { diabetic, non_diabetic: predictions.len() - diabetic }
    }
}


/// Evaluate `predictions` against `labels`.
/// Fails if the two slices are empty or have different lengths.
pub fn evaluate(predictions: &[i64], labels: &[i64]) -> Result<Metrics> {
    checker::check_aligned(predictions, labels)?;

    let n_correct = predictions.iter()
        .zip(labels)
        .filter(|(p, y)| p == y)
        .count();
    let accuracy = n_correct as f64 / predictions.len() as f64;

    let confusion_matrix = ConfusionMatrix::from_predictions(predictions, labels);
    let metrics = Metrics {
        accuracy,
        precision: confusion_matrix.precision(),
        recall: confusion_matrix.recall(),
        f1_score: confusion_matrix.f1_score(),
        confusion_matrix,
    };
    Ok(metrics)
}
