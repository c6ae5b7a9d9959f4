use serde::{Serialize, Deserialize};


/// Per-epoch record of a training run.
/// Both vectors have one entry per epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    pub(crate) errors_per_epoch: Vec<usize>,
    pub(crate) accuracy_per_epoch: Vec<f64>,
}


impl TrainingHistory {
    /// Construct an empty history.
    pub fn new() -> Self {
        Self::default()
    }


    pub(crate) fn with_capacity(n_epochs: usize) -> Self {
        Self {
            errors_per_epoch: Vec::with_capacity(n_epochs),
            accuracy_per_epoch: Vec::with_capacity(n_epochs),
        }
    }


    pub(crate) fn push(&mut self, errors: usize, accuracy: f64) {
        self.errors_per_epoch.push(errors);
        self.accuracy_per_epoch.push(accuracy);
    }


    /// Number of misclassified (updated) examples in each epoch.
    pub fn errors_per_epoch(&self) -> &[usize] {
        &self.errors_per_epoch[..]
    }


    /// Training accuracy after each epoch.
    pub fn accuracy_per_epoch(&self) -> &[f64] {
        &self.accuracy_per_epoch[..]
    }


    /// Number of recorded epochs.
    pub fn len(&self) -> usize {
        self.errors_per_epoch.len()
    }


    /// Returns `true` if no epoch is recorded.
    pub fn is_empty(&self) -> bool {
        self.errors_per_epoch.is_empty()
    }


    /// Training accuracy after the last epoch.
    pub fn final_accuracy(&self) -> Option<f64> {
        self.accuracy_per_epoch.last().copied()
    }
}
