use crate::{Sample, Classifier, Preprocessor};
use crate::error::{Result, PerceptronError};
use crate::metrics::{self, PredictionSummary, Label};
use super::builder::ServingContextBuilder;
use super::report::*;


/// A fitted model registered under a name.
pub struct RegisteredModel {
    pub(crate) name: String,
    pub(crate) display_name: String,
    pub(crate) description: String,
    pub(crate) metrics: serde_json::Value,
    pub(crate) classifier: Box<dyn Classifier + Send + Sync>,
}


impl RegisteredModel {
    /// Registry name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }


    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }


    /// Evaluation results recorded at training time.
    pub fn metrics(&self) -> &serde_json::Value {
        &self.metrics
    }


    /// The fitted classifier.
    pub fn classifier(&self) -> &(dyn Classifier + Send + Sync) {
        self.classifier.as_ref()
    }
}


/// Immutable state shared by every prediction request.
/// See [`ServingContextBuilder`] for the construction.
///
/// # Example
/// ```ignore
/// use miniperceptrons::prelude::*;
///
/// let context = ServingContext::builder()
///     .feature_names(DIABETES_FEATURES)
///     .preprocessor(preprocessor)
///     .model("weighted_perceptron", "Weighted Perceptron", classifier)
///     .best_model("weighted_perceptron")
///     .build()?;
///
/// let report = context.predict(&["weighted_perceptron"], &test)?;
/// ```
pub struct ServingContext {
    pub(super) feature_names: Vec<String>,
    pub(super) preprocessor: Preprocessor,
    pub(super) models: Vec<RegisteredModel>,
    pub(super) best_model: Option<String>,
    pub(super) preprocessing_steps: Vec<String>,
}


impl ServingContext {
    /// Returns a new [`ServingContextBuilder`].
    pub fn builder() -> ServingContextBuilder {
        ServingContextBuilder::new()
    }


    /// Feature names in column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names[..]
    }


    /// The preprocessing pipeline.
    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }


    /// The registered models in registration order.
    pub fn models(&self) -> &[RegisteredModel] {
        &self.models[..]
    }


    /// Returns the model registered as `name`.
    pub fn model(&self, name: &str) -> Result<&RegisteredModel> {
        self.models.iter()
            .find(|model| model.name == name)
            .ok_or_else(|| PerceptronError::UnknownModel(name.to_string()))
    }


    /// Build a [`Sample`] whose columns follow the configured feature order.
    pub fn sample_from_rows<R: AsRef<[f64]>>(
        &self,
        rows: &[R],
        target: Option<&[f64]>,
    ) -> Result<Sample>
    {
        Sample::from_rows(&self.feature_names, rows, target)
    }


    /// Check that the columns of `sample` follow the configured order.
    fn check_columns(&self, sample: &Sample) -> Result<()> {
        let names = sample.feature_names();
        if names.len() != self.feature_names.len() {
            return Err(PerceptronError::ShapeMismatch {
                what: "features",
                got: names.len(),
                expected: self.feature_names.len(),
            });
        }

        let mismatch = names.iter()
            .zip(&self.feature_names)
            .position(|(got, expected)| got != expected);
        if let Some(index) = mismatch {
            return Err(PerceptronError::FeatureNameMismatch {
                index,
                got: names[index].to_string(),
                expected: self.feature_names[index].clone(),
            });
        }
        Ok(())
    }


    /// Preprocess `sample` once and run every model in `model_names`.
    ///
    /// If `sample` carries labels, each result holds the predictions,
    /// the metrics and the prediction summary.
    /// Otherwise each result holds the predictions and their names.
    pub fn predict<S: AsRef<str>>(
        &self,
        model_names: &[S],
        sample: &Sample,
    ) -> Result<PredictionReport>
    {
        self.check_columns(sample)?;

        let labels = if sample.has_target() {
            Some(sample.binary_target()?)
        } else {
            None
        };
        let scaled = self.preprocessor.preprocess(sample)?;

        let results = model_names.iter()
            .map(|name| -> Result<ModelPrediction> {
                let model = self.model(name.as_ref())?;
                let predictions = model.classifier.predict_all(&scaled)?;

                let outcome = match &labels {
                    Some(labels) => {
                        let metrics = metrics::evaluate(&predictions, labels)?;
                        let prediction_summary = PredictionSummary::from_predictions(&predictions);
                        PredictionOutcome::Evaluated {
                            predictions,
                            metrics,
                            prediction_summary,
                        }
                    },
                    None => {
                        let prediction_labels = predictions.iter()
                            .map(|&p| Label::from_prediction(p))
                            .collect();
                        PredictionOutcome::Unlabeled {
                            predictions,
                            prediction_labels,
                        }
                    },
                };

                Ok(ModelPrediction {
                    model_name: model.name.clone(),
                    model_display_name: model.display_name.clone(),
                    outcome,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let report = PredictionReport {
            results,
            num_samples: sample.shape().0,
            has_ground_truth: labels.is_some(),
        };
        Ok(report)
    }


    /// Describe the registered models.
    pub fn model_info(&self) -> ModelInfo {
        let models = self.models.iter()
            .map(|model| ModelDescription {
                name: model.name.clone(),
                display_name: model.display_name.clone(),
                description: model.description.clone(),
                metrics: model.metrics.clone(),
            })
            .collect();

        ModelInfo {
            models,
            best_model: self.best_model.clone(),
            feature_names: self.feature_names.clone(),
            preprocessing_steps: self.preprocessing_steps.clone(),
        }
    }
}
