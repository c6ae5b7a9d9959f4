use std::collections::{HashMap, HashSet};

use crate::{Classifier, Preprocessor};
use crate::error::{Result, PerceptronError};
use super::metadata::ModelMetadata;
use super::context::{ServingContext, RegisteredModel};


/// A struct that builds [`ServingContext`].
///
/// Every component is checked once in [`ServingContextBuilder::build`],
/// so a built context never fails on its own configuration.
///
/// # Example
/// ```ignore
/// use miniperceptrons::prelude::*;
///
/// let metadata = ModelMetadata::from_json(&json)?;
/// let context = ServingContextBuilder::new()
///     .metadata(&metadata)
///     .preprocessor(preprocessor)
///     .model("perceptron", "Perceptron", perceptron)
///     .model("weighted_perceptron", "Weighted Perceptron", weighted)
///     .build()?;
/// ```
#[derive(Default)]
pub struct ServingContextBuilder {
    feature_names: Option<Vec<String>>,
    preprocessor: Option<Preprocessor>,
    models: Vec<(String, String, Box<dyn Classifier + Send + Sync>)>,
    descriptions: HashMap<String, String>,
    metrics: HashMap<String, serde_json::Value>,
    best_model: Option<String>,
    preprocessing_steps: Vec<String>,
}


impl ServingContextBuilder {
    /// Construct an empty builder.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the feature names in column order.
    pub fn feature_names<I, S>(mut self, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let names = names.into_iter()
            .map(Into::into)
            .collect();
        self.feature_names = Some(names);
        self
    }


    /// Set the fitted preprocessing pipeline.
    pub fn preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = Some(preprocessor);
        self
    }


    /// Register `classifier` as `name`.
    pub fn model<N, D, C>(mut self, name: N, display_name: D, classifier: C)
        -> Self
        where N: Into<String>,
              D: Into<String>,
              C: Classifier + Send + Sync + 'static,
    {
        let classifier: Box<dyn Classifier + Send + Sync> = Box::new(classifier);
        self.models.push((name.into(), display_name.into(), classifier));
        self
    }


    /// Attach a description to the model named `name`.
    pub fn description<N, D>(mut self, name: N, description: D) -> Self
        where N: Into<String>,
              D: Into<String>,
    {
        self.descriptions.insert(name.into(), description.into());
        self
    }


    /// Attach the evaluation results recorded at training time
    /// to the model named `name`.
    pub fn metrics<N: Into<String>>(mut self, name: N, metrics: serde_json::Value)
        -> Self
    {
        self.metrics.insert(name.into(), metrics);
        self
    }


    /// Set the name of the best model.
    pub fn best_model<N: Into<String>>(mut self, name: N) -> Self {
        self.best_model = Some(name.into());
        self
    }


    /// Set the descriptions of the preprocessing steps.
    pub fn preprocessing_steps<I, S>(mut self, steps: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        self.preprocessing_steps = steps.into_iter()
            .map(Into::into)
            .collect();
        self
    }


    /// Take the feature names, the descriptions, the recorded metrics,
    /// the best model and the preprocessing steps from `metadata`.
    pub fn metadata(mut self, metadata: &ModelMetadata) -> Self {
        self.feature_names = Some(metadata.feature_names.clone());
        for record in &metadata.models {
            self.descriptions.insert(
                record.model_name.clone(), record.description.clone()
            );
            self.metrics.insert(
                record.model_name.clone(), record.metrics.clone()
            );
        }
        if let Some(best) = &metadata.best_model {
            self.best_model = Some(best.clone());
        }
        self.preprocessing_steps = metadata.preprocessing_steps.clone();
        self
    }


    /// Build a [`ServingContext`].
    /// This method consumes `self`.
    ///
    /// Fails if the feature names or the preprocessor are missing,
    /// if no model is registered, if a width disagrees with
    /// the number of features, if a name is registered twice,
    /// or if the best model is not registered.
    pub fn build(self) -> Result<ServingContext> {
        let feature_names = self.feature_names
            .ok_or(PerceptronError::MissingComponent("feature names"))?;
        let preprocessor = self.preprocessor
            .ok_or(PerceptronError::MissingComponent("preprocessor"))?;

        let n_feature = feature_names.len();
        if n_feature == 0 {
            return Err(PerceptronError::MissingComponent("feature names"));
        }
        if self.models.is_empty() {
            return Err(PerceptronError::MissingComponent("models"));
        }

        let width = preprocessor.scaler().n_feature();
        if width != n_feature {
            return Err(PerceptronError::ShapeMismatch {
                what: "scaler",
                got: width,
                expected: n_feature,
            });
        }


        let mut seen = HashSet::new();
        let mut descriptions = self.descriptions;
        let mut metrics = self.metrics;
        let mut models = Vec::with_capacity(self.models.len());
        for (name, display_name, classifier) in self.models {
            if !seen.insert(name.clone()) {
                return Err(PerceptronError::DuplicateModel(name));
            }

            if classifier.n_feature() != n_feature {
                return Err(PerceptronError::ShapeMismatch {
                    what: "model weights",
                    got: classifier.n_feature(),
                    expected: n_feature,
                });
            }

            let description = descriptions.remove(&name)
                .unwrap_or_default();
            let recorded = metrics.remove(&name)
                .unwrap_or_default();
            models.push(RegisteredModel {
                name, display_name, description, metrics: recorded, classifier,
            });
        }


        if let Some(best) = &self.best_model {
            if !seen.contains(best) {
                return Err(PerceptronError::UnknownModel(best.clone()));
            }
        }


        let context = ServingContext {
            feature_names,
            preprocessor,
            models,
            best_model: self.best_model,
            preprocessing_steps: self.preprocessing_steps,
        };
        Ok(context)
    }
}
