use serde::{Serialize, Deserialize};

use crate::error::Result;


/// Metadata written next to the trained models.
///
/// # Example
/// ```ignore
/// use miniperceptrons::ModelMetadata;
///
/// let json = std::fs::read_to_string("models/models_metadata.json")?;
/// let metadata = ModelMetadata::from_json(&json)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Feature names in training order.
    pub feature_names: Vec<String>,
    /// One record per trained model.
    #[serde(default)]
    pub models: Vec<ModelRecord>,
    /// Name of the best model.
    #[serde(default)]
    pub best_model: Option<String>,
    /// Descriptions of the preprocessing steps.
    #[serde(default)]
    pub preprocessing_steps: Vec<String>,
}


/// Metadata of a single trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Registry name of the model.
    pub model_name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Evaluation results recorded at training time, kept verbatim.
    #[serde(default)]
    pub metrics: serde_json::Value,
}


impl ModelMetadata {
    /// Parse the metadata from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let metadata = serde_json::from_str(json)?;
        Ok(metadata)
    }


    /// Serialize the metadata to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }


    /// Returns the record of the model named `name`.
    pub fn record(&self, name: &str) -> Option<&ModelRecord> {
        self.models.iter()
            .find(|record| record.model_name == name)
    }
}
