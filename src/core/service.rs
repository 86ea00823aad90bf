use crate::core::{Classifier, FeatureVector, Prediction};
use crate::utils::error::ClassifyError;
use std::sync::Arc;

/// Owns the loaded model and turns raw request bodies into predictions.
#[derive(Clone)]
pub struct ClassifierService {
    model: Arc<dyn Classifier>,
}

impl ClassifierService {
    pub fn new(model: Arc<dyn Classifier>) -> Self {
        Self { model }
    }

    pub fn classify(&self, body: &[u8]) -> Result<Prediction, ClassifyError> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        let features = FeatureVector::from_json(&value)?;
        self.classify_features(&features)
    }

    pub fn classify_features(&self, features: &FeatureVector) -> Result<Prediction, ClassifyError> {
        tracing::debug!("Classifying {:?}", features);
        self.model.predict(features)
    }

    pub fn model(&self) -> &dyn Classifier {
        self.model.as_ref()
    }
}
