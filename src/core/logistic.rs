use crate::core::{Classifier, FeatureVector, Prediction, FEATURE_NAMES};
use crate::utils::error::{ClassifyError, Result, ServiceError};
use serde::Deserialize;

/// On-disk model artifact. `model_type` selects the variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
}

impl ModelArtifact {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<()> {
        match self {
            ModelArtifact::LogisticRegression(model) => model.validate(),
        }
    }

    pub fn into_classifier(self) -> Box<dyn Classifier> {
        match self {
            ModelArtifact::LogisticRegression(model) => Box::new(model),
        }
    }
}

/// Binary logistic regression, fitted offline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogisticRegression {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub classes: Vec<i64>,
}

impl LogisticRegression {
    /// 線性分數 z = b + Σ w_i * x_i
    pub fn decision_function(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.as_array())
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }

    fn validate(&self) -> Result<()> {
        if self.feature_names.len() != FEATURE_NAMES.len()
            || self
                .feature_names
                .iter()
                .zip(FEATURE_NAMES)
                .any(|(name, expected)| name != expected)
        {
            return Err(invalid(format!(
                "feature_names must be {:?}, got {:?}",
                FEATURE_NAMES, self.feature_names
            )));
        }

        if self.coefficients.len() != FEATURE_NAMES.len() {
            return Err(invalid(format!(
                "expected {} coefficients, got {}",
                FEATURE_NAMES.len(),
                self.coefficients.len()
            )));
        }

        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(invalid("coefficients and intercept must be finite".to_string()));
        }

        match self.classes.as_slice() {
            [negative, positive] if negative != positive => Ok(()),
            other => Err(invalid(format!(
                "expected two distinct class labels, got {:?}",
                other
            ))),
        }
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, features: &FeatureVector) -> std::result::Result<Prediction, ClassifyError> {
        let score = self.decision_function(features);

        // 與 scikit-learn 相同：分數嚴格大於 0 才是正類，NaN 歸負類
        let label = self
            .classes
            .get(usize::from(score > 0.0))
            .copied()
            .ok_or_else(|| ClassifyError::Model {
                message: format!("model has no label for score {:.4}", score),
            })?;

        tracing::debug!(
            "score={:.4} p(positive)={:.4} label={}",
            score,
            sigmoid(score),
            label
        );

        Ok(Prediction { prediction: label })
    }

    fn describe(&self) -> String {
        format!(
            "LogisticRegression({} features, classes {:?})",
            self.coefficients.len(),
            self.classes
        )
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn invalid(message: String) -> ServiceError {
    ServiceError::InvalidModelError { message }
}
