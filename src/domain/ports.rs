use crate::domain::model::{FeatureVector, Prediction};
use crate::utils::error::{ClassifyError, Result};

/// A loaded model. Read-only after construction, shared across workers.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> std::result::Result<Prediction, ClassifyError>;

    /// Short human-readable description for startup logs.
    fn describe(&self) -> String;
}

pub trait ModelStore: Send + Sync {
    fn read_artifact(&self) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    fn location(&self) -> String;
}
