use crate::core::logistic::ModelArtifact;
use crate::core::{Classifier, ModelStore};
use crate::utils::error::Result;
use std::sync::Arc;

/// Read, deserialize and validate the artifact behind `store`.
///
/// Called once before the listener is bound; any error here is fatal.
pub async fn load_model<S: ModelStore>(store: &S) -> Result<Arc<dyn Classifier>> {
    tracing::info!("📦 Loading model from {}", store.location());

    let bytes = store.read_artifact().await?;
    tracing::debug!("Read {} bytes of model artifact", bytes.len());

    let classifier: Arc<dyn Classifier> = ModelArtifact::from_slice(&bytes)?
        .into_classifier()
        .into();

    tracing::info!("✅ Model loaded: {}", classifier.describe());
    Ok(classifier)
}
