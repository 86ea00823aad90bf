pub mod loader;
pub mod logistic;
pub mod service;

pub use crate::domain::model::{FeatureVector, Prediction, FEATURE_NAMES};
pub use crate::domain::ports::{Classifier, ModelStore};
pub use crate::utils::error::Result;
