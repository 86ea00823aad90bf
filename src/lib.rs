pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use config::{local::LocalModelStore, ServiceConfig};
pub use crate::core::{loader::load_model, service::ClassifierService};
pub use domain::model::{FeatureVector, Prediction};
pub use utils::error::{ClassifyError, Result, ServiceError};
