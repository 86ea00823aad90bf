pub mod local;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const MODEL_RELATIVE_PATH: &str = "training_models/psb_lr_model.json";

/// Where the service listens and which artifact it loads.
///
/// The binary always runs with [`ServiceConfig::default`]; other values exist for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model_path: default_model_path(),
        }
    }
}

impl ServiceConfig {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_path("model_path", &self.model_path)?;
        Ok(())
    }
}

/// 模型檔位置固定在 crate 目錄之下
pub fn default_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(MODEL_RELATIVE_PATH)
}
