use anyhow::Context;
use psb_classifier::core::ModelStore;
use psb_classifier::http::server::build_server;
use psb_classifier::utils::{logger, validation::Validate};
use psb_classifier::{load_model, ClassifierService, LocalModelStore, ServiceConfig};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    logger::init_service_logger();

    tracing::info!("Server is starting...");

    let config = ServiceConfig::default();
    config
        .validate()
        .context("invalid service configuration")?;

    // 模型必須在綁定 port 之前載入完成
    let store = LocalModelStore::new(config.model_path.clone());
    let model = match load_model(&store).await {
        Ok(model) => model,
        Err(e) => {
            tracing::error!("❌ Failed to load model from {}: {}", store.location(), e);
            return Err(e).context("model artifact could not be loaded");
        }
    };

    let listener = TcpListener::bind(config.bind_address())
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    build_server(listener, ClassifierService::new(model))?.await?;

    tracing::info!("Server stopped");
    Ok(())
}
