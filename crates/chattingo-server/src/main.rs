use std::sync::Arc;

use anyhow::Context;
use chattingo_auth::JwtValidator;
use chattingo_config::AppConfig;
use chattingo_server::create_router;
use tracing::info;

/// Config file looked up by `config` (any supported extension, optional).
const CONFIG_PATH: &str = "config/chattingo";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config: AppConfig =
        chattingo_config::load_config(CONFIG_PATH).context("Failed to load configuration")?;

    // Initialize logging
    chattingo_logging::init_with_level(&config.log_level);

    info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        base_api_url = chattingo_config::base_api_url(),
        "Starting chat backend"
    );

    let validator = Arc::new(
        JwtValidator::new(config.jwt_secret.as_bytes()).context("Invalid JWT secret")?,
    );
    let app = create_router(validator);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
