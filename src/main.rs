use anyhow::Result;
use tracing::info;
use trustybot_backend::{config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file is optional; deployments set real environment variables.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .json()
        .init();

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("TrustyBot backend starting on port {}", config.port);
    info!("API endpoint: /api/chat, health check: /api/health");

    server::run(config).await?;

    Ok(())
}
