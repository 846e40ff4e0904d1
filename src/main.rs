use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use phrase_translator::config::Config;
use phrase_translator::openai::OpenAiClient;
use phrase_translator::server;
use phrase_translator::translator::TranslationService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("phrase_translator=info".parse()?),
        )
        .init();

    info!("Starting phrase translator");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Timeout for the completion call is imposed here, around the client;
    // the translation core enforces none itself.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("Failed to create HTTP client")?;

    let completion = Arc::new(OpenAiClient::new(client, &config));
    let service = TranslationService::new(completion);

    let app = server::router(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
