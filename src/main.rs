use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use medbridge::providers::{ChatTranslationClient, WhisperApiClient};
use medbridge::{create_router, AppState, Config};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "medbridge", about = "Healthcare interpreter service")]
struct Args {
    /// Path to a config file (environment variables override it)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(args.config.as_deref())?;

    info!("{} v0.1.0", cfg.service.name);

    let transcription = Arc::new(WhisperApiClient::new(
        cfg.transcription.endpoint.clone(),
        cfg.transcription.api_key.clone(),
        cfg.transcription.model.clone(),
    )?);

    let translation = Arc::new(ChatTranslationClient::new(
        cfg.translation.endpoint.clone(),
        cfg.translation.deployment.clone(),
        cfg.translation.api_version.clone(),
        cfg.translation.api_key.clone(),
    )?);

    let state = AppState::new(transcription, translation);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("HTTP server listening on {}", addr);
    info!("Transcription model: {}", cfg.transcription.model);

    axum::serve(listener, router).await?;

    Ok(())
}
