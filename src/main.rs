use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use medlingo::infrastructure::audio::TranscriptionEngineFactory;
use medlingo::infrastructure::llm::LlmClientFactory;
use medlingo::infrastructure::observability::init_tracing;
use medlingo::infrastructure::persistence::SqliteMessageRepository;
use medlingo::infrastructure::storage::LocalUploadStore;
use medlingo::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings.logging, environment);

    let repository = SqliteMessageRepository::new(&settings.database.path);
    repository
        .prepare()
        .await
        .with_context(|| format!("Failed to prepare database at {}", settings.database.path))?;

    let llm_client = LlmClientFactory::create(&settings.llm)?;
    let transcription_engine = TranscriptionEngineFactory::create(&settings.llm)?;
    let upload_store = LocalUploadStore::new(PathBuf::from(&settings.storage.upload_dir))
        .context("Failed to prepare upload directory")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState::new(
        settings,
        llm_client,
        transcription_engine,
        Arc::new(upload_store),
        Arc::new(repository),
    );

    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
