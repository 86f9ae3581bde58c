#![allow(dead_code)]

use std::path::Path;

use axum::Router;
use axum::routing::MethodRouter;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use medlingo::presentation::config::{
    DatabaseSettings, LlmProvider, LlmSettings, LoggingSettings, RetentionSettings,
    ServerSettings, Settings, StorageSettings,
};

pub fn test_settings(upload_dir: &Path) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 5000,
        },
        database: DatabaseSettings {
            path: "unused.db".to_string(),
        },
        llm: LlmSettings {
            provider: LlmProvider::Mock,
            api_key: Some("test-key".to_string()),
            base_url: None,
            chat_model: "gpt-4".to_string(),
            transcription_model: "whisper-1".to_string(),
        },
        retention: RetentionSettings { window_hours: 1 },
        storage: StorageSettings {
            upload_dir: upload_dir.to_string_lossy().into_owned(),
            max_upload_size_bytes: 1024 * 1024,
        },
        logging: LoggingSettings {
            level: "debug".to_string(),
            enable_json: false,
        },
    }
}

/// Serves `route` at `path` on an ephemeral port until the sender is used.
pub async fn start_mock_provider(
    path: &str,
    route: MethodRouter,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(path, route);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}
