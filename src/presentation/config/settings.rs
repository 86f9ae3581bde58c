use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const LEGACY_API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "OPENAI_API_KEY"];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub llm: LlmSettings,
    pub retention: RetentionSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    pub chat_model: String,
    pub transcription_model: String,
}

impl LlmSettings {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetentionSettings {
    pub window_hours: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
    pub max_upload_size_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}` and `APP_*`
    /// variables (`APP_SERVER__PORT=8080`), in that order of precedence.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("database.path", "chat.db")?
            .set_default("llm.provider", "openai")?
            .set_default("llm.chat_model", "gpt-4")?
            .set_default("llm.transcription_model", "whisper-1")?
            .set_default("retention.window_hours", 1)?
            .set_default("storage.upload_dir", "uploads")?
            .set_default("storage.max_upload_size_bytes", 25 * 1024 * 1024)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?;

        if let Some(api_key) = legacy_api_key() {
            builder = builder.set_default("llm.api_key", api_key)?;
        }

        builder
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

fn legacy_api_key() -> Option<String> {
    LEGACY_API_KEY_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}
