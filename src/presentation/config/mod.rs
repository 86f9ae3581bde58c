mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, LlmProvider, LlmSettings, LoggingSettings, RetentionSettings,
    ServerSettings, Settings, StorageSettings,
};
