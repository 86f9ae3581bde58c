use medlingo::presentation::config::{Environment, LlmProvider, LlmSettings};
use medlingo::presentation::Settings;

#[test]
fn given_known_names_when_parsing_environment_then_maps_variants() {
    assert_eq!(
        Environment::try_from("Production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("dev".to_string()), Ok(Environment::Local));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_no_settings_file_when_loading_then_defaults_apply() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.database.path, "chat.db");
    assert_eq!(settings.retention.window_hours, 1);
    assert_eq!(settings.llm.chat_model, "gpt-4");
    assert_eq!(settings.llm.transcription_model, "whisper-1");
    assert_eq!(settings.storage.upload_dir, "uploads");
}

#[test]
fn given_blank_api_key_when_reading_then_treated_as_missing() {
    let settings = LlmSettings {
        provider: LlmProvider::OpenAi,
        api_key: Some("  ".to_string()),
        base_url: None,
        chat_model: "gpt-4".to_string(),
        transcription_model: "whisper-1".to_string(),
    };

    assert_eq!(settings.api_key(), None);
}
