use medlingo::application::ports::{LlmClient, TranscriptionEngine};
use medlingo::infrastructure::audio::{MOCK_TRANSCRIPT, TranscriptionEngineFactory};
use medlingo::infrastructure::llm::{LlmClientFactory, ProviderFactoryError};
use medlingo::presentation::config::{LlmProvider, LlmSettings};

fn llm_settings(provider: LlmProvider, api_key: Option<&str>) -> LlmSettings {
    LlmSettings {
        provider,
        api_key: api_key.map(str::to_string),
        base_url: None,
        chat_model: "gpt-4".to_string(),
        transcription_model: "whisper-1".to_string(),
    }
}

#[test]
fn given_openai_provider_without_key_when_creating_clients_then_fails() {
    let settings = llm_settings(LlmProvider::OpenAi, None);

    assert!(matches!(
        LlmClientFactory::create(&settings),
        Err(ProviderFactoryError::MissingApiKey)
    ));
    assert!(matches!(
        TranscriptionEngineFactory::create(&settings),
        Err(ProviderFactoryError::MissingApiKey)
    ));
}

#[test]
fn given_openai_provider_with_key_when_creating_clients_then_succeeds() {
    let settings = llm_settings(LlmProvider::OpenAi, Some("sk-test"));

    assert!(LlmClientFactory::create(&settings).is_ok());
    assert!(TranscriptionEngineFactory::create(&settings).is_ok());
}

#[tokio::test]
async fn given_mock_provider_when_completing_and_transcribing_then_answers_offline() {
    let settings = llm_settings(LlmProvider::Mock, None);
    let llm = LlmClientFactory::create(&settings).unwrap();
    let engine = TranscriptionEngineFactory::create(&settings).unwrap();

    let translation = llm.complete("Translate to es: Hello").await.unwrap();
    let transcript = engine.transcribe(b"audio", "note.wav").await.unwrap();

    assert_eq!(translation, "[mock] Translate to es: Hello");
    assert_eq!(transcript, MOCK_TRANSCRIPT);
}
