mod mock_transcription_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;

pub use mock_transcription_engine::{MOCK_TRANSCRIPT, MockTranscriptionEngine};
pub use openai_whisper_engine::{OpenAiWhisperEngine, audio_mime_type};
pub use transcription_engine_factory::TranscriptionEngineFactory;
