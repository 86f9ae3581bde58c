use std::fmt::Display;

/// Prefix of every failure rendered into a stored or returned text field.
pub const ERROR_MARKER: &str = "Error:";

pub const NO_CONVERSATION: &str = "No conversation available";

pub fn translation_prompt(target_language: &str, text: &str) -> String {
    format!("Translate to {target_language}: {text}")
}

pub fn summary_prompt(conversation: &str) -> String {
    format!(
        "Summarize medical conversation including symptoms, diagnosis, medicines, follow-up:\n{conversation}"
    )
}

/// Renders an adapter failure as text for the success payload.
pub fn render_failure(error: &impl Display) -> String {
    format!("{ERROR_MARKER} {error}")
}
