use serde::Serialize;

use crate::domain::{Message, format_timestamp};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: i64,
    pub role: String,
    pub text: String,
    pub translated_text: String,
    pub timestamp: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.as_i64(),
            role: message.role.as_str().to_string(),
            timestamp: format_timestamp(&message.timestamp),
            text: message.text,
            translated_text: message.translated_text,
        }
    }
}
