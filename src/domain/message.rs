use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use super::{MessageId, MessageRole};

/// A stored exchange: the original text and its translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub role: MessageRole,
    pub text: String,
    pub translated_text: String,
    pub timestamp: DateTime<Utc>,
}

/// A message that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub role: MessageRole,
    pub text: String,
    pub translated_text: String,
    pub timestamp: DateTime<Utc>,
}

impl NewMessage {
    pub fn new(role: MessageRole, text: String, translated_text: String) -> Self {
        Self {
            role,
            text,
            translated_text,
            // Stored with microsecond precision; truncate so reads compare equal.
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }

    pub fn with_id(self, id: MessageId) -> Message {
        Message {
            id,
            role: self.role,
            text: self.text,
            translated_text: self.translated_text,
            timestamp: self.timestamp,
        }
    }
}

/// Fixed-width RFC 3339 rendering (`2026-10-19T08:15:30.123456+00:00`).
///
/// Every stored timestamp uses this exact shape so that comparing the TEXT
/// column lexically orders rows chronologically.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|ts| ts.with_timezone(&Utc))
}
