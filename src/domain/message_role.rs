use std::fmt;

const DEFAULT_ROLE: &str = "user";

/// Free-text speaker label such as "doctor" or "patient".
///
/// Not validated against a fixed set; callers may send any label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageRole(String);

impl MessageRole {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    /// Uses the default label when the request carried none.
    pub fn or_default(role: Option<String>) -> Self {
        role.map(Self).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageRole {
    fn default() -> Self {
        Self(DEFAULT_ROLE.to_string())
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
