use std::fmt;

use uuid::Uuid;

const FALLBACK_NAME: &str = "upload";

/// Location of an uploaded blob inside the scratch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPath(String);

impl UploadPath {
    /// Builds a collision-free name from the client-supplied file name.
    pub fn for_upload(file_name: &str) -> Self {
        Self(format!("{}_{}", Uuid::new_v4(), sanitize_file_name(file_name)))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps ASCII alphanumerics, `.`, `-` and `_`; drops any directory part.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '_');

    if cleaned.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

