const MAX_VISIBLE_CHARS: usize = 40;

const SECRET_PATTERNS: [&str; 4] = ["Bearer ", "api_key=", "token=", "sk-"];

const REDACTED: &str = "[REDACTED]";

/// Shortens user-provided clinical text before it reaches the logs.
///
/// Only a short prefix is kept and anything resembling a credential is masked.
pub fn redact_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let preview = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        trimmed.to_string()
    };

    mask_secrets(&preview)
}

fn mask_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for pattern in SECRET_PATTERNS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(pattern) {
            let at = search_from + found;
            let start = at + pattern.len();
            if !starts_token(&result, at) {
                search_from = start;
                continue;
            }
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| start + i)
                .unwrap_or(result.len());
            result.replace_range(start..end, REDACTED);
            search_from = start + REDACTED.len();
        }
    }

    result
}

/// Patterns only count at a word boundary, so `risk-free` stays readable.
fn starts_token(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}
