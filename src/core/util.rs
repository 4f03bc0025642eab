//! Generic string helpers used across core modules.

/// True when `text` contains any of `needles`, ignoring case.
pub fn contains_any_ignore_case(text: &str, needles: &[&str]) -> bool {
    let haystack = text.to_lowercase();
    needles
        .iter()
        .any(|n| haystack.contains(&n.to_lowercase()))
}

/// Single-line preview of `text` for logs. Truncates to `max_len` chars with ellipsis.
pub fn preview(text: &str, max_len: usize) -> String {
    let s = text.trim().replace('\n', " ");
    if s.chars().count() <= max_len {
        return s;
    }
    let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
    format!("{}…", truncated)
}
