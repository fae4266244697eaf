//! Comma-separated text input <-> ordered string sequence.

/// Split on comma, trim each segment, drop empty segments. First-occurrence
/// order is preserved and exact duplicates are kept.
pub fn parse(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Join for display. `parse(format(s)) == s` for sequences free of embedded
/// commas and whitespace-only entries.
pub fn format(values: &[String]) -> String {
    values.join(", ")
}
