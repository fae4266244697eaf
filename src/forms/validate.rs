//! Pure per-field validators. Each returns `None` when the value is
//! acceptable, or a user-facing message. Length limits count characters,
//! not bytes.

/// Required text, optionally capped at `max` characters.
pub fn required_text(
    value: &str,
    required_msg: &str,
    max: Option<(usize, &str)>,
) -> Option<String> {
    if value.is_empty() {
        return Some(required_msg.to_string());
    }
    too_long(value, max)
}

fn too_long(value: &str, max: Option<(usize, &str)>) -> Option<String> {
    if let Some((limit, msg)) = max {
        if value.chars().count() > limit {
            return Some(msg.to_string());
        }
    }
    None
}

/// Strictly positive number, optionally capped at `max`.
pub fn positive_number(
    value: f64,
    required_msg: &str,
    max: Option<(f64, &str)>,
) -> Option<String> {
    if value <= 0.0 {
        return Some(required_msg.to_string());
    }
    if let Some((limit, msg)) = max {
        if value > limit {
            return Some(msg.to_string());
        }
    }
    None
}

/// At least one entry selected or entered.
pub fn non_empty_list(values: &[String], required_msg: &str) -> Option<String> {
    if values.is_empty() {
        return Some(required_msg.to_string());
    }
    None
}

/// Optional list with an upper bound on the number of entries.
pub fn max_list_len(values: &[String], limit: usize, msg: &str) -> Option<String> {
    if values.len() > limit {
        return Some(msg.to_string());
    }
    None
}

/// A file must be selected.
pub fn required_image(present: bool, required_msg: &str) -> Option<String> {
    if present { None } else { Some(required_msg.to_string()) }
}
