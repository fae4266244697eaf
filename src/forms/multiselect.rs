//! Checkbox-group selection over a remote-loaded option catalog.
//! Selections are option ids in string form; membership only, the
//! toggle order carries no meaning.

/// Apply one checkbox toggle: add the id when checked (if absent),
/// remove all its occurrences when unchecked.
pub fn toggle(selected: &mut Vec<String>, option_id: i64, checked: bool) {
    let id = option_id.to_string();
    if checked {
        if !selected.contains(&id) {
            selected.push(id);
        }
    } else {
        selected.retain(|s| s != &id);
    }
}
