//! Avatar label derived from the provider's display name

/// Label shown when the user has no display name
pub const DEFAULT_AVATAR_LABEL: &str = "U";

/// First letter of the first and second name tokens, e.g. "Jane Doe" -> "JD"
///
/// Letters are taken as written. A single-token name yields one letter; an
/// absent or blank name yields [`DEFAULT_AVATAR_LABEL`].
pub fn avatar_label(display_name: Option<&str>) -> String {
    let initials: String = display_name
        .unwrap_or_default()
        .split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .collect();

    if initials.is_empty() {
        DEFAULT_AVATAR_LABEL.to_string()
    } else {
        initials
    }
}
