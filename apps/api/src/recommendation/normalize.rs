//! Normalization rules shared by every scoring factor.

/// Normalizes an enum-like label such as an experience level or job type:
/// `" Mid Level"` → `"MID_LEVEL"`. Returns `None` for blank input so that
/// two missing values never count as a match.
pub fn normalize_label(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_uppercase().replace(' ', "_"))
}

/// Normalizes a skill or tag for case-insensitive comparison.
pub fn normalize_skill(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}
