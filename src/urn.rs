//! Canonical key construction.

use crate::scheme::GENERIC_SCHEME_ID;

/// Build the canonical correlation key for a resolved identifier.
///
/// Non-catch-all schemes produce `scheme:value`. The catch-all produces
/// `generic:value`, or `generic:label-key:value` when a sub-label was
/// supplied (the label is sanitized first). The whole key is lowercased, so
/// the value portion loses any uppercase the bare value had.
pub fn build_key(scheme_id: &str, bare_value: &str, label_key: Option<&str>) -> String {
    let key = match label_key {
        Some(label) if scheme_id.eq_ignore_ascii_case(GENERIC_SCHEME_ID) => {
            format!(
                "{}:{}:{}",
                GENERIC_SCHEME_ID,
                sanitize_label_key(label),
                bare_value
            )
        }
        _ => format!("{}:{}", scheme_id, bare_value),
    };
    key.to_lowercase()
}

/// Collapse every run of non-alphanumeric characters to a single hyphen and
/// trim hyphens from both ends.
pub fn sanitize_label_key(label_key: &str) -> String {
    let mut out = String::with_capacity(label_key.len());
    let mut pending_hyphen = false;
    for c in label_key.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}
