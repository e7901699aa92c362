//! Decoration stripping for values with a known scheme.

use crate::scheme::SchemeDescriptor;

/// Strip scheme-specific decoration from a raw value.
///
/// Rules are tried in order and the first match wins:
///
/// 1. a case-insensitive `"<id>:"` token prefix
/// 2. the scheme's URL prefix, byte for byte
/// 3. the `http://` variant of an `https://` prefix
/// 4. no decoration recognized, value returned unchanged
///
/// Case of the remaining value is preserved. Anything following a stripped
/// prefix is kept, trailing slashes included; rejecting trailing garbage is
/// the validator's job, not this function's.
pub fn normalize(scheme: &SchemeDescriptor, raw_value: &str) -> String {
    // Rule 1: "<id>:" token, matched case-insensitively against the stored
    // lowercase id, stripped from the original-case input.
    let token_len = scheme.id.len() + 1;
    if raw_value.len() >= token_len
        && raw_value.is_char_boundary(token_len)
        && raw_value.as_bytes()[token_len - 1] == b':'
        && raw_value[..token_len - 1].eq_ignore_ascii_case(&scheme.id)
    {
        return raw_value[token_len..].to_string();
    }

    if !scheme.prefix.is_empty() {
        // Rule 2: exact URL prefix.
        if let Some(rest) = raw_value.strip_prefix(&scheme.prefix) {
            return rest.to_string();
        }
        // Rule 3: protocol-swapped variant.
        if scheme.prefix.contains("https://") {
            let swapped = scheme.prefix.replace("https://", "http://");
            if let Some(rest) = raw_value.strip_prefix(&swapped) {
                return rest.to_string();
            }
        }
    }

    raw_value.to_string()
}
