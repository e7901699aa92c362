//! Scheme inference for untyped input.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::registry::SchemeRegistry;
use crate::scheme::GENERIC_SCHEME_ID;

lazy_static! {
    // A single leading "key:" envelope (e.g. "info:doi:10.1234/x"), stripped
    // once before the cascade runs.
    static ref ENVELOPE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]+:(.+)$").unwrap();
}

/// Result of classifying an untyped input: the inferred scheme and the value
/// with whatever decoration the matching stage stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub scheme_id: String,
    pub bare_value: String,
}

/// Infer the scheme of an arbitrary input string.
///
/// A single `key:` envelope is stripped first, then a three-stage cascade
/// runs, each stage only if the previous one produced nothing:
///
/// 1. direct split on the first colon against registered scheme ids
///    (case-insensitive, remainder must be non-empty)
/// 2. URL prefix match, exact then protocol-swapped, in registry order
/// 3. anchored pattern match of the unmodified value, in registry order
///
/// Stages 2 and 3 take the first hit in registration order, so reordering
/// schemes changes which one claims an ambiguous bare value. The catch-all
/// scheme is never a candidate at any stage.
///
/// If the envelope-stripped value matches nothing, the cascade runs once
/// more over the original input. Without that second pass, the envelope
/// regex would swallow the protocol head of full URLs (`https:` looks like
/// an envelope key) and the scheme token of pattern-less schemes.
///
/// Absence of a match is an expected outcome, not an error: unrecognized
/// input returns `None`.
pub fn classify(registry: &SchemeRegistry, raw_input: &str) -> Option<Classification> {
    if raw_input.is_empty() {
        return None;
    }
    let unwrapped = strip_envelope(raw_input);
    if let Some(hit) = run_cascade(registry, unwrapped) {
        return Some(hit);
    }
    if unwrapped != raw_input {
        return run_cascade(registry, raw_input);
    }
    None
}

/// Strip a single leading `key:` envelope, if present.
fn strip_envelope(input: &str) -> &str {
    match ENVELOPE_REGEX.captures(input) {
        Some(caps) => caps.get(1).map_or(input, |m| m.as_str()),
        None => input,
    }
}

fn run_cascade(registry: &SchemeRegistry, value: &str) -> Option<Classification> {
    scheme_token_stage(registry, value)
        .or_else(|| url_prefix_stage(registry, value))
        .or_else(|| pattern_stage(registry, value))
}

/// Stage 1: direct split on the first colon. This is not the normalizer's
/// token rule re-run; the split happens exactly once, against the raw value.
fn scheme_token_stage(registry: &SchemeRegistry, value: &str) -> Option<Classification> {
    let (head, rest) = value.split_once(':')?;
    if rest.is_empty() {
        return None;
    }
    let scheme_id = head.to_lowercase();
    if scheme_id == GENERIC_SCHEME_ID || !registry.exists(&scheme_id) {
        return None;
    }
    Some(Classification {
        scheme_id,
        bare_value: rest.to_string(),
    })
}

/// Stage 2: URL prefix match in registry order, exact prefix before the
/// protocol-swapped variant.
fn url_prefix_stage(registry: &SchemeRegistry, value: &str) -> Option<Classification> {
    for scheme in registry.iter() {
        let descriptor = scheme.descriptor();
        if scheme.is_generic() || descriptor.prefix.is_empty() {
            continue;
        }
        if let Some(rest) = value.strip_prefix(&descriptor.prefix) {
            return Some(Classification {
                scheme_id: descriptor.id.clone(),
                bare_value: rest.to_string(),
            });
        }
        if descriptor.prefix.contains("https://") {
            let swapped = descriptor.prefix.replace("https://", "http://");
            if let Some(rest) = value.strip_prefix(&swapped) {
                return Some(Classification {
                    scheme_id: descriptor.id.clone(),
                    bare_value: rest.to_string(),
                });
            }
        }
    }
    None
}

/// Stage 3: pattern match of the value as-is, no stripping, in registry
/// order.
fn pattern_stage(registry: &SchemeRegistry, value: &str) -> Option<Classification> {
    for scheme in registry.iter() {
        if scheme.is_generic() {
            continue;
        }
        if scheme.matches_pattern(value) {
            return Some(Classification {
                scheme_id: scheme.id().to_string(),
                bare_value: value.to_string(),
            });
        }
    }
    None
}
