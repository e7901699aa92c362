//! Resolution façade: the end-to-end write path.
//!
//! `resolve` walks the full pipeline on every call:
//! scheme lookup -> normalize -> validate -> key build. There is no caching
//! between steps; two callers resolving the same input against the same
//! registry always produce the same `IdentifierValue`.

use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::normalize::normalize;
use crate::registry::SchemeRegistry;
use crate::scheme::SchemeRef;
use crate::urn::build_key;
use crate::validate::validate;

/// Why a resolution was rejected.
///
/// Every kind is an expected, recoverable outcome when processing externally
/// sourced data; callers branch on the kind (skip-and-log, surface to the
/// user, hard-fail) rather than treat it as fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("empty input value")]
    EmptyInput,

    #[error("unknown identifier scheme: '{0}'")]
    UnknownScheme(String),

    #[error("'{value}' is not a valid {scheme} identifier")]
    InvalidFormat { scheme: String, value: String },

    #[error("no registered scheme matches '{0}'")]
    NoMatch(String),
}

/// One resolved (scheme, value) pair.
///
/// Immutable once produced; when the underlying raw value changes, callers
/// re-resolve instead of mutating. The canonical key is a pure function of
/// the other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierValue {
    /// Base scheme id. For catch-all values this is always the catch-all id
    /// itself, never a compound form.
    pub scheme_id: String,
    /// Normalized value with decoration stripped, original case preserved.
    pub bare_value: String,
    /// Catch-all sub-label, when one was supplied.
    pub label_key: Option<String>,
    /// Lowercase composite key for exact-match correlation.
    pub canonical_key: String,
}

/// Resolve an explicitly typed raw value.
///
/// `scheme` is a plain id or the compound `"generic:<label_key>"` form. An
/// invalid value is rejected before any canonical key exists: storing an
/// unkeyed invalid value is the caller's choice, but an indexed one would
/// pollute correlation queries.
pub fn resolve(
    registry: &SchemeRegistry,
    scheme: &str,
    raw_value: &str,
) -> Result<IdentifierValue, Rejection> {
    if raw_value.is_empty() {
        return Err(Rejection::EmptyInput);
    }
    let scheme_ref = SchemeRef::parse(scheme);
    let compiled = registry
        .get(&scheme_ref.base_id)
        .ok_or_else(|| Rejection::UnknownScheme(scheme_ref.base_id.clone()))?;
    let bare_value = normalize(compiled.descriptor(), raw_value);
    if bare_value.is_empty() || !validate(compiled, &bare_value) {
        return Err(Rejection::InvalidFormat {
            scheme: compiled.id().to_string(),
            value: raw_value.to_string(),
        });
    }
    let canonical_key = build_key(compiled.id(), &bare_value, scheme_ref.label_key.as_deref());
    Ok(IdentifierValue {
        scheme_id: compiled.id().to_string(),
        bare_value,
        label_key: scheme_ref.label_key,
        canonical_key,
    })
}

/// Classify an untyped input and resolve it in one step.
///
/// Inputs no scheme claims come back as `Rejection::NoMatch`.
pub fn resolve_input(
    registry: &SchemeRegistry,
    raw_input: &str,
) -> Result<IdentifierValue, Rejection> {
    if raw_input.is_empty() {
        return Err(Rejection::EmptyInput);
    }
    let hit =
        classify(registry, raw_input).ok_or_else(|| Rejection::NoMatch(raw_input.to_string()))?;
    resolve(registry, &hit.scheme_id, &hit.bare_value)
}
