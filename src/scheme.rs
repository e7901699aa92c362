//! Scheme descriptors and the configuration records that travel with them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Reserved id of the catch-all scheme. A registry refuses to load without it.
pub const GENERIC_SCHEME_ID: &str = "generic";

/// One registered identifier scheme.
///
/// Descriptors are plain data loaded once per process: schemes carry no
/// behavior beyond these fields. Empty strings mean "none" for `prefix` and
/// `pattern`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDescriptor {
    /// Stable lowercase identifier, unique across the registry (e.g. "doi").
    /// Never contains a colon.
    pub id: String,
    /// Display name.
    pub label: String,
    /// Canonical URL prefix, or empty if the scheme has none.
    #[serde(default)]
    pub prefix: String,
    /// Validation pattern, or empty if any non-empty value is accepted.
    /// Stored unanchored; the registry anchors it at compile time.
    #[serde(default)]
    pub pattern: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl SchemeDescriptor {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        prefix: impl Into<String>,
        pattern: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            prefix: prefix.into(),
            pattern: pattern.into(),
            description: description.into(),
        }
    }

    /// Whether this is the catch-all scheme.
    pub fn is_generic(&self) -> bool {
        self.id == GENERIC_SCHEME_ID
    }

    /// Full URL for a bare value, if the scheme has a URL prefix.
    pub fn url_for(&self, bare_value: &str) -> Option<String> {
        if self.prefix.is_empty() {
            None
        } else {
            Some(format!("{}{}", self.prefix, bare_value))
        }
    }
}

/// Parsed scheme reference: base id plus the optional catch-all sub-label.
///
/// The colon-joined compound form (`"generic:employee_id"`) exists only at
/// the UI/storage boundary. Inside the engine the two parts always travel
/// separately through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRef {
    /// Base scheme id, lowercase.
    pub base_id: String,
    /// Caller-supplied sub-label; only ever set for the catch-all scheme.
    pub label_key: Option<String>,
}

impl SchemeRef {
    /// Parse a plain scheme id or the compound `"generic:<label_key>"` form.
    ///
    /// Ids are folded to lowercase. The compound split is only recognized
    /// for the catch-all scheme; any other input is taken whole as an id.
    pub fn parse(input: &str) -> Self {
        if let Some((head, rest)) = input.split_once(':') {
            if head.eq_ignore_ascii_case(GENERIC_SCHEME_ID) && !rest.is_empty() {
                return Self {
                    base_id: GENERIC_SCHEME_ID.to_string(),
                    label_key: Some(rest.to_string()),
                };
            }
        }
        Self {
            base_id: input.to_lowercase(),
            label_key: None,
        }
    }
}

impl fmt::Display for SchemeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label_key {
            Some(label) => write!(f, "{}:{}", self.base_id, label),
            None => write!(f, "{}", self.base_id),
        }
    }
}

/// Per-field catalogue of catch-all sub-labels (`label_key` -> display label).
///
/// Used only to resolve a human-readable label for catch-all values;
/// classification and validation never consult it. The line-oriented
/// `key|label` file format is parsed by the configuration layer, which hands
/// the pairs over here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericLabelCatalog {
    labels: HashMap<String, String>,
}

impl GenericLabelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            labels: pairs.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, label_key: impl Into<String>, display_label: impl Into<String>) {
        self.labels.insert(label_key.into(), display_label.into());
    }

    /// Display label for a sub-label key, if the catalogue knows it.
    pub fn display_label(&self, label_key: &str) -> Option<&str> {
        self.labels.get(label_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Boundary within which duplicate canonical keys are rejected.
///
/// Enforcement happens in the storage collaborator, not here; the engine
/// only carries the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UniquenessScope {
    None,
    PerContainer,
    PerGroup,
}

/// Field-level policy consumed by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPolicy {
    pub uniqueness_scope: UniquenessScope,
    /// Allowed scheme ids; empty means unrestricted.
    pub allowed_schemes: Vec<String>,
}

impl FieldPolicy {
    /// Whether a scheme is allowed under this policy.
    pub fn allows(&self, scheme_id: &str) -> bool {
        self.allowed_schemes.is_empty()
            || self
                .allowed_schemes
                .iter()
                .any(|s| s.eq_ignore_ascii_case(scheme_id))
    }
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            uniqueness_scope: UniquenessScope::None,
            allowed_schemes: Vec::new(),
        }
    }
}
