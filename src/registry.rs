//! Scheme registry: the ordered, immutable catalogue of compiled schemes.
//!
//! Built once per process from a descriptor list and read-only afterwards,
//! so it can be shared across threads without locking. Validation patterns
//! are compiled (and anchored) here, once, at load time.

use std::collections::HashMap;

use regex::Regex;

use crate::catalog::builtin_schemes;
use crate::scheme::{SchemeDescriptor, GENERIC_SCHEME_ID};

/// Error from registry construction. The one fail-fast point of the engine:
/// every later operation assumes a well-formed registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("scheme already registered: {0}")]
    AlreadyRegistered(String),

    #[error("invalid scheme id '{0}': ids are non-empty and contain no colon")]
    InvalidSchemeId(String),

    #[error("invalid pattern for scheme '{scheme}': {source}")]
    InvalidPattern {
        scheme: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("catch-all scheme 'generic' is missing from the configuration")]
    MissingCatchAll,

    #[error("scheme configuration is not valid JSON: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// A registered scheme with its validation pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledScheme {
    descriptor: SchemeDescriptor,
    regex: Option<Regex>,
}

impl CompiledScheme {
    fn compile(descriptor: SchemeDescriptor) -> Result<Self, RegistryError> {
        let regex = if descriptor.pattern.is_empty() {
            None
        } else {
            // Anchor explicitly so a stored pattern without anchors cannot
            // match a substring.
            let anchored = format!("^(?:{})$", descriptor.pattern);
            let compiled = Regex::new(&anchored).map_err(|source| RegistryError::InvalidPattern {
                scheme: descriptor.id.clone(),
                source: Box::new(source),
            })?;
            Some(compiled)
        };
        Ok(Self { descriptor, regex })
    }

    pub fn descriptor(&self) -> &SchemeDescriptor {
        &self.descriptor
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    pub fn is_generic(&self) -> bool {
        self.descriptor.is_generic()
    }

    /// Whether this scheme carries a validation pattern.
    pub fn has_pattern(&self) -> bool {
        self.regex.is_some()
    }

    /// Anchored full-string pattern match. False when the scheme has no
    /// pattern.
    pub fn matches_pattern(&self, value: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(value))
    }

    pub(crate) fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }
}

/// Registry of identifier schemes, queryable by id and enumerable in
/// registration order.
#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    schemes: Vec<CompiledScheme>,
    index: HashMap<String, usize>,
}

impl SchemeRegistry {
    /// Build a registry from descriptors, preserving their order.
    ///
    /// Ids are folded to lowercase. Fails if the catch-all entry is absent,
    /// an id repeats or is malformed, or a pattern does not compile.
    pub fn new(descriptors: Vec<SchemeDescriptor>) -> Result<Self, RegistryError> {
        let mut schemes = Vec::with_capacity(descriptors.len());
        let mut index = HashMap::new();
        for mut descriptor in descriptors {
            descriptor.id = descriptor.id.to_lowercase();
            if descriptor.id.is_empty() || descriptor.id.contains(':') {
                return Err(RegistryError::InvalidSchemeId(descriptor.id));
            }
            if index.contains_key(&descriptor.id) {
                return Err(RegistryError::AlreadyRegistered(descriptor.id));
            }
            index.insert(descriptor.id.clone(), schemes.len());
            schemes.push(CompiledScheme::compile(descriptor)?);
        }
        if !index.contains_key(GENERIC_SCHEME_ID) {
            return Err(RegistryError::MissingCatchAll);
        }
        Ok(Self { schemes, index })
    }

    /// Registry preloaded with the built-in catalogue.
    pub fn with_builtin() -> Self {
        Self::new(builtin_schemes()).expect("built-in catalogue is well-formed")
    }

    /// Build a registry from a JSON array of descriptors.
    ///
    /// This is the seam to the external scheme configuration source; array
    /// order becomes registration order.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let descriptors: Vec<SchemeDescriptor> = serde_json::from_str(json)?;
        Self::new(descriptors)
    }

    /// Look up a scheme by id. Lookup is case-insensitive; stored ids are
    /// lowercase.
    pub fn get(&self, id: &str) -> Option<&CompiledScheme> {
        self.index
            .get(&id.to_lowercase())
            .map(|&i| &self.schemes[i])
    }

    pub fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate schemes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledScheme> {
        self.schemes.iter()
    }

    /// All descriptors in registration order.
    pub fn list(&self) -> Vec<&SchemeDescriptor> {
        self.schemes.iter().map(CompiledScheme::descriptor).collect()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_descriptors() -> Vec<SchemeDescriptor> {
        vec![
            SchemeDescriptor::new("doi", "DOI", "https://doi.org/", r"10\.\d{4,9}/\S+", ""),
            SchemeDescriptor::new("generic", "Custom", "", "", ""),
        ]
    }

    #[test]
    fn build_and_lookup() {
        let registry = SchemeRegistry::new(minimal_descriptors()).unwrap();
        assert!(registry.get("doi").is_some());
        assert!(registry.get("generic").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = SchemeRegistry::new(minimal_descriptors()).unwrap();
        assert!(registry.exists("DOI"));
        assert_eq!(registry.get("Doi").unwrap().id(), "doi");
    }

    #[test]
    fn ids_fold_to_lowercase_on_load() {
        let descriptors = vec![
            SchemeDescriptor::new("DOI", "DOI", "", "", ""),
            SchemeDescriptor::new("generic", "Custom", "", "", ""),
        ];
        let registry = SchemeRegistry::new(descriptors).unwrap();
        assert_eq!(registry.get("doi").unwrap().id(), "doi");
    }

    #[test]
    fn missing_catch_all_fails() {
        let descriptors = vec![SchemeDescriptor::new("doi", "DOI", "", "", "")];
        let err = SchemeRegistry::new(descriptors).unwrap_err();
        assert!(matches!(err, RegistryError::MissingCatchAll));
    }

    #[test]
    fn duplicate_id_fails() {
        let descriptors = vec![
            SchemeDescriptor::new("doi", "DOI", "", "", ""),
            SchemeDescriptor::new("DOI", "DOI again", "", "", ""),
            SchemeDescriptor::new("generic", "Custom", "", "", ""),
        ];
        let err = SchemeRegistry::new(descriptors).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered(id) if id == "doi"));
    }

    #[test]
    fn id_with_colon_fails() {
        let descriptors = vec![
            SchemeDescriptor::new("do:i", "Bad", "", "", ""),
            SchemeDescriptor::new("generic", "Custom", "", "", ""),
        ];
        let err = SchemeRegistry::new(descriptors).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSchemeId(_)));
    }

    #[test]
    fn empty_id_fails() {
        let descriptors = vec![
            SchemeDescriptor::new("", "Bad", "", "", ""),
            SchemeDescriptor::new("generic", "Custom", "", "", ""),
        ];
        let err = SchemeRegistry::new(descriptors).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSchemeId(_)));
    }

    #[test]
    fn invalid_pattern_fails() {
        let descriptors = vec![
            SchemeDescriptor::new("bad", "Bad", "", r"10\.(\d+", ""),
            SchemeDescriptor::new("generic", "Custom", "", "", ""),
        ];
        let err = SchemeRegistry::new(descriptors).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPattern { scheme, .. } if scheme == "bad"));
    }

    #[test]
    fn patterns_are_anchored() {
        let registry = SchemeRegistry::new(minimal_descriptors()).unwrap();
        let doi = registry.get("doi").unwrap();
        assert!(doi.matches_pattern("10.1234/example"));
        // Substring hits must not count.
        assert!(!doi.matches_pattern("see 10.1234/example"));
        assert!(!doi.matches_pattern("10.1234/example and more words"));
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let descriptors = vec![
            SchemeDescriptor::new("b", "B", "", "", ""),
            SchemeDescriptor::new("a", "A", "", "", ""),
            SchemeDescriptor::new("generic", "Custom", "", "", ""),
        ];
        let registry = SchemeRegistry::new(descriptors).unwrap();
        let ids: Vec<&str> = registry.iter().map(CompiledScheme::id).collect();
        assert_eq!(ids, vec!["b", "a", "generic"]);
    }

    #[test]
    fn from_json_round_trip() {
        let json = r#"[
            {"id": "doi", "label": "DOI", "prefix": "https://doi.org/", "pattern": "10\\.\\d{4,9}/\\S+"},
            {"id": "generic", "label": "Custom"}
        ]"#;
        let registry = SchemeRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("doi").unwrap().has_pattern());
    }

    #[test]
    fn from_json_rejects_malformed() {
        let err = SchemeRegistry::from_json("not json").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidConfig(_)));
    }

    #[test]
    fn with_builtin_loads() {
        let registry = SchemeRegistry::with_builtin();
        assert!(registry.exists("doi"));
        assert!(registry.exists("generic"));
    }
}
