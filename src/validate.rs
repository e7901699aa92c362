//! Bare-value validation against a scheme.

use crate::registry::CompiledScheme;

/// Check a normalized bare value against its scheme.
///
/// Schemes without a pattern accept any non-empty value. Patterned schemes
/// require an anchored full-string match (anchoring happens at registry
/// load). The catch-all scheme always takes the non-empty branch, even if a
/// configuration source were to give it a pattern.
pub fn validate(scheme: &CompiledScheme, bare_value: &str) -> bool {
    if scheme.is_generic() {
        return !bare_value.is_empty();
    }
    match scheme.regex() {
        None => !bare_value.is_empty(),
        Some(re) => re.is_match(bare_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SchemeRegistry;
    use crate::scheme::SchemeDescriptor;

    fn registry() -> SchemeRegistry {
        SchemeRegistry::new(vec![
            SchemeDescriptor::new("doi", "DOI", "https://doi.org/", r"10\.\d{4,9}/\S+", ""),
            SchemeDescriptor::new("isbn", "ISBN", "", r"(?:97[89])?\d{9}[0-9X]", ""),
            SchemeDescriptor::new("bibcode", "ADS Bibcode", "", "", ""),
            SchemeDescriptor::new("generic", "Custom", "", "", ""),
        ])
        .unwrap()
    }

    #[test]
    fn pattern_match_accepts() {
        let registry = registry();
        assert!(validate(registry.get("doi").unwrap(), "10.1234/example"));
        assert!(validate(registry.get("isbn").unwrap(), "9780321125217"));
    }

    #[test]
    fn pattern_mismatch_rejects() {
        let registry = registry();
        assert!(!validate(registry.get("isbn").unwrap(), "123"));
        assert!(!validate(registry.get("doi").unwrap(), "not-a-doi"));
    }

    #[test]
    fn pattern_is_full_string() {
        let registry = registry();
        assert!(!validate(
            registry.get("doi").unwrap(),
            "10.1234/example trailing words"
        ));
    }

    #[test]
    fn patternless_scheme_accepts_non_empty() {
        let registry = registry();
        assert!(validate(registry.get("bibcode").unwrap(), "2020ApJ...123...45A"));
        assert!(!validate(registry.get("bibcode").unwrap(), ""));
    }

    #[test]
    fn catch_all_accepts_anything_non_empty() {
        let registry = registry();
        let generic = registry.get("generic").unwrap();
        assert!(validate(generic, "EMP12345"));
        assert!(validate(generic, "anything at all"));
        assert!(!validate(generic, ""));
    }

    #[test]
    fn empty_value_always_rejects() {
        let registry = registry();
        for scheme in registry.iter() {
            assert!(!validate(scheme, ""), "scheme {} accepted empty", scheme.id());
        }
    }
}
