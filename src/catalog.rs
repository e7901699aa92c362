//! Built-in scheme catalogue.
//!
//! Registration order is part of the contract: the classifier walks schemes
//! in this order and takes the first hit, so moving an entry changes which
//! scheme claims an ambiguous bare value.

use crate::scheme::SchemeDescriptor;

/// The default descriptor set: common scholarly identifier schemes plus the
/// mandatory catch-all entry.
pub fn builtin_schemes() -> Vec<SchemeDescriptor> {
    vec![
        SchemeDescriptor::new(
            "doi",
            "DOI",
            "https://doi.org/",
            r"10\.\d{4,9}/\S+",
            "Digital Object Identifier",
        ),
        SchemeDescriptor::new(
            "orcid",
            "ORCID",
            "https://orcid.org/",
            r"\d{4}-\d{4}-\d{4}-\d{3}[0-9X]",
            "Open Researcher and Contributor ID",
        ),
        SchemeDescriptor::new(
            "arxiv",
            "arXiv",
            "https://arxiv.org/abs/",
            r"(?:\d{4}\.\d{4,5}(?:v\d+)?)|(?:[a-z-]+(?:\.[a-z-]+)?/\d{7}(?:v\d+)?)",
            "arXiv preprint identifier, old or new format",
        ),
        SchemeDescriptor::new(
            "openalex",
            "OpenAlex",
            "https://openalex.org/",
            r"[WASIFC]\d{4,}",
            "OpenAlex entity ID",
        ),
        SchemeDescriptor::new(
            "ror",
            "ROR",
            "https://ror.org/",
            r"0[a-z0-9]{8}",
            "Research Organization Registry ID",
        ),
        SchemeDescriptor::new(
            "pmid",
            "PubMed",
            "https://pubmed.ncbi.nlm.nih.gov/",
            r"\d{1,8}",
            "PubMed identifier",
        ),
        SchemeDescriptor::new(
            "bibcode",
            "ADS Bibcode",
            "https://ui.adsabs.harvard.edu/abs/",
            "",
            "NASA ADS bibcode",
        ),
        SchemeDescriptor::new(
            "isbn",
            "ISBN",
            "",
            r"(?:97[89])?\d{9}[0-9X]",
            "International Standard Book Number, 10 or 13 digits",
        ),
        SchemeDescriptor::new(
            "generic",
            "Custom",
            "",
            "",
            "Catch-all scheme for caller-defined identifier types",
        ),
    ]
}
