//! persid: classify, normalize, and canonicalize typed persistent identifiers.
//!
//! A typed identifier is a (scheme, value) pair drawn from a registry of
//! identifier schemes (DOI, ORCID, arXiv, ...), each with an optional URL
//! prefix and an optional validation pattern. Given a bare code, a
//! `scheme:value` token, or a URL in either protocol variant, this crate can:
//!
//! - infer which registered scheme the input belongs to (`classify`)
//! - strip decoration and validate the bare value (`resolve`)
//! - build the lowercase canonical key used for exact-match correlation
//!   (`build_key`)
//!
//! All operations are pure, synchronous functions over an immutable
//! [`SchemeRegistry`]. The registry is built once from a descriptor list and
//! can be shared freely across threads; nothing in this crate performs I/O.

pub mod catalog;
pub mod classify;
pub mod normalize;
pub mod registry;
pub mod resolve;
pub mod scheme;
pub mod urn;
pub mod validate;

pub use catalog::*;
pub use classify::*;
pub use normalize::*;
pub use registry::*;
pub use resolve::*;
pub use scheme::*;
pub use urn::*;
pub use validate::*;
