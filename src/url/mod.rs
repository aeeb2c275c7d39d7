//! URL handling module for crawlscope
//!
//! This module provides the crawl scope filter (the fixed allowed-domain
//! set computed from seed URLs) and query-parameter signatures used to
//! collapse parametrically equivalent pages.

mod scope;
mod signature;

// Re-export main types
pub use scope::AllowedDomains;
pub use signature::{param_signature, SignatureSet};
