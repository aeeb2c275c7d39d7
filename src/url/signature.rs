//! Query-parameter signatures for crawl deduplication
//!
//! Many sites expose functionally identical pages that differ only in query
//! parameter values (`?id=1`, `?id=2`, `?id=3`, ...). A signature keeps the
//! URL path and the sorted set of parameter *names* and drops the values, so
//! dedup mode crawls one representative URL per parameter shape while still
//! distinguishing pages with genuinely different parameter structures
//! (`?id=1` vs `?id=1&sort=asc`). Values are ignored even where they are
//! meaningful, e.g. pagination; collapsing them is the point of the mode.

use std::collections::{BTreeSet, HashSet};
use url::Url;

/// Computes the canonical signature for a URL
///
/// The signature is the path plus the lexicographically sorted set of query
/// parameter names joined with `&`; a URL without query parameters signs as
/// its path alone.
///
/// Pure and deterministic: repeated calls on the same URL, or on two URLs
/// differing only in parameter values, yield identical output.
///
/// # Examples
///
/// ```
/// use crawlscope::param_signature;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/p?id=1&sort=asc").unwrap();
/// assert_eq!(param_signature(&url), "/p?params=id&sort");
///
/// let url = Url::parse("https://example.com/about").unwrap();
/// assert_eq!(param_signature(&url), "/about");
/// ```
pub fn param_signature(url: &Url) -> String {
    let keys: BTreeSet<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();

    if keys.is_empty() {
        return url.path().to_string();
    }

    let joined = keys.into_iter().collect::<Vec<_>>().join("&");
    format!("{}?params={}", url.path(), joined)
}

/// The set of parameter signatures already admitted to the crawl
///
/// Grows monotonically and lives for the whole crawl. `admit` is a single
/// check-and-insert; exclusive ownership (`&mut self`) is what guarantees
/// at most one admission per signature.
#[derive(Debug, Default)]
pub struct SignatureSet {
    seen: HashSet<String>,
}

impl SignatureSet {
    /// Creates an empty signature set
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the signature if it has not been seen before
    ///
    /// Returns true on the first admission of a signature and false for
    /// every later call with the same signature.
    pub fn admit(&mut self, signature: &str) -> bool {
        self.seen.insert(signature.to_string())
    }

    /// Returns the number of admitted signatures
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns whether any signature has been admitted
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Consumes the set, yielding the signatures in sorted order
    pub fn into_sorted(self) -> BTreeSet<String> {
        self.seen.into_iter().collect()
    }
}
