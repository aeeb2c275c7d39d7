use std::collections::HashSet;
use url::Url;

/// The set of authorities a crawl is permitted to traverse into
///
/// Computed once from the seed URLs before the crawl starts and immutable
/// for the crawl's duration. Membership is checked against the lowercase
/// host, with the port appended when a URL carries a non-default port, so
/// crawls of servers on explicit ports stay bounded to that server.
///
/// # Examples
///
/// ```
/// use crawlscope::AllowedDomains;
/// use url::Url;
///
/// let seeds = vec![Url::parse("https://example.com/").unwrap()];
/// let scope = AllowedDomains::from_seeds(&seeds);
///
/// assert!(scope.is_in_scope(&Url::parse("https://example.com/page").unwrap()));
/// assert!(!scope.is_in_scope(&Url::parse("https://other.com/page").unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct AllowedDomains {
    domains: HashSet<String>,
}

impl AllowedDomains {
    /// Builds the allow-list from seed URLs
    ///
    /// Seeds without a host contribute nothing to the set.
    pub fn from_seeds(seeds: &[Url]) -> Self {
        let domains = seeds.iter().filter_map(authority).collect();
        Self { domains }
    }

    /// Returns true iff the URL is eligible to enter the frontier
    ///
    /// A URL is in scope when its scheme is `http` or `https` and its
    /// authority is a member of the allow-list. Never panics; URLs
    /// without a host resolve to false.
    pub fn is_in_scope(&self, url: &Url) -> bool {
        if url.scheme() != "http" && url.scheme() != "https" {
            return false;
        }

        authority(url).map_or(false, |a| self.domains.contains(&a))
    }

    /// Returns the number of allowed authorities
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Returns whether the allow-list is empty
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Authority string used for scope comparison: lowercase host, plus
/// `:port` when the URL carries a non-default port
fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();

    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    })
}
