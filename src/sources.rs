//! Trusted Sources
//!
//! A small built-in catalogue of articles from outlets the assistant treats as
//! reliable, with term-overlap search. No network access is involved.

use serde::Serialize;
use url::Url;

use crate::domain::DomainClassifier;

/// Domains whose reporting the assistant cites
pub const RELIABLE_DOMAINS: &[&str] = &[
    "aljazeera.com",
    "middleeasteye.net",
    "metras.co",
    "aa.com.tr",
    "palestinechronicle.com",
    "electronicintifada.net",
    "btselem.org",
    "amnesty.org",
    "hrw.org",
    "un.org",
    "unrwa.org",
    "ochaopt.org",
    "palestinestudies.org",
    "mondoweiss.net",
];

/// One catalogued article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceRef {
    pub title: &'static str,
    pub url: &'static str,
    pub snippet: &'static str,
    pub source: &'static str,
}

const CATALOGUE: &[SourceRef] = &[
    SourceRef {
        title: "The history of Palestine: A chronology of key events",
        url: "https://www.aljazeera.com/news/2023/5/15/the-history-of-palestine-a-chronology-of-key-events",
        snippet: "A look at the major events that have shaped Palestinian history...",
        source: "Al Jazeera",
    },
    SourceRef {
        title: "Palestine and Israel: Mapping an annexation",
        url: "https://www.aljazeera.com/news/2020/7/2/palestine-and-israel-mapping-an-annexation",
        snippet: "Interactive map of Palestine showing the effects of Israel's annexation plans...",
        source: "Al Jazeera",
    },
    SourceRef {
        title: "What's the history of the Israel-Palestinian conflict?",
        url: "https://www.middleeasteye.net/news/israel-palestine-conflict-history-explained",
        snippet: "The roots of the Israel-Palestinian conflict explained...",
        source: "Middle East Eye",
    },
    SourceRef {
        title: "Timeline: Israel's attacks on Gaza and the Palestinian resistance",
        url: "https://www.aa.com.tr/en/middle-east/timeline-israels-attacks-on-gaza-and-the-palestinian-resistance/2866227",
        snippet: "A comprehensive timeline of the recent events in Gaza...",
        source: "Anadolu Agency",
    },
];

/// Every catalogued article
pub fn catalogue() -> &'static [SourceRef] {
    CATALOGUE
}

/// Articles sharing at least one term with the query, in catalogue order
///
/// Terms are whitespace-separated and matched as lowercase substrings of the
/// title or snippet.
pub fn search_reliable_sources(query: &str) -> Vec<&'static SourceRef> {
    let lower = query.to_lowercase();
    let terms: Vec<&str> = lower.split_whitespace().collect();
    if terms.is_empty() {
        return Vec::new();
    }

    CATALOGUE
        .iter()
        .filter(|source| {
            let title = source.title.to_lowercase();
            let snippet = source.snippet.to_lowercase();
            terms
                .iter()
                .any(|term| title.contains(*term) || snippet.contains(*term))
        })
        .collect()
}

/// Search only when the query is in the classifier's domain
///
/// `None` means the query was refused and no search ran.
pub fn gated_search(domain: &DomainClassifier, query: &str) -> Option<Vec<&'static SourceRef>> {
    domain
        .is_in_domain(query)
        .then(|| search_reliable_sources(query))
}

/// Whether the URL's host is a reliable domain or one of its subdomains
pub fn is_reliable_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_lowercase();

    RELIABLE_DOMAINS.iter().any(|domain| {
        host == *domain
            || host
                .strip_suffix(*domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}
