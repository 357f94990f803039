//! Domain Gating
//!
//! Decides whether a query belongs to the supported subject domain.
//!
//! Matching is case-folded substring containment against a fixed keyword set,
//! not word-boundary tokenization. Short keywords therefore also match inside
//! longer unrelated words ("un" in "fund").

mod keywords;

use serde::Serialize;

/// Outcome of domain classification for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainVerdict {
    pub in_domain: bool,
    /// First keyword that matched, if any
    pub matched: Option<&'static str>,
}

/// Keyword-based domain classifier
#[derive(Debug, Clone, Copy)]
pub struct DomainClassifier {
    keyword_sets: &'static [&'static [&'static str]],
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::palestine()
    }
}

impl DomainClassifier {
    /// Classifier for the Palestine domain (English and Arabic terms)
    pub fn palestine() -> Self {
        Self {
            keyword_sets: &[keywords::ENGLISH, keywords::ARABIC],
        }
    }

    /// Classifier over custom keyword sets
    ///
    /// Keywords must already be lowercase.
    pub fn with_keywords(keyword_sets: &'static [&'static [&'static str]]) -> Self {
        Self { keyword_sets }
    }

    /// Iterate over every keyword in declaration order
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keyword_sets.iter().flat_map(|set| set.iter().copied())
    }

    /// First keyword contained in the query
    pub fn matched_keyword(&self, query: &str) -> Option<&'static str> {
        let lower = query.to_lowercase();
        self.keywords().find(|keyword| lower.contains(*keyword))
    }

    pub fn is_in_domain(&self, query: &str) -> bool {
        self.matched_keyword(query).is_some()
    }

    pub fn verdict(&self, query: &str) -> DomainVerdict {
        let matched = self.matched_keyword(query);
        DomainVerdict {
            in_domain: matched.is_some(),
            matched,
        }
    }
}

/// Check a query against the default domain
pub fn is_in_domain(query: &str) -> bool {
    DomainClassifier::default().is_in_domain(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_in_domain_examples() {
        assert!(is_in_domain("Tell me about Gaza"));
        assert!(is_in_domain("What happened in 1948?"));
        assert!(is_in_domain("ما هي النكبة؟"));
        assert!(!is_in_domain("What's the weather today?"));
        assert!(!is_in_domain("Best pizza recipe"));
        assert!(!is_in_domain(""));
    }

    #[test]
    fn test_case_folding() {
        assert!(is_in_domain("HISTORY OF JERUSALEM"));
        assert!(is_in_domain("the Nakba"));
    }

    #[test]
    fn test_substring_matching_false_positive() {
        // "un" is a keyword and occurs inside "fund"
        let classifier = DomainClassifier::default();
        assert_eq!(classifier.matched_keyword("How do I fund a startup?"), Some("un"));
    }

    #[test]
    fn test_verdict_reports_first_match() {
        let verdict = DomainClassifier::default().verdict("Gaza and the West Bank");
        assert!(verdict.in_domain);
        assert_eq!(verdict.matched, Some("gaza"));

        let miss = DomainClassifier::default().verdict("Explain quantum physics");
        assert!(!miss.in_domain);
        assert_eq!(miss.matched, None);
    }

    #[test]
    fn test_custom_keywords() {
        static SET: &[&str] = &["rust"];
        static SETS: &[&[&str]] = &[SET];
        let classifier = DomainClassifier::with_keywords(SETS);
        assert!(classifier.is_in_domain("Is Rust memory safe?"));
        assert!(!classifier.is_in_domain("Tell me about Gaza"));
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for keyword in DomainClassifier::default().keywords() {
            assert_eq!(keyword, keyword.to_lowercase());
        }
    }

    fn any_keyword() -> impl Strategy<Value = &'static str> {
        let all: Vec<&'static str> = DomainClassifier::default().keywords().collect();
        prop::sample::select(all)
    }

    proptest! {
        #[test]
        fn prop_keyword_in_any_case_is_in_domain(
            keyword in any_keyword(),
            prefix in "[a-z ]{0,12}",
            suffix in "[a-z ?]{0,12}",
            upper in any::<bool>(),
        ) {
            let word = if upper { keyword.to_uppercase() } else { keyword.to_string() };
            let query = format!("{}{}{}", prefix, word, suffix);
            prop_assert!(is_in_domain(&query));
        }

        #[test]
        fn prop_digits_only_never_match(query in "[02-9]{0,20}") {
            // every numeric keyword starts with '1'
            prop_assert!(!is_in_domain(&query));
        }
    }
}
