pub mod error;

pub use error::{
    BackendError, ErrorCategory, ErrorClassifier, MessageClassifier, Result, StructuredClassifier,
    TopicError, message_for,
};

// =============================================================================
// Domain Newtypes
// =============================================================================

use std::fmt;

/// Raw question submitted by a caller
///
/// Immutable once created; lives for one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the query has no visible characters
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_blank() {
        assert!(Query::from("   \n\t").is_blank());
        assert!(Query::from("").is_blank());
        assert!(!Query::from(" Gaza ").is_blank());
    }

    #[test]
    fn test_query_preserves_text() {
        let query = Query::new("  What happened in 1948?  ");
        assert_eq!(query.as_str(), "  What happened in 1948?  ");
        assert_eq!(query.to_string(), "  What happened in 1948?  ");
    }
}
