//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//! Backend failures are classified into a small set of user-facing categories.
//!
//! ## Error Categories
//!
//! - **Quota**: usage quota exhausted (user retries later)
//! - **SafetyBlock**: backend refused for safety reasons (user rephrases)
//! - **Timeout**: backend did not answer in time (user narrows the question)
//! - **Unclassified**: anything else, raw backend text is kept
//!
//! Configuration errors are not categories: they are fatal for the request and
//! surface before any backend call.

use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// User-facing category of a backend failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Usage quota exceeded
    Quota,
    /// Request or response blocked by safety filters
    SafetyBlock,
    /// Backend call timed out
    Timeout,
    /// Anything else; keeps the raw backend message
    Unclassified { detail: String },
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quota => write!(f, "QUOTA"),
            Self::SafetyBlock => write!(f, "SAFETY_BLOCK"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::Unclassified { .. } => write!(f, "UNCLASSIFIED"),
        }
    }
}

impl ErrorCategory {
    /// Fixed sentence shown to the user in place of an answer
    pub fn user_message(&self) -> String {
        match self {
            Self::Quota => {
                "❌ API quota exceeded. Please try again later or contact the administrator."
                    .to_string()
            }
            Self::SafetyBlock => "❌ The response was blocked due to safety concerns. Please rephrase your question or try a different topic related to Palestine.".to_string(),
            Self::Timeout => {
                "❌ The request timed out. Please try again with a more specific question."
                    .to_string()
            }
            Self::Unclassified { detail } => format!(
                "❌ Error getting response: {}. Please try again or contact support.",
                detail
            ),
        }
    }
}

/// Map a category to its user-facing message
pub fn message_for(category: &ErrorCategory) -> String {
    category.user_message()
}

// =============================================================================
// Backend Error
// =============================================================================

/// Failure raised by the generation backend
///
/// `message` is always present. The structured fields are filled in only when
/// the backend exposes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.describe())]
pub struct BackendError {
    /// Raw error text
    pub message: String,
    /// HTTP status code of the failed call
    pub status_code: Option<u16>,
    /// API status string (e.g. `RESOURCE_EXHAUSTED`)
    pub status: Option<String>,
    /// Safety block reason reported by the backend
    pub block_reason: Option<String>,
}

impl BackendError {
    /// Message prefixed with whichever status details are known
    fn describe(&self) -> String {
        match (self.status_code, &self.status) {
            (Some(code), Some(status)) => format!("[{} {}] {}", code, status, self.message),
            (Some(code), None) => format!("[{}] {}", code, self.message),
            (None, Some(status)) => format!("[{}] {}", status, self.message),
            (None, None) => self.message.clone(),
        }
    }

    /// Create from a raw message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Add HTTP status code
    pub fn status_code(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Add API status string
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Add safety block reason
    pub fn block_reason(mut self, reason: impl Into<String>) -> Self {
        self.block_reason = Some(reason.into());
        self
    }
}

// =============================================================================
// Error Classifier
// =============================================================================

/// Strategy mapping a backend failure to a category
pub trait ErrorClassifier: Send + Sync {
    fn classify(&self, err: &BackendError) -> ErrorCategory;
}

/// Classifies on the error text only
///
/// Rules are checked in order: quota, blocked/safety, timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageClassifier;

impl MessageClassifier {
    pub fn classify_message(message: &str) -> ErrorCategory {
        let lower = message.to_lowercase();

        if lower.contains("quota") {
            return ErrorCategory::Quota;
        }

        if lower.contains("blocked") || lower.contains("safety") {
            return ErrorCategory::SafetyBlock;
        }

        if lower.contains("timeout") {
            return ErrorCategory::Timeout;
        }

        ErrorCategory::Unclassified {
            detail: message.to_string(),
        }
    }
}

impl ErrorClassifier for MessageClassifier {
    fn classify(&self, err: &BackendError) -> ErrorCategory {
        Self::classify_message(&err.message)
    }
}

/// Prefers structured signals, falls back to message text
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredClassifier;

impl ErrorClassifier for StructuredClassifier {
    fn classify(&self, err: &BackendError) -> ErrorCategory {
        if err.block_reason.is_some() {
            return ErrorCategory::SafetyBlock;
        }

        if let Some(status) = err.status.as_deref() {
            match status {
                "RESOURCE_EXHAUSTED" => return ErrorCategory::Quota,
                "DEADLINE_EXCEEDED" => return ErrorCategory::Timeout,
                _ => {}
            }
        }

        match err.status_code {
            Some(429) => ErrorCategory::Quota,
            Some(408) | Some(504) => ErrorCategory::Timeout,
            _ => MessageClassifier.classify(err),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum TopicError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Backend Errors
    // -------------------------------------------------------------------------
    /// Failure raised by the generation backend
    #[error("Backend error: {0}")]
    Backend(BackendError),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Local timeout around a backend call
    #[error("Timeout after {duration:?}: {operation}")]
    Timeout {
        operation: String,
        duration: Duration,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),
}

impl From<BackendError> for TopicError {
    fn from(err: BackendError) -> Self {
        TopicError::Backend(err)
    }
}

pub type Result<T> = std::result::Result<T, TopicError>;

impl TopicError {
    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a backend error from a message
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(BackendError::new(message))
    }

    /// Category of this error if it is a non-fatal backend failure
    ///
    /// Returns `None` for fatal errors (configuration, IO).
    pub fn category(&self, classifier: &dyn ErrorClassifier) -> Option<ErrorCategory> {
        match self {
            Self::Backend(err) => Some(classifier.classify(err)),
            Self::Timeout { .. } => Some(ErrorCategory::Timeout),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
