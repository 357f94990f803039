//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Generation backend defaults
pub mod generation {
    /// Default backend provider
    pub const DEFAULT_PROVIDER: &str = "gemini";

    /// Default model identifier
    pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-thinking-exp-01-21";

    /// Default API base for the Gemini REST API
    pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Environment variable holding the API key
    pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

    /// Sampling temperature
    pub const TEMPERATURE: f32 = 0.7;

    /// Nucleus sampling probability mass
    pub const TOP_P: f32 = 0.95;

    /// Top-k sampling cutoff
    pub const TOP_K: u32 = 40;

    /// Maximum output tokens per answer
    pub const MAX_OUTPUT_TOKENS: u32 = 4000;
}

/// Prompt template constants
pub mod prompt {
    /// Upper token budget the answer is asked to stay within
    pub const ANSWER_TOKEN_BUDGET: u32 = 1500;
}

/// Incremental reveal constants
pub mod reveal {
    /// Per-character delay for short answers (milliseconds)
    pub const NORMAL_DELAY_MS: u64 = 3;

    /// Per-character delay once an answer exceeds the threshold (milliseconds)
    pub const FAST_DELAY_MS: u64 = 1;

    /// Answers longer than this many characters use the fast delay
    pub const LONG_TEXT_THRESHOLD: usize = 1000;
}

/// HTTP/Network constants
pub mod network {
    /// Connection timeout (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 30;
}
