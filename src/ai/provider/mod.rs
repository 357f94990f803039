//! Generation Backend Abstraction
//!
//! Defines the `GenerationClient` trait for plain-text generation.
//! A client holds its model identity and sampling parameters as immutable
//! configuration fixed at construction; callers cannot change them per request.
//!
//! ## Modules
//!
//! - `gemini`: Google Gemini `generateContent` REST backend

mod gemini;
#[cfg(test)]
pub(crate) mod scripted;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::ai::prompt::Prompt;
use crate::config::LlmConfig;
use crate::types::{Result, TopicError};

// =============================================================================
// Generation Output with Usage Metrics
// =============================================================================

/// Complete generated answer with usage metrics
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// Full generated text
    pub text: String,
    /// Token usage metrics
    pub usage: TokenUsage,
    /// Response timing
    pub timing: ResponseTiming,
    /// Provider and model info
    pub metadata: ResponseMetadata,
}

impl GenerationOutput {
    /// Create output with text only (usage unknown)
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: TokenUsage::default(),
            timing: ResponseTiming::default(),
            metadata: ResponseMetadata::default(),
        }
    }
}

/// Token usage metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens (prompt)
    pub input_tokens: u32,
    /// Output tokens (response)
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Total tokens used (input + output)
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }

    /// Create from Gemini-style usage metadata
    pub fn from_gemini(prompt_token_count: u32, candidates_token_count: u32) -> Self {
        Self {
            input_tokens: prompt_token_count,
            output_tokens: candidates_token_count,
        }
    }
}

/// Response timing metrics
#[derive(Debug, Clone, Default)]
pub struct ResponseTiming {
    /// Total response time in milliseconds (wall clock)
    pub total_ms: u64,
}

impl ResponseTiming {
    pub fn from_duration(duration: std::time::Duration) -> Self {
        Self {
            total_ms: duration.as_millis() as u64,
        }
    }
}

/// Response metadata
#[derive(Debug, Clone, Default)]
pub struct ResponseMetadata {
    /// Model used
    pub model: String,
    /// Provider name
    pub provider: String,
}

/// Shared client type, passed explicitly to the pipeline
pub type SharedClient = Arc<dyn GenerationClient>;

// =============================================================================
// Generation Configuration
// =============================================================================

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl From<&LlmConfig> for SamplingParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

// =============================================================================
// Generation Client Trait
// =============================================================================

/// Text-generation backend
///
/// One call per question, no retry. A failure carries the backend's message
/// as `TopicError::Backend`.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate the full answer text for a prompt
    async fn generate(&self, prompt: &Prompt) -> Result<GenerationOutput>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model identifier in use
    fn model(&self) -> &str;
}

/// Create a shared client from configuration
///
/// Fails with `TopicError::Config` when the credential is missing, before any
/// request can be made.
pub fn create_client(config: &LlmConfig) -> Result<SharedClient> {
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::new(config)?)),
        _ => Err(TopicError::Config(format!(
            "Unknown provider: {}. Supported: gemini",
            config.provider
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_params_from_config() {
        let params = SamplingParams::from(&LlmConfig::default());
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_p, 0.95);
        assert_eq!(params.top_k, 40);
        assert_eq!(params.max_output_tokens, 4000);
    }

    #[test]
    fn test_unknown_provider() {
        let config = LlmConfig {
            provider: "openai".to_string(),
            ..LlmConfig::default()
        };
        assert!(matches!(create_client(&config), Err(TopicError::Config(_))));
    }

    #[test]
    fn test_token_usage_total() {
        let usage = TokenUsage::from_gemini(120, 30);
        assert_eq!(usage.total(), 150);
    }
}
