//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Loaded once at startup and read-only afterwards.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{generation, reveal};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Generation backend settings
    pub llm: LlmConfig,

    /// Domain gating settings
    pub gating: GatingConfig,

    /// Incremental reveal settings
    pub reveal: RevealConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
            gating: GatingConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `TopicError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        use crate::types::TopicError;

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(TopicError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if !(0.0..=1.0).contains(&self.llm.top_p) {
            return Err(TopicError::Config(format!(
                "LLM top_p must be between 0.0 and 1.0, got {}",
                self.llm.top_p
            )));
        }

        if self.llm.top_k == 0 {
            return Err(TopicError::Config(
                "LLM top_k must be greater than 0".to_string(),
            ));
        }

        if self.llm.max_output_tokens == 0 {
            return Err(TopicError::Config(
                "LLM max_output_tokens must be greater than 0".to_string(),
            ));
        }

        if self.llm.timeout_secs == Some(0) {
            return Err(TopicError::Config(
                "LLM timeout_secs must be greater than 0 when set".to_string(),
            ));
        }

        if self.llm.api_key_env.trim().is_empty() {
            return Err(TopicError::Config(
                "LLM api_key_env must name an environment variable".to_string(),
            ));
        }

        if self.reveal.long_text_threshold == 0 {
            return Err(TopicError::Config(
                "Reveal long_text_threshold must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name
    pub provider: String,

    /// Model name
    pub model: String,

    /// API base URL
    pub api_base: String,

    /// Environment variable holding the API key (the key itself is never stored)
    pub api_key_env: String,

    /// Temperature for generation
    pub temperature: f32,

    /// Nucleus sampling probability mass
    pub top_p: f32,

    /// Top-k sampling cutoff
    pub top_k: u32,

    /// Maximum output tokens
    pub max_output_tokens: u32,

    /// Optional deadline for one backend call; unset means wait indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: generation::DEFAULT_PROVIDER.to_string(),
            model: generation::DEFAULT_MODEL.to_string(),
            api_base: generation::DEFAULT_API_BASE.to_string(),
            api_key_env: generation::DEFAULT_API_KEY_ENV.to_string(),
            temperature: generation::TEMPERATURE,
            top_p: generation::TOP_P,
            top_k: generation::TOP_K,
            max_output_tokens: generation::MAX_OUTPUT_TOKENS,
            timeout_secs: None,
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// =============================================================================
// Gating Configuration
// =============================================================================

/// Whether the domain verdict blocks generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GatePolicy {
    /// Out-of-domain questions are refused before any backend call
    #[default]
    Enforce,
    /// The verdict is only logged; the prompt asks the backend to refuse
    Advisory,
}

impl std::fmt::Display for GatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatePolicy::Enforce => write!(f, "enforce"),
            GatePolicy::Advisory => write!(f, "advisory"),
        }
    }
}

impl std::str::FromStr for GatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enforce" => Ok(GatePolicy::Enforce),
            "advisory" => Ok(GatePolicy::Advisory),
            _ => Err(format!(
                "Unknown gate policy: {}. Valid values: enforce, advisory",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatingConfig {
    pub policy: GatePolicy,
}

// =============================================================================
// Reveal Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Reveal answers character by character; false prints them at once
    pub enabled: bool,

    /// Per-character delay for short answers (milliseconds)
    pub normal_delay_ms: u64,

    /// Per-character delay for long answers (milliseconds)
    pub fast_delay_ms: u64,

    /// Character count above which the fast delay applies
    pub long_text_threshold: usize,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            normal_delay_ms: reveal::NORMAL_DELAY_MS,
            fast_delay_ms: reveal::FAST_DELAY_MS,
            long_text_threshold: reveal::LONG_TEXT_THRESHOLD,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.timeout(), None);
        assert_eq!(config.gating.policy, GatePolicy::Enforce);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gate_policy() {
        assert_eq!(GatePolicy::Advisory.to_string(), "advisory");
        assert_eq!("ENFORCE".parse::<GatePolicy>().unwrap(), GatePolicy::Enforce);
        assert!("sometimes".parse::<GatePolicy>().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = Config::default();
        config.llm.top_p = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.llm.timeout_secs = Some(0);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.reveal.long_text_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_duration() {
        let config = LlmConfig {
            timeout_secs: Some(45),
            ..LlmConfig::default()
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(45)));
    }
}
