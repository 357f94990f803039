//! Gemini API Client
//!
//! Generation backend using Google's `generateContent` REST endpoint.
//! The whole answer is returned in one response; no token streaming.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::{
    GenerationClient, GenerationOutput, ResponseMetadata, ResponseTiming, SamplingParams,
    TokenUsage,
};
use crate::ai::prompt::Prompt;
use crate::config::LlmConfig;
use crate::constants::network::CONNECTION_TIMEOUT_SECS;
use crate::types::{BackendError, Result, TopicError};

/// Finish reasons that mean the answer was withheld by a safety filter
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

/// Gemini client with secure API key handling
pub struct GeminiClient {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    model: String,
    sampling: SamplingParams,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("sampling", &self.sampling)
            .finish()
    }
}

impl GeminiClient {
    /// Build a client, reading the API key once from the configured env var
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TopicError::Config(format!(
                    "Gemini API key not found. Set the {} environment variable",
                    config.api_key_env
                ))
            })?;

        Self::with_api_key(config, SecretString::from(api_key))
    }

    /// Build a client with an explicit API key
    pub fn with_api_key(config: &LlmConfig, api_key: SecretString) -> Result<Self> {
        let api_base = Self::validate_endpoint(&config.api_base)?;

        // Only the connect phase is bounded; the call itself waits for the backend.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECTION_TIMEOUT_SECS))
            .build()
            .map_err(|e| TopicError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_base,
            model: config.model.clone(),
            sampling: SamplingParams::from(config),
            client,
        })
    }

    /// Validate endpoint URL, only http/https allowed
    fn validate_endpoint(endpoint: &str) -> Result<String> {
        let url = url::Url::parse(endpoint).map_err(|e| {
            TopicError::Config(format!("Invalid Gemini endpoint URL '{}': {}", endpoint, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(TopicError::Config(format!(
                "Gemini endpoint must use http or https scheme, got: {}",
                url.scheme()
            )));
        }

        let mut result = url.to_string();
        if result.ends_with('/') {
            result.pop();
        }
        Ok(result)
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn build_request(&self, prompt: &Prompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.as_str().to_string()),
                    thought: None,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.sampling.temperature,
                top_p: self.sampling.top_p,
                top_k: self.sampling.top_k,
                max_output_tokens: self.sampling.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &Prompt) -> Result<GenerationOutput> {
        info!(
            "Generating with Gemini (model: {}, temperature: {})",
            self.model, self.sampling.temperature
        );

        let start_time = Instant::now();
        let request = self.build_request(prompt);

        debug!("Sending request to Gemini API ({} prompt bytes)", prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let elapsed = start_time.elapsed();
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}", status);
            return Err(parse_error_body(status.as_u16(), &body).into());
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            TopicError::backend(format!("Failed to parse Gemini response: {}", e))
        })?;

        let (text, usage) = extract_answer(body)?;

        debug!(
            "Received {} chars from Gemini in {}ms",
            text.chars().count(),
            elapsed.as_millis()
        );

        Ok(GenerationOutput {
            text,
            usage,
            timing: ResponseTiming::from_duration(elapsed),
            metadata: ResponseMetadata {
                model: self.model.clone(),
                provider: "gemini".to_string(),
            },
        })
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn transport_error(err: reqwest::Error) -> TopicError {
    if err.is_timeout() {
        BackendError::new(format!("Gemini request timeout: {}", err))
            .status("DEADLINE_EXCEEDED")
            .into()
    } else if err.is_connect() {
        BackendError::new(format!("Failed to connect to Gemini API: {}", err)).into()
    } else {
        BackendError::new(format!("Gemini request failed: {}", err)).into()
    }
}

/// Turn a non-2xx response into a structured backend error
fn parse_error_body(status_code: u16, body: &str) -> BackendError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let mut err = BackendError::new(envelope.error.message).status_code(status_code);
            if let Some(status) = envelope.error.status {
                err = err.status(status);
            }
            err
        }
        Err(_) => BackendError::new(format!("Gemini API error ({}): {}", status_code, body))
            .status_code(status_code),
    }
}

/// Pull the answer text out of a successful response
///
/// A blocked prompt, a safety finish reason without text, or an empty answer
/// all become backend errors.
fn extract_answer(body: GenerateContentResponse) -> Result<(String, TokenUsage)> {
    if let Some(reason) = body.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(BackendError::new(format!("Prompt blocked by Gemini: {}", reason))
            .block_reason(reason)
            .into());
    }

    let usage = body
        .usage_metadata
        .map(|u| {
            TokenUsage::from_gemini(
                u.prompt_token_count.unwrap_or(0),
                u.candidates_token_count.unwrap_or(0),
            )
        })
        .unwrap_or_default();

    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| TopicError::backend("No candidates in Gemini response"))?;

    let text: String = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter(|p| !p.thought.unwrap_or(false))
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        if let Some(reason) = candidate.finish_reason
            && BLOCKING_FINISH_REASONS.contains(&reason.as_str())
        {
            return Err(BackendError::new(format!("Response blocked by Gemini: {}", reason))
                .block_reason(reason)
                .into());
        }
        return Err(TopicError::backend("Empty response from Gemini"));
    }

    Ok((text, usage))
}

// Request/Response types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    thought: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    status: Option<String>,
}
