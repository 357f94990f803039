//! AI Integration Layer
//!
//! Prompt construction and the generation backend.

pub mod prompt;
pub mod provider;
pub mod timeout;

pub use prompt::{
    Prompt, PromptBuilder, PromptSection, PromptTemplates, REFUSAL_SENTENCE, build_prompt,
};
pub use provider::{
    GeminiClient, GenerationClient, GenerationOutput, ResponseMetadata, ResponseTiming,
    SamplingParams, SharedClient, TokenUsage, create_client,
};
pub use timeout::with_timeout;
