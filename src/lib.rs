//! topicgate - Topic-Restricted Question Answering
//!
//! A conversational assistant that answers questions about Palestine and
//! refuses everything else. Answers come from a hosted generation backend and
//! are revealed on the terminal character by character.
//!
//! ## Request Flow
//!
//! 1. Domain gate: keyword check on the raw query
//! 2. Prompt: fixed instruction template around the question
//! 3. Generation: one backend call, no retries
//! 4. Failure classification into a fixed user-facing message
//! 5. Incremental reveal of the final text
//!
//! ## Quick Start
//!
//! ```ignore
//! use topicgate::{Assistant, ConfigLoader};
//! use topicgate::reveal::{Pacing, TerminalSink};
//!
//! let config = ConfigLoader::load()?;
//! let assistant = Assistant::from_config(&config)?;
//! let mut sink = TerminalSink::stdout();
//! assistant
//!     .respond("What happened in 1948?", Pacing::from(&config.reveal), &mut sink)
//!     .await?;
//! ```
//!
//! ## Modules
//!
//! - [`domain`]: keyword domain classifier
//! - [`ai`]: prompt construction, generation backend, timeouts
//! - [`reveal`]: incremental prefix emitter
//! - [`pipeline`]: the end-to-end `Assistant`
//! - [`sources`]: catalogue of articles from reliable outlets
//! - [`config`]: layered configuration

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod pipeline;
pub mod reveal;
pub mod sources;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, GatePolicy};

// Error Types
pub use types::error::{
    BackendError, ErrorCategory, ErrorClassifier, MessageClassifier, Result, StructuredClassifier,
    TopicError, message_for,
};

// Pipeline
pub use domain::{DomainClassifier, DomainVerdict, is_in_domain};
pub use pipeline::{Answer, Assistant, Outcome};
pub use types::Query;

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    GeminiClient, GenerationClient, GenerationOutput, Prompt, REFUSAL_SENTENCE, SharedClient,
    build_prompt, create_client, with_timeout,
};

// =============================================================================
// Reveal Re-exports
// =============================================================================

pub use reveal::{Pacing, RevealSink, reveal, reveal_stream};
