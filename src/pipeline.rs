//! Question Answering Pipeline
//!
//! One request runs: domain gate → prompt → generation → error
//! classification. The result is a complete [`Answer`] that callers display
//! at once or reveal incrementally with [`Assistant::respond`].
//!
//! Requests share no mutable state; an `Assistant` can serve concurrent
//! callers behind an `Arc`.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ai::prompt::{REFUSAL_SENTENCE, build_prompt};
use crate::ai::provider::{SharedClient, create_client};
use crate::ai::timeout::with_timeout;
use crate::config::{Config, GatePolicy};
use crate::domain::{DomainClassifier, DomainVerdict};
use crate::reveal::{self, Pacing, RevealSink};
use crate::types::{
    ErrorCategory, ErrorClassifier, Query, Result, StructuredClassifier, message_for,
};

/// Shown when the query is empty or whitespace only
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a question about Palestine.";

/// How a request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank query, nothing was asked
    Empty,
    /// Out-of-domain query refused locally
    Refused,
    /// Backend produced an answer
    Answered,
    /// Backend failed; the text is the category message
    Failed(ErrorCategory),
}

impl Outcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, Outcome::Answered)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Empty => "empty",
            Outcome::Refused => "refused",
            Outcome::Answered => "answered",
            Outcome::Failed(_) => "failed",
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Outcome::Failed(category) => serializer.serialize_str(&category.to_string()),
            other => serializer.serialize_str(other.label()),
        }
    }
}

/// Text to display for one query, with how it was produced
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub text: String,
    pub outcome: Outcome,
    pub verdict: DomainVerdict,
}

/// Question answering front end over a generation client
pub struct Assistant {
    client: SharedClient,
    classifier: Arc<dyn ErrorClassifier>,
    domain: DomainClassifier,
    policy: GatePolicy,
    timeout: Option<Duration>,
}

impl Assistant {
    pub fn new(
        client: SharedClient,
        classifier: Arc<dyn ErrorClassifier>,
        policy: GatePolicy,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            client,
            classifier,
            domain: DomainClassifier::default(),
            policy,
            timeout,
        }
    }

    /// Build from configuration with the Gemini backend
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = create_client(&config.llm)?;
        Ok(Self::new(
            client,
            Arc::new(StructuredClassifier),
            config.gating.policy,
            config.llm.timeout(),
        ))
    }

    /// Replace the domain classifier
    pub fn with_domain(mut self, domain: DomainClassifier) -> Self {
        self.domain = domain;
        self
    }

    /// Answer one query
    ///
    /// Backend failures become `Outcome::Failed` with a fixed message; only
    /// configuration and other fatal errors are returned as `Err`.
    pub async fn answer(&self, query: impl Into<Query>) -> Result<Answer> {
        let query = query.into();
        let verdict = self.domain.verdict(query.as_str());

        if query.is_blank() {
            return Ok(Answer {
                text: EMPTY_QUERY_MESSAGE.to_string(),
                outcome: Outcome::Empty,
                verdict,
            });
        }

        if !verdict.in_domain {
            match self.policy {
                GatePolicy::Enforce => {
                    info!("Refusing out-of-domain query");
                    return Ok(Answer {
                        text: REFUSAL_SENTENCE.to_string(),
                        outcome: Outcome::Refused,
                        verdict,
                    });
                }
                GatePolicy::Advisory => {
                    debug!("Query looks out of domain, deferring to the model");
                }
            }
        } else {
            debug!("Query in domain (matched {:?})", verdict.matched);
        }

        let prompt = build_prompt(query.as_str());
        debug!(
            provider = self.client.name(),
            prompt_bytes = prompt.len(),
            "Calling backend"
        );
        let result = with_timeout(
            self.timeout,
            self.client.generate(&prompt),
            "generate answer",
        )
        .await;

        match result {
            Ok(output) => {
                info!(
                    provider = %output.metadata.provider,
                    model = %output.metadata.model,
                    elapsed_ms = output.timing.total_ms,
                    output_tokens = output.usage.output_tokens,
                    "Answer generated"
                );
                Ok(Answer {
                    text: output.text,
                    outcome: Outcome::Answered,
                    verdict,
                })
            }
            Err(err) => match err.category(self.classifier.as_ref()) {
                Some(category) => {
                    warn!("Generation failed ({}): {}", category, err);
                    Ok(Answer {
                        text: message_for(&category),
                        outcome: Outcome::Failed(category),
                        verdict,
                    })
                }
                None => Err(err),
            },
        }
    }

    /// Answer one query and reveal the text into `sink`
    pub async fn respond<S: RevealSink + ?Sized>(
        &self,
        query: impl Into<Query>,
        pacing: Pacing,
        sink: &mut S,
    ) -> Result<Answer> {
        let answer = self.answer(query).await?;
        reveal::play(&answer.text, pacing, sink).await?;
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::scripted::ScriptedClient;
    use crate::reveal::CollectingSink;
    use crate::types::{BackendError, MessageClassifier, TopicError};

    fn assistant(client: Arc<ScriptedClient>, policy: GatePolicy) -> Assistant {
        Assistant::new(client, Arc::new(MessageClassifier), policy, None)
    }

    #[tokio::test]
    async fn test_in_domain_answer_is_revealed_exactly() {
        let client = Arc::new(ScriptedClient::answering("The Nakba refers to..."));
        let assistant = assistant(client.clone(), GatePolicy::Enforce);
        let mut sink = CollectingSink::default();

        let answer = assistant
            .respond("What happened in 1948?", Pacing::Instant, &mut sink)
            .await
            .unwrap();

        assert_eq!(answer.outcome, Outcome::Answered);
        assert_eq!(sink.final_text(), Some("The Nakba refers to..."));
        assert_eq!(sink.states().len(), "The Nakba refers to...".chars().count());
        assert_eq!(client.calls(), 1);
        assert!(
            client
                .last_prompt()
                .unwrap()
                .contains("What happened in 1948?")
        );
    }

    #[tokio::test]
    async fn test_timeout_failure_shows_fixed_message() {
        let client = Arc::new(ScriptedClient::failing(BackendError::new(
            "Request timeout after 30s",
        )));
        let answer = assistant(client, GatePolicy::Enforce)
            .answer("What is happening in Gaza?")
            .await
            .unwrap();

        assert_eq!(answer.outcome, Outcome::Failed(ErrorCategory::Timeout));
        assert_eq!(
            answer.text,
            "❌ The request timed out. Please try again with a more specific question."
        );
    }

    #[tokio::test]
    async fn test_quota_and_safety_failures() {
        let client = Arc::new(ScriptedClient::failing(BackendError::new(
            "quota exceeded for project",
        )));
        let answer = assistant(client, GatePolicy::Enforce)
            .answer("Tell me about Jerusalem")
            .await
            .unwrap();
        assert_eq!(answer.outcome, Outcome::Failed(ErrorCategory::Quota));

        let client = Arc::new(ScriptedClient::failing(BackendError::new(
            "response blocked",
        )));
        let answer = assistant(client, GatePolicy::Enforce)
            .answer("Tell me about Jerusalem")
            .await
            .unwrap();
        assert_eq!(answer.outcome, Outcome::Failed(ErrorCategory::SafetyBlock));
    }

    #[tokio::test]
    async fn test_unclassified_failure_keeps_raw_text() {
        let client = Arc::new(ScriptedClient::failing(BackendError::new(
            "connection reset by peer",
        )));
        let answer = assistant(client, GatePolicy::Enforce)
            .answer("History of the West Bank")
            .await
            .unwrap();

        assert!(matches!(answer.outcome, Outcome::Failed(ErrorCategory::Unclassified { .. })));
        assert!(answer.text.contains("connection reset by peer"));
    }

    #[tokio::test]
    async fn test_enforce_refuses_without_backend_call() {
        let client = Arc::new(ScriptedClient::answering("unused"));
        let answer = assistant(client.clone(), GatePolicy::Enforce)
            .answer("What's the weather in Paris?")
            .await
            .unwrap();

        assert_eq!(answer.outcome, Outcome::Refused);
        assert_eq!(answer.text, REFUSAL_SENTENCE);
        assert!(!answer.verdict.in_domain);
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_advisory_defers_to_backend() {
        let client = Arc::new(ScriptedClient::answering(REFUSAL_SENTENCE));
        let answer = assistant(client.clone(), GatePolicy::Advisory)
            .answer("What's the weather in Paris?")
            .await
            .unwrap();

        assert_eq!(answer.outcome, Outcome::Answered);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_query() {
        let client = Arc::new(ScriptedClient::answering("unused"));
        let answer = assistant(client.clone(), GatePolicy::Advisory)
            .answer("   \n")
            .await
            .unwrap();

        assert_eq!(answer.outcome, Outcome::Empty);
        assert_eq!(answer.text, EMPTY_QUERY_MESSAGE);
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_local_timeout_maps_to_timeout_category() {
        let client = Arc::new(ScriptedClient::slow(Duration::from_secs(30), "late"));
        let assistant = Assistant::new(
            client,
            Arc::new(StructuredClassifier),
            GatePolicy::Enforce,
            Some(Duration::from_secs(5)),
        );

        let answer = assistant.answer("Gaza ceasefire news").await.unwrap();
        assert_eq!(answer.outcome, Outcome::Failed(ErrorCategory::Timeout));
    }

    #[tokio::test]
    async fn test_from_config_without_key_is_fatal() {
        let mut config = Config::default();
        config.llm.api_key_env = "TOPICGATE_TEST_UNSET_KEY".to_string();
        assert!(matches!(
            Assistant::from_config(&config),
            Err(TopicError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_custom_domain_gates_requests() {
        static SET: &[&str] = &["olive harvest"];
        static SETS: &[&[&str]] = &[SET];

        let client = Arc::new(ScriptedClient::answering("Harvest season runs..."));
        let assistant = assistant(client.clone(), GatePolicy::Enforce)
            .with_domain(DomainClassifier::with_keywords(SETS));

        let refused = assistant.answer("Tell me about Gaza").await.unwrap();
        assert_eq!(refused.outcome, Outcome::Refused);
        assert_eq!(client.calls(), 0);

        let answered = assistant.answer("When is the olive harvest?").await.unwrap();
        assert_eq!(answered.outcome, Outcome::Answered);
        assert_eq!(answered.verdict.matched, Some("olive harvest"));
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn test_outcome_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Outcome::Refused).unwrap(),
            "\"refused\""
        );
        assert_eq!(
            serde_json::to_string(&Outcome::Failed(ErrorCategory::Quota)).unwrap(),
            "\"QUOTA\""
        );
    }
}
