//! Scripted client for tests
//!
//! Returns a fixed answer or a fixed backend error, and counts calls.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{GenerationClient, GenerationOutput};
use crate::ai::prompt::Prompt;
use crate::types::{BackendError, Result};

pub(crate) enum Script {
    Answer(String),
    Fail(BackendError),
    /// Sleeps before answering
    Slow(Duration, String),
}

pub(crate) struct ScriptedClient {
    script: Script,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedClient {
    pub(crate) fn answering(text: &str) -> Self {
        Self::new(Script::Answer(text.to_string()))
    }

    pub(crate) fn failing(err: BackendError) -> Self {
        Self::new(Script::Fail(err))
    }

    pub(crate) fn slow(delay: Duration, text: &str) -> Self {
        Self::new(Script::Slow(delay, text.to_string()))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn generate(&self, prompt: &Prompt) -> Result<GenerationOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.as_str().to_string());

        match &self.script {
            Script::Answer(text) => Ok(GenerationOutput::text_only(text.clone())),
            Script::Fail(err) => Err(err.clone().into()),
            Script::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(GenerationOutput::text_only(text.clone()))
            }
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }
}
