use super::{OracleContext, OracleFunction, OracleOutput, PromptFn};
use crate::errors::OracleError;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// One queued reply.
#[derive(Clone, Debug)]
pub enum ScriptedReply {
    Text(String),
    Record(serde_json::Value),
    Fail(String),
}

/// Deterministic oracle that replays queued replies.
///
/// Argument sets larger than `max_arity` are rejected with a signature
/// mismatch, which is how tests exercise the adapter's degradation. With
/// `max_arity` unset every argument set is rejected, the bare call included.
#[derive(Debug)]
pub struct ScriptedOracle {
    max_arity: Option<usize>,
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: Mutex<Vec<OracleContext>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            max_arity: Some(2),
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_max_arity(mut self, max_arity: usize) -> Self {
        self.max_arity = Some(max_arity);
        self
    }

    pub fn rejecting_every_arity(mut self) -> Self {
        self.max_arity = None;
        self
    }

    /// Every attempted argument set, including rejected ones.
    pub async fn calls(&self) -> Vec<OracleContext> {
        self.calls.lock().await.clone()
    }

    /// Prompts seen by accepted calls.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl OracleFunction for ScriptedOracle {
    async fn invoke(
        &self,
        prompt: &PromptFn,
        context: &OracleContext,
    ) -> Result<OracleOutput, OracleError> {
        self.calls.lock().await.push(context.clone());
        match self.max_arity {
            Some(max) if context.arity() <= max => {}
            Some(max) => {
                return Err(OracleError::SignatureMismatch(format!(
                    "takes at most {max} keyword arguments but {} were given",
                    context.arity()
                )));
            }
            None => {
                return Err(OracleError::SignatureMismatch(format!(
                    "unexpected call shape with {} keyword arguments",
                    context.arity()
                )));
            }
        }
        self.prompts.lock().await.push(prompt());

        match self.replies.lock().await.pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(OracleOutput::Text(text)),
            Some(ScriptedReply::Record(value)) => Ok(OracleOutput::Record(value)),
            Some(ScriptedReply::Fail(message)) => Err(OracleError::Invocation(message)),
            None => Err(OracleError::Invocation(
                "no more scripted responses".to_string(),
            )),
        }
    }
}
