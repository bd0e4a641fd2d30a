use super::{OracleContext, OracleFunction, OracleOutput, PromptFn};
use crate::config::OracleConfig;
use crate::errors::{JudgeError, OracleError};
use async_trait::async_trait;
use serde_json::json;

/// OpenAI-compatible chat-completions oracle.
///
/// `task` and `criteria` travel as a system message; the prompt is the user
/// message. Returns the raw completion text.
pub struct HttpOracle {
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    api_key: String,
    client: reqwest::Client,
}

impl HttpOracle {
    pub fn new(
        model: String,
        base_url: String,
        api_key: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            temperature,
            max_tokens,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Reads the API key from the environment variable named in the config.
    pub fn from_config(cfg: &OracleConfig) -> Result<Self, JudgeError> {
        let api_key = std::env::var(&cfg.api_key_env).map_err(|_| {
            JudgeError::config(format!(
                "oracle provider '{}' needs an API key in ${}",
                cfg.provider, cfg.api_key_env
            ))
        })?;
        Ok(Self::new(
            cfg.model.clone(),
            cfg.base_url.clone(),
            api_key,
            cfg.temperature,
            cfg.max_tokens,
        ))
    }

    fn messages(prompt: String, context: &OracleContext) -> Vec<serde_json::Value> {
        let mut system = Vec::new();
        if let Some(task) = &context.task {
            system.push(format!("Task: {task}"));
        }
        if let Some(criteria) = &context.criteria {
            system.push(format!("Criteria: {criteria}"));
        }

        let mut messages = Vec::new();
        if !system.is_empty() {
            messages.push(json!({ "role": "system", "content": system.join("\n") }));
        }
        messages.push(json!({ "role": "user", "content": prompt }));
        messages
    }
}

#[async_trait]
impl OracleFunction for HttpOracle {
    async fn invoke(
        &self,
        prompt: &PromptFn,
        context: &OracleContext,
    ) -> Result<OracleOutput, OracleError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": Self::messages(prompt(), context),
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::Invocation(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            return Err(OracleError::Invocation(format!(
                "chat API error (status {status}): {error_text}"
            )));
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| OracleError::Invocation(e.to_string()))?;

        // choices[0].message.content
        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                OracleError::Invocation("chat API response missing content".to_string())
            })?
            .to_string();

        Ok(OracleOutput::Text(text))
    }
}
