use crate::errors::JudgeError;
use crate::oracle::is_known_variant;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service configuration, fixed at construction.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CuratorConfig {
    /// Gallery capacity. Oldest entries are evicted first.
    pub max_gallery: usize,

    /// Admission gate: results below this total never reach the gallery.
    pub min_save_total: u8,

    pub oracle: OracleConfig,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            max_gallery: 20,
            min_save_total: 35,
            oracle: OracleConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OracleProvider {
    /// No capability registered; every call takes the fallback path.
    #[default]
    None,
    /// OpenAI-compatible chat-completions endpoint.
    Openai,
}

impl std::fmt::Display for OracleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleProvider::None => f.write_str("none"),
            OracleProvider::Openai => f.write_str("openai"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OracleConfig {
    pub provider: OracleProvider,

    /// Capability name the provider is registered under in the namespace.
    pub variant: String,

    pub model: String,
    pub base_url: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            provider: OracleProvider::None,
            variant: "eq_principle_prompt_non_comparative".to_string(),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.0,
            max_tokens: 600,
        }
    }
}

impl CuratorConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, JudgeError> {
        let cfg: Self = serde_yaml::from_str(s)
            .map_err(|e| JudgeError::config(format!("failed to parse config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, JudgeError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            JudgeError::config(format!("failed to read config {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), JudgeError> {
        if self.max_gallery == 0 {
            return Err(JudgeError::config("max_gallery must be at least 1"));
        }
        if self.min_save_total > crate::model::MAX_TOTAL {
            return Err(JudgeError::config(format!(
                "min_save_total must be <= {}, got {}",
                crate::model::MAX_TOTAL,
                self.min_save_total
            )));
        }
        if self.oracle.provider != OracleProvider::None && !is_known_variant(&self.oracle.variant) {
            return Err(JudgeError::config(format!(
                "unknown oracle variant '{}'",
                self.oracle.variant
            )));
        }
        Ok(())
    }
}
