use crate::identity::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of evaluation categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalMode {
    Genlayer,
    Startup,
    Article,
    Meme,
    #[default]
    General,
}

impl CanonicalMode {
    pub const ALL: [CanonicalMode; 5] = [
        CanonicalMode::Genlayer,
        CanonicalMode::Startup,
        CanonicalMode::Article,
        CanonicalMode::Meme,
        CanonicalMode::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalMode::Genlayer => "genlayer",
            CanonicalMode::Startup => "startup",
            CanonicalMode::Article => "article",
            CanonicalMode::Meme => "meme",
            CanonicalMode::General => "general",
        }
    }
}

impl fmt::Display for CanonicalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submission as received from the caller, before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationRequest {
    pub mode: String,
    pub title: String,
    pub url: String,
    pub content: String,
    pub submitter: AccountId,
}

/// Sub-scores. Values from the oracle path are passed through unvalidated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Scores {
    pub originality: i64,
    pub clarity: i64,
    pub value: i64,
    pub execution: i64,
    pub virality: i64,
}

impl Scores {
    pub fn sum(&self) -> i64 {
        self.originality + self.clarity + self.value + self.execution + self.virality
    }
}

/// Score bundle produced by either the oracle path or the fallback scorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBundle {
    pub scores: Scores,
    pub total: i64,
    pub feedback: String,
    pub improvements: Vec<String>,
    pub tags: Vec<String>,
}

pub const MAX_TOTAL: u8 = 50;

impl ScoreBundle {
    /// `total` clamped to `[0, 50]`, whatever produced it.
    pub fn clamped_total(&self) -> u8 {
        self.total.clamp(0, i64::from(MAX_TOTAL)) as u8
    }
}

/// The record cached per submitter after every accepted call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub mode: CanonicalMode,
    pub title: String,
    pub url: String,
    pub scores: Scores,
    pub total: u8,
    pub feedback: String,
    pub improvements: Vec<String>,
    pub tags: Vec<String>,
    pub saved: bool,
    pub fallback: bool,
}

impl EvaluationResult {
    /// Document returned for accounts that have never been evaluated.
    pub fn empty() -> Self {
        Self {
            mode: CanonicalMode::General,
            title: String::new(),
            url: String::new(),
            scores: Scores::default(),
            total: 0,
            feedback: String::new(),
            improvements: Vec::new(),
            tags: Vec::new(),
            saved: false,
            fallback: false,
        }
    }
}

/// Public gallery record, derived from an admitted result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub mode: String,
    pub title: String,
    pub url: String,
    pub total: u8,
    pub feedback: String,
    pub tags: Vec<String>,
    pub author: AccountId,
}

/// Last-call snapshot of the oracle path for one submitter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiagnosticRecord {
    pub error: String,
    #[serde(rename = "eq")]
    pub oracle_variant_used: String,
    #[serde(rename = "raw")]
    pub raw_output_preview: String,
}

impl DiagnosticRecord {
    /// Document returned when no record exists.
    pub fn missing() -> Self {
        Self {
            error: "no debug".to_string(),
            oracle_variant_used: String::new(),
            raw_output_preview: String::new(),
        }
    }
}
