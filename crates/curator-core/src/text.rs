//! Free-text normalization shared by the pipeline and the stores.

use crate::model::CanonicalMode;

/// Trims surrounding whitespace and keeps at most `max_chars` characters.
pub fn clamp(s: &str, max_chars: usize) -> String {
    let trimmed = s.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => trimmed[..idx].to_string(),
        None => trimmed.to_string(),
    }
}

/// Turns line breaks into spaces and squeezes space runs until stable.
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = s.replace(['\n', '\r'], " ").trim().to_string();
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out
}

const GENLAYER_SYNONYMS: &[&str] = &[
    "genlayer",
    "genlayer project",
    "genlayer_project",
    "dapp",
    "project",
];
const STARTUP_SYNONYMS: &[&str] = &["startup", "startup pitch", "pitch", "startup_pitch"];
const ARTICLE_SYNONYMS: &[&str] = &["article", "blog", "essay", "post"];
const MEME_SYNONYMS: &[&str] = &["meme", "meme idea", "meme_idea", "joke"];

/// Maps a free-text mode label onto the closed set of modes.
///
/// Total: anything unrecognised (including the empty string) is `General`.
pub fn canonicalize_mode(raw: &str) -> CanonicalMode {
    let m = raw.trim().to_lowercase();
    let m = m.as_str();
    if GENLAYER_SYNONYMS.contains(&m) {
        CanonicalMode::Genlayer
    } else if STARTUP_SYNONYMS.contains(&m) {
        CanonicalMode::Startup
    } else if ARTICLE_SYNONYMS.contains(&m) {
        CanonicalMode::Article
    } else if MEME_SYNONYMS.contains(&m) {
        CanonicalMode::Meme
    } else {
        CanonicalMode::General
    }
}
