//! Best-effort recovery of a JSON object from free-form oracle text, and
//! coercion of that object into a score bundle.

use crate::errors::OracleError;
use crate::model::{ScoreBundle, Scores};
use crate::text::{clamp, collapse_whitespace};
use serde_json::Value;

pub const FEEDBACK_MAX: usize = 280;
pub const IMPROVEMENTS_MAX: usize = 3;
pub const IMPROVEMENT_CHARS: usize = 90;
pub const TAGS_MAX: usize = 6;
pub const TAG_CHARS: usize = 40;

/// Slices from the first `{` to the last `}` (when ordered), normalizes
/// typographic quotes and collapses whitespace.
///
/// The output is not guaranteed to parse. Nested braces inside surrounding
/// prose can widen the slice; callers must handle a failed parse.
pub fn extract_json(raw: &str) -> String {
    let s = raw.trim();
    let sliced = match (s.find('{'), s.rfind('}')) {
        (Some(first), Some(last)) if last > first => &s[first..=last],
        _ => s,
    };
    let normalized = sliced
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");
    collapse_whitespace(&normalized)
}

/// Extracts and parses oracle text into a JSON object.
pub fn parse_oracle_text(raw: &str) -> Result<Value, OracleError> {
    let candidate = extract_json(raw);
    let value: Value = serde_json::from_str(&candidate)
        .map_err(|e| OracleError::Malformed(format!("invalid JSON: {e}")))?;
    if !value.is_object() {
        return Err(OracleError::Malformed(
            "expected a JSON object at top level".to_string(),
        ));
    }
    Ok(value)
}

/// Reads the evaluation fields out of a parsed object.
///
/// Absent or mistyped numbers become 0; absent collections become empty.
/// Sub-scores and `total` are not range-checked here.
pub fn bundle_from_value(value: &Value) -> Result<ScoreBundle, OracleError> {
    let obj = value
        .as_object()
        .ok_or_else(|| OracleError::Malformed("expected a JSON object".to_string()))?;

    let scores = obj.get("scores").cloned().unwrap_or(Value::Null);
    let score = |key: &str| scores.get(key).map(coerce_int).unwrap_or(0);

    Ok(ScoreBundle {
        scores: Scores {
            originality: score("originality"),
            clarity: score("clarity"),
            value: score("value"),
            execution: score("execution"),
            virality: score("virality"),
        },
        total: obj.get("total").map(coerce_int).unwrap_or(0),
        feedback: clamp(
            &collapse_whitespace(&obj.get("feedback").map(coerce_string).unwrap_or_default()),
            FEEDBACK_MAX,
        ),
        improvements: string_list(obj.get("improvements"), IMPROVEMENTS_MAX, IMPROVEMENT_CHARS),
        tags: string_list(obj.get("tags"), TAGS_MAX, TAG_CHARS),
    })
}

fn coerce_int(v: &Value) -> i64 {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn coerce_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_list(v: Option<&Value>, max_items: usize, max_chars: usize) -> Vec<String> {
    let Some(Value::Array(items)) = v else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .map(|s| clamp(&collapse_whitespace(s), max_chars))
        .filter(|s| !s.is_empty())
        .take(max_items)
        .collect()
}
