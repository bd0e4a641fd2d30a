use crate::errors::OracleError;
use crate::extract::{bundle_from_value, parse_oracle_text};
use crate::judge::JudgeService;
use crate::model::ScoreBundle;
use crate::oracle::{OracleContext, OracleOutput};
use crate::text::clamp;

pub(crate) const RAW_PREVIEW_CHARS: usize = 900;

/// Everything the oracle path produced, successful or not.
pub(crate) struct OracleAttempt {
    /// Discovered capability path; empty when none was found.
    pub(crate) variant: String,
    /// Clamped raw text; empty for structured records or when nothing came back.
    pub(crate) raw_preview: String,
    pub(crate) outcome: Result<ScoreBundle, OracleError>,
}

pub(crate) async fn call_oracle_impl(svc: &JudgeService, prompt: String) -> OracleAttempt {
    let selected = match svc.adapter.discover() {
        Ok(selected) => selected,
        Err(e) => {
            return OracleAttempt {
                variant: String::new(),
                raw_preview: String::new(),
                outcome: Err(e),
            }
        }
    };
    let variant = selected.variant.path();

    let context = OracleContext::new(super::prompt::TASK, super::prompt::CRITERIA);
    let prompt_fn = move || prompt.clone();

    match selected.invoke(&prompt_fn, &context).await {
        Ok(OracleOutput::Record(value)) => OracleAttempt {
            variant,
            raw_preview: String::new(),
            outcome: bundle_from_value(&value),
        },
        Ok(OracleOutput::Text(text)) => {
            let outcome = parse_oracle_text(&text).and_then(|v| bundle_from_value(&v));
            OracleAttempt {
                variant,
                raw_preview: clamp(&text, RAW_PREVIEW_CHARS),
                outcome,
            }
        }
        Err(e) => OracleAttempt {
            variant,
            raw_preview: String::new(),
            outcome: Err(e),
        },
    }
}
