use crate::errors::JudgeError;
use crate::fallback::fallback_score;
use crate::judge::JudgeService;
use crate::model::{DiagnosticRecord, EvaluationRequest, EvaluationResult, GalleryEntry};
use crate::text::{canonicalize_mode, clamp};
use tracing::{info, warn};

pub(crate) const CONTENT_MIN_CHARS: usize = 50;
pub(crate) const CONTENT_MAX_CHARS: usize = 4000;
pub(crate) const TITLE_CHARS: usize = 120;
pub(crate) const URL_CHARS: usize = 220;
pub(crate) const ERROR_CHARS: usize = 300;

pub(crate) async fn judge_content_impl(
    svc: &mut JudgeService,
    request: EvaluationRequest,
) -> Result<bool, JudgeError> {
    let content = request.content.trim();
    let len = content.chars().count();
    if len < CONTENT_MIN_CHARS {
        return Err(JudgeError::validation(format!(
            "content is too short ({len} < {CONTENT_MIN_CHARS} chars)"
        )));
    }
    if len > CONTENT_MAX_CHARS {
        return Err(JudgeError::validation(format!(
            "content is too long ({len} > {CONTENT_MAX_CHARS} chars)"
        )));
    }

    let mode = canonicalize_mode(&request.mode);
    let title = clamp(&request.title, TITLE_CHARS);
    let url = clamp(&request.url, URL_CHARS);
    let submitter = request.submitter;

    let prompt = super::prompt::build_prompt_impl(mode, &title, &url, content);
    let attempt = super::client::call_oracle_impl(svc, prompt).await;

    let (bundle, fallback, error) = match attempt.outcome {
        Ok(bundle) => (bundle, false, String::new()),
        Err(e) => {
            warn!(
                submitter = %submitter,
                variant = %attempt.variant,
                error = %e,
                "oracle path failed, using fallback scoring"
            );
            (fallback_score(mode, content, &submitter), true, e.to_string())
        }
    };
    let total = bundle.clamped_total();

    // Everything that can fail is done before the first write.
    let saved = svc.state.gallery.admits(total);
    let result = EvaluationResult {
        mode,
        title: title.clone(),
        url: url.clone(),
        scores: bundle.scores,
        total,
        feedback: bundle.feedback.clone(),
        improvements: bundle.improvements,
        tags: bundle.tags.clone(),
        saved,
        fallback,
    };
    let debug = DiagnosticRecord {
        error: clamp(&error, ERROR_CHARS),
        oracle_variant_used: attempt.variant,
        raw_output_preview: attempt.raw_preview,
    };
    let result_json = serde_json::to_string(&result)?;
    let debug_json = serde_json::to_string(&debug)?;

    let admission = svc.state.gallery.offer(GalleryEntry {
        mode: mode.as_str().to_string(),
        title,
        url,
        total,
        feedback: bundle.feedback,
        tags: bundle.tags,
        author: submitter.clone(),
    });
    debug_assert_eq!(admission.is_saved(), saved);
    svc.state.results.put(submitter.clone(), result_json);
    svc.state.debug.put(submitter.clone(), debug_json);

    info!(
        submitter = %submitter,
        mode = %mode,
        total,
        saved,
        fallback,
        "content judged"
    );
    Ok(true)
}
