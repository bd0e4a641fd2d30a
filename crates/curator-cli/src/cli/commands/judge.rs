use super::super::args::JudgeArgs;
use crate::exit_codes::{SUCCESS, VALIDATION_FAILED};
use anyhow::Context;
use curator_core::{AccountId, EvaluationRequest, JudgeService};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub async fn run(
    args: JudgeArgs,
    config: Option<&Path>,
    state_path: &Path,
) -> anyhow::Result<i32> {
    let cfg = super::load_config(config)?;
    let caller = AccountId::parse(&args.caller)?;
    let content = match (&args.content, &args.content_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("reading content from {}", path.display()))?,
        (None, None) => anyhow::bail!("either --content or --content-file is required"),
    };

    let namespace = JudgeService::namespace_from_config(&cfg)?;
    if namespace.is_empty() {
        info!("no oracle provider configured; results will use fallback scoring");
    }
    let state = super::load_state(&cfg, state_path)?;
    let mut svc = JudgeService::with_state(cfg, Arc::new(namespace), state)?;

    let request = EvaluationRequest {
        mode: args.mode,
        title: args.title,
        url: args.url,
        content,
        submitter: caller,
    };
    match svc.judge_content(request).await {
        Ok(ok) => {
            let gallery = &svc.state().gallery;
            info!(
                entries = gallery.len(),
                capacity = gallery.capacity(),
                "gallery after judge"
            );
            svc.into_state()
                .save(state_path)
                .with_context(|| format!("writing state to {}", state_path.display()))?;
            println!("{ok}");
            Ok(SUCCESS)
        }
        Err(e) => {
            let code = e.exit_code();
            if code == VALIDATION_FAILED {
                eprintln!("{e}");
            } else {
                eprintln!("fatal: {e}");
            }
            Ok(code)
        }
    }
}
