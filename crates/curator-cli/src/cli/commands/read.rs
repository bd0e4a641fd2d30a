use super::super::args::AccountArgs;
use crate::exit_codes::SUCCESS;
use curator_core::oracle::StaticNamespace;
use curator_core::JudgeService;
use std::path::Path;
use std::sync::Arc;

/// Reads never consult the oracle, so the service is built with an empty
/// namespace regardless of configuration.
fn read_only_service(config: Option<&Path>, state_path: &Path) -> anyhow::Result<JudgeService> {
    let cfg = super::load_config(config)?;
    let state = super::load_state(&cfg, state_path)?;
    Ok(JudgeService::with_state(
        cfg,
        Arc::new(StaticNamespace::new()),
        state,
    )?)
}

pub fn gallery(config: Option<&Path>, state_path: &Path) -> anyhow::Result<i32> {
    println!("{}", read_only_service(config, state_path)?.get_gallery());
    Ok(SUCCESS)
}

pub fn last_result(
    args: AccountArgs,
    config: Option<&Path>,
    state_path: &Path,
) -> anyhow::Result<i32> {
    println!(
        "{}",
        read_only_service(config, state_path)?.get_last_result(&args.account)
    );
    Ok(SUCCESS)
}

pub fn last_debug(
    args: AccountArgs,
    config: Option<&Path>,
    state_path: &Path,
) -> anyhow::Result<i32> {
    println!(
        "{}",
        read_only_service(config, state_path)?.get_last_debug(&args.account)
    );
    Ok(SUCCESS)
}
