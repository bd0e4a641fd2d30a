mod dispatch;
pub mod judge;
pub mod read;

pub use dispatch::dispatch;

use anyhow::Context;
use curator_core::storage::CuratorState;
use curator_core::CuratorConfig;
use std::path::Path;

pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<CuratorConfig> {
    match path {
        Some(p) => CuratorConfig::load(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(CuratorConfig::default()),
    }
}

pub(crate) fn load_state(cfg: &CuratorConfig, path: &Path) -> anyhow::Result<CuratorState> {
    CuratorState::load_or_default(cfg, path)
        .with_context(|| format!("loading state from {}", path.display()))
}
