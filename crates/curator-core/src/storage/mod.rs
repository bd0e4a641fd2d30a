//! Service-owned state: the gallery plus the per-account result and debug
//! caches, and their JSON snapshot on disk.

pub mod cache;
pub mod gallery;

pub use cache::LastCallCache;
pub use gallery::{Admission, GalleryStore};

use crate::config::CuratorConfig;
use crate::errors::JudgeError;
use crate::identity::AccountId;
use gallery::StoredEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug)]
pub struct CuratorState {
    pub gallery: GalleryStore,
    pub results: LastCallCache,
    pub debug: LastCallCache,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    gallery: Vec<StoredEntry>,
    last_result: BTreeMap<AccountId, String>,
    last_debug: BTreeMap<AccountId, String>,
}

impl CuratorState {
    pub fn new(cfg: &CuratorConfig) -> Self {
        Self {
            gallery: GalleryStore::new(cfg.max_gallery, cfg.min_save_total),
            results: LastCallCache::new(),
            debug: LastCallCache::new(),
        }
    }

    pub fn to_snapshot_json(&self) -> Result<String, JudgeError> {
        let snap = Snapshot {
            version: SNAPSHOT_VERSION,
            gallery: self.gallery.stored().cloned().collect(),
            last_result: self.results.slots().clone(),
            last_debug: self.debug.slots().clone(),
        };
        Ok(serde_json::to_string_pretty(&snap)?)
    }

    pub fn from_snapshot_json(cfg: &CuratorConfig, raw: &str) -> Result<Self, JudgeError> {
        let snap: Snapshot = serde_json::from_str(raw)
            .map_err(|e| JudgeError::state(format!("unreadable snapshot: {e}")))?;
        if snap.version != SNAPSHOT_VERSION {
            return Err(JudgeError::state(format!(
                "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                snap.version
            )));
        }
        Ok(Self {
            gallery: GalleryStore::with_entries(cfg.max_gallery, cfg.min_save_total, snap.gallery),
            results: LastCallCache::from_slots(snap.last_result),
            debug: LastCallCache::from_slots(snap.last_debug),
        })
    }

    /// Loads `path`, or starts empty when it does not exist yet.
    pub fn load_or_default(cfg: &CuratorConfig, path: &Path) -> Result<Self, JudgeError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_snapshot_json(cfg, &raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new(cfg)),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes via a sibling temp file and rename, so readers never see a
    /// half-written snapshot.
    pub fn save(&self, path: &Path) -> Result<(), JudgeError> {
        let json = self.to_snapshot_json()?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| JudgeError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GalleryEntry;

    fn id() -> AccountId {
        AccountId::parse("0x00000000000000000000000000000000000000ee").unwrap()
    }

    fn populated(cfg: &CuratorConfig) -> CuratorState {
        let mut state = CuratorState::new(cfg);
        state.gallery.offer(GalleryEntry {
            mode: "meme".into(),
            title: "cat".into(),
            url: "https://example.com".into(),
            total: 44,
            feedback: "ha".into(),
            tags: vec!["meme".into()],
            author: id(),
        });
        state.results.put(id(), "{\"total\":44}".into());
        state.debug.put(id(), "{\"error\":\"\",\"eq\":\"eq_prompt\",\"raw\":\"\"}".into());
        state
    }

    #[test]
    fn snapshot_restores_all_three_stores() {
        let cfg = CuratorConfig::default();
        let state = populated(&cfg);
        let restored =
            CuratorState::from_snapshot_json(&cfg, &state.to_snapshot_json().unwrap()).unwrap();
        assert_eq!(restored.gallery.list(), state.gallery.list());
        assert_eq!(restored.results, state.results);
        assert_eq!(restored.debug, state.debug);
    }

    #[test]
    fn snapshot_rejects_unknown_version() {
        let raw = r#"{"version":9,"gallery":[],"last_result":{},"last_debug":{}}"#;
        let err = CuratorState::from_snapshot_json(&CuratorConfig::default(), raw).unwrap_err();
        assert!(err.to_string().contains("unsupported snapshot version 9"));
    }

    #[test]
    fn save_and_load_through_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("state.json");
        let cfg = CuratorConfig::default();

        let fresh = CuratorState::load_or_default(&cfg, &path).unwrap();
        assert!(fresh.gallery.is_empty());

        populated(&cfg).save(&path).unwrap();
        let loaded = CuratorState::load_or_default(&cfg, &path).unwrap();
        assert_eq!(loaded.gallery.len(), 1);
        assert_eq!(loaded.results.get(&id()), Some("{\"total\":44}"));
    }
}
