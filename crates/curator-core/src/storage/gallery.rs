use crate::identity::AccountId;
use crate::model::GalleryEntry;
use crate::text::clamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{info, warn};

const MODE_CHARS: usize = 20;
const TITLE_CHARS: usize = 90;
const URL_CHARS: usize = 180;
const FEEDBACK_CHARS: usize = 320;

/// Storage form of an entry. Tags are kept serialized and re-expanded on
/// read, so a corrupt tag list only affects its own entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoredEntry {
    pub(crate) mode: String,
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) total: u8,
    pub(crate) feedback: String,
    pub(crate) tags_json: String,
    pub(crate) author: AccountId,
}

impl StoredEntry {
    fn from_entry(entry: GalleryEntry) -> Self {
        Self {
            mode: clamp(&entry.mode, MODE_CHARS),
            title: clamp(&entry.title, TITLE_CHARS),
            url: clamp(&entry.url, URL_CHARS),
            total: entry.total,
            feedback: clamp(&entry.feedback, FEEDBACK_CHARS),
            tags_json: serde_json::to_string(&entry.tags).unwrap_or_else(|_| "[]".to_string()),
            author: entry.author,
        }
    }

    fn expand(&self) -> GalleryEntry {
        let tags = serde_json::from_str(&self.tags_json).unwrap_or_else(|e| {
            warn!(author = %self.author, error = %e, "unreadable gallery tags, using empty list");
            Vec::new()
        });
        GalleryEntry {
            mode: self.mode.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
            total: self.total,
            feedback: self.feedback.clone(),
            tags,
            author: self.author.clone(),
        }
    }
}

/// Outcome of offering an entry to the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Saved { evicted: bool },
    BelowThreshold,
}

impl Admission {
    pub fn is_saved(&self) -> bool {
        matches!(self, Admission::Saved { .. })
    }
}

/// Bounded, insertion-ordered gallery with FIFO eviction.
#[derive(Clone, Debug)]
pub struct GalleryStore {
    max_entries: usize,
    min_save_total: u8,
    entries: VecDeque<StoredEntry>,
}

impl GalleryStore {
    pub fn new(max_entries: usize, min_save_total: u8) -> Self {
        Self {
            max_entries: max_entries.max(1),
            min_save_total,
            entries: VecDeque::new(),
        }
    }

    pub(crate) fn with_entries(
        max_entries: usize,
        min_save_total: u8,
        entries: Vec<StoredEntry>,
    ) -> Self {
        let mut store = Self::new(max_entries, min_save_total);
        store.entries = entries.into();
        while store.entries.len() > store.max_entries {
            store.entries.pop_front();
        }
        store
    }

    pub(crate) fn stored(&self) -> impl Iterator<Item = &StoredEntry> {
        self.entries.iter()
    }

    /// Whether a result with this total clears the admission gate.
    pub fn admits(&self, total: u8) -> bool {
        total >= self.min_save_total
    }

    /// Admits `entry` if it clears the gate, evicting the oldest entry when full.
    pub fn offer(&mut self, entry: GalleryEntry) -> Admission {
        if !self.admits(entry.total) {
            return Admission::BelowThreshold;
        }
        let mut evicted = false;
        if self.entries.len() >= self.max_entries {
            if let Some(old) = self.entries.pop_front() {
                info!(
                    author = %old.author,
                    total = old.total,
                    "gallery full, evicted oldest entry"
                );
                evicted = true;
            }
        }
        let stored = StoredEntry::from_entry(entry);
        info!(author = %stored.author, total = stored.total, "gallery entry admitted");
        self.entries.push_back(stored);
        Admission::Saved { evicted }
    }

    /// Entries oldest-first.
    pub fn list(&self) -> Vec<GalleryEntry> {
        self.entries.iter().map(StoredEntry::expand).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }
}
