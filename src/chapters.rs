// src/chapters.rs
//! Chapter lookup and ordering.
//!
//! Highlights reference chapters by uid, but the fetched chapter list may
//! be incomplete (deleted chapters, trial editions). Every lookup here
//! degrades to a documented fallback so an unknown uid still renders and
//! still sorts deterministically.

use crate::constants::UNKNOWN_CHAPTER_TITLE;
use crate::model::Chapter;
use crate::types::ChapterUid;
use std::collections::HashMap;

/// Index from chapter uid to chapter metadata for one book.
#[derive(Debug, Clone, Default)]
pub struct ChapterIndex {
    by_uid: HashMap<ChapterUid, Chapter>,
}

impl ChapterIndex {
    pub fn new(chapters: impl IntoIterator<Item = Chapter>) -> Self {
        let by_uid = chapters.into_iter().map(|ch| (ch.uid, ch)).collect();
        Self { by_uid }
    }

    /// Display title for a chapter uid, or the unknown-chapter placeholder.
    pub fn title_of(&self, uid: ChapterUid) -> &str {
        self.by_uid
            .get(&uid)
            .map(|ch| ch.title.as_str())
            .unwrap_or(UNKNOWN_CHAPTER_TITLE)
    }

    /// Ordering key for a chapter uid: the chapter's explicit index where
    /// known, else the uid itself.
    pub fn order_key(&self, uid: ChapterUid) -> i64 {
        self.by_uid
            .get(&uid)
            .and_then(|ch| ch.idx)
            .unwrap_or_else(|| uid.value())
    }

    pub fn is_empty(&self) -> bool {
        self.by_uid.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_uid.len()
    }
}
