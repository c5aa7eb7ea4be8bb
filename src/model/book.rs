// src/model/book.rs
//! Book, chapter and highlight entities.

use crate::types::{BookId, BookmarkId, ChapterUid};
use serde::{Deserialize, Serialize};

/// One taxonomy entry attached to a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

/// Book metadata. Immutable once fetched; one per export unit.
///
/// Optional fields use `None` for "the service sent nothing useful";
/// the boundary adapter maps empty strings to `None` so the renderer
/// only checks one representation of absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Author exactly as the service reports it, nationality tag included.
    pub author: String,
    pub translator: Option<String>,
    pub publisher: Option<String>,
    /// Raw publish time text, e.g. `"2025-08-07 00:00:00"`.
    pub publish_time: Option<String>,
    pub isbn: Option<String>,
    pub cover_url: Option<String>,
    pub intro: String,
    pub categories: Vec<Category>,
    pub version: Option<i64>,
}

impl Book {
    /// Minimal book for tests and for notebook entries whose detail fetch
    /// failed (the embedded metadata is all we have).
    pub fn bare(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            translator: None,
            publisher: None,
            publish_time: None,
            isbn: None,
            cover_url: None,
            intro: String::new(),
            categories: Vec::new(),
            version: None,
        }
    }
}

/// One chapter of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub uid: ChapterUid,
    pub title: String,
    /// Position of the chapter in the original book. Absent for some
    /// books; the uid itself is the documented fallback ordering key.
    pub idx: Option<i64>,
}

/// A user-selected text span ("bookmark") with its character range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: BookmarkId,
    pub book_id: BookId,
    pub chapter_uid: ChapterUid,
    pub text: String,
    /// Epoch seconds; `0` when the service omitted the timestamp.
    pub created_at: i64,
    /// Raw range text: `"<start>-<end>"`, `"<start>"`, or empty.
    pub range: String,
}
