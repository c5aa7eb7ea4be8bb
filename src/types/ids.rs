// src/types/ids.rs
//! Newtype identifiers for service records, plus the synthesized block id
//! for highlights.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a book, as assigned by the WeRead service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a highlight ("bookmark") record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(String);

impl BookmarkId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a raw review/annotation record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(String);

impl ReviewId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chapter identifier, unique within one book.
///
/// The service uses `0` for highlights that precede any chapter
/// (front matter); [`ChapterUid::FRONT_MATTER`] names that sentinel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ChapterUid(i64);

impl ChapterUid {
    /// Sentinel uid for "no chapter" / front-matter highlights.
    pub const FRONT_MATTER: ChapterUid = ChapterUid(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChapterUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier synthesized for a rendered highlight block.
///
/// A pure function of `(bookId, chapterUid, start, end)`: identical inputs
/// always yield an identical id, across runs. Two highlights sharing the
/// same book, chapter and character range collide deliberately: they
/// target the same passage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HighlightBlockId(String);

impl HighlightBlockId {
    pub fn synthesize(book: &BookId, chapter: ChapterUid, start: u32, end: u32) -> Self {
        Self(format!("{}_{}_{}-{}", book, chapter, start, end))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HighlightBlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
