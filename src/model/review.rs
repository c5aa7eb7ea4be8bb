// src/model/review.rs
//! Raw annotations and their classified forms.
//!
//! The service delivers every free-text note as one "review" record; the
//! organizer splits that stream into three disjoint shapes. Records that
//! fit none of them (e.g. a rating with no text) are dropped silently.

use crate::constants::REVIEW_TYPE_BOOK;
use crate::types::{BookmarkId, ChapterUid, ReviewId};
use serde::{Deserialize, Serialize};

/// A raw annotation record, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReview {
    pub id: ReviewId,
    /// The highlight this note annotates, when the user wrote it inline.
    pub bookmark_id: Option<BookmarkId>,
    pub content: String,
    /// The quoted passage, for thoughts the user attached to a selection
    /// without creating a highlight record first.
    pub abstract_text: Option<String>,
    /// Service type discriminator; `4` marks a whole-book review.
    pub review_type: i64,
    pub chapter_uid: ChapterUid,
    /// Epoch seconds; `0` when absent.
    pub created_at: i64,
    pub range: String,
}

/// A note attached to a specific highlight by bookmark id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedNote {
    pub bookmark_id: BookmarkId,
    pub content: String,
}

/// An annotation carrying its own quoted passage, not tied to a prior
/// highlight record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneThought {
    pub id: ReviewId,
    pub chapter_uid: ChapterUid,
    pub quoted_text: String,
    pub content: String,
    pub created_at: i64,
    pub range: String,
}

/// A whole-book free-text review, unrelated to any specific passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReview {
    pub content: String,
    pub created_at: i64,
}

/// The disjoint classification of a raw review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedReview {
    Note(LinkedNote),
    Thought(StandaloneThought),
    Review(BookReview),
}

impl RawReview {
    /// Classify this record, or `None` if it matches no shape.
    ///
    /// Order matters: the book-review discriminator wins over everything,
    /// then "has its own quoted passage", then "annotates a highlight".
    pub fn classify(self) -> Option<ClassifiedReview> {
        if self.review_type == REVIEW_TYPE_BOOK {
            if self.content.is_empty() {
                return None;
            }
            return Some(ClassifiedReview::Review(BookReview {
                content: self.content,
                created_at: self.created_at,
            }));
        }

        match self.abstract_text {
            Some(quoted) if !quoted.is_empty() && !self.content.is_empty() => {
                Some(ClassifiedReview::Thought(StandaloneThought {
                    id: self.id,
                    chapter_uid: self.chapter_uid,
                    quoted_text: quoted,
                    content: self.content,
                    created_at: self.created_at,
                    range: self.range,
                }))
            }
            _ => match self.bookmark_id {
                Some(bookmark_id) if !self.content.is_empty() => {
                    Some(ClassifiedReview::Note(LinkedNote {
                        bookmark_id,
                        content: self.content,
                    }))
                }
                _ => None,
            },
        }
    }
}
