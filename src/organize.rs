// src/organize.rs
//! Merges the highlight and review streams into the renderable structure.
//!
//! This is the heart of the exporter: four loosely related record streams
//! come in, one deterministic, chapter-ordered structure comes out. All
//! transformations are pure; ordering is stable so identical input always
//! yields an identical document.

use crate::chapters::ChapterIndex;
use crate::model::{BookReview, ClassifiedReview, Highlight, RawReview, StandaloneThought};
use crate::types::{BookmarkId, ChapterUid};
use indexmap::IndexMap;
use std::collections::HashMap;

/// All annotated content of one chapter, in render order.
#[derive(Debug, Clone)]
pub struct ChapterGroup {
    pub uid: ChapterUid,
    /// Highlights ordered by creation time ascending, ties in stream order.
    pub highlights: Vec<Highlight>,
    /// Thoughts in stream order, rendered after the chapter's highlights.
    pub thoughts: Vec<StandaloneThought>,
}

/// One book's annotations, organized and ordered for rendering.
#[derive(Debug, Clone, Default)]
pub struct OrganizedBook {
    /// Chapter groups in original-book order. Chapters with no renderable
    /// content never appear.
    pub chapters: Vec<ChapterGroup>,
    /// Note content by the bookmark id it annotates. Duplicate ids in the
    /// raw stream resolve last-write-wins.
    pub notes: HashMap<BookmarkId, String>,
    /// Whole-book reviews in stream order.
    pub reviews: Vec<BookReview>,
}

impl OrganizedBook {
    /// Count of renderable highlights across all chapters.
    pub fn highlight_count(&self) -> usize {
        self.chapters.iter().map(|ch| ch.highlights.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty() && self.reviews.is_empty()
    }
}

/// Organizes one book's highlight and raw-review streams.
///
/// Highlights whose trimmed text is empty carry nothing worth rendering
/// and are dropped up front, so a chapter holding only such highlights
/// produces no heading.
pub fn organize(
    highlights: Vec<Highlight>,
    reviews: Vec<RawReview>,
    index: &ChapterIndex,
) -> OrganizedBook {
    let mut notes = HashMap::new();
    let mut thoughts: Vec<StandaloneThought> = Vec::new();
    let mut book_reviews = Vec::new();

    for review in reviews {
        match review.classify() {
            Some(ClassifiedReview::Note(note)) => {
                notes.insert(note.bookmark_id, note.content);
            }
            Some(ClassifiedReview::Thought(thought)) => thoughts.push(thought),
            Some(ClassifiedReview::Review(review)) => book_reviews.push(review),
            None => {}
        }
    }

    // Group by chapter uid, preserving first-encounter order of chapters.
    let mut by_chapter: IndexMap<ChapterUid, ChapterGroup> = IndexMap::new();
    for highlight in highlights {
        if highlight.text.trim().is_empty() {
            continue;
        }
        by_chapter
            .entry(highlight.chapter_uid)
            .or_insert_with(|| empty_group(highlight.chapter_uid))
            .highlights
            .push(highlight);
    }
    for thought in thoughts {
        by_chapter
            .entry(thought.chapter_uid)
            .or_insert_with(|| empty_group(thought.chapter_uid))
            .thoughts
            .push(thought);
    }

    let mut chapters: Vec<ChapterGroup> = by_chapter.into_values().collect();
    // Stable sorts: encounter order breaks every tie.
    for group in &mut chapters {
        group.highlights.sort_by_key(|h| h.created_at);
    }
    chapters.sort_by_key(|group| index.order_key(group.uid));

    OrganizedBook {
        chapters,
        notes,
        reviews: book_reviews,
    }
}

fn empty_group(uid: ChapterUid) -> ChapterGroup {
    ChapterGroup {
        uid,
        highlights: Vec::new(),
        thoughts: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chapter;
    use crate::types::{BookId, BookmarkId, ReviewId};
    use pretty_assertions::assert_eq;

    fn highlight(id: &str, chapter: i64, text: &str, created_at: i64) -> Highlight {
        Highlight {
            id: BookmarkId::new(id),
            book_id: BookId::new("b1"),
            chapter_uid: ChapterUid::new(chapter),
            text: text.to_string(),
            created_at,
            range: String::new(),
        }
    }

    fn note_review(id: &str, bookmark: &str, content: &str) -> RawReview {
        RawReview {
            id: ReviewId::new(id),
            bookmark_id: Some(BookmarkId::new(bookmark)),
            content: content.to_string(),
            abstract_text: None,
            review_type: 1,
            chapter_uid: ChapterUid::new(0),
            created_at: 0,
            range: String::new(),
        }
    }

    fn index_with_idx(pairs: &[(i64, i64)]) -> ChapterIndex {
        ChapterIndex::new(pairs.iter().map(|&(uid, idx)| Chapter {
            uid: ChapterUid::new(uid),
            title: format!("ch{}", uid),
            idx: Some(idx),
        }))
    }

    #[test]
    fn highlights_sort_by_timestamp_within_chapter() {
        let organized = organize(
            vec![
                highlight("h1", 1, "B", 100),
                highlight("h2", 1, "A", 50),
                highlight("h3", 1, "C", 100),
            ],
            vec![],
            &ChapterIndex::default(),
        );
        let texts: Vec<&str> = organized.chapters[0]
            .highlights
            .iter()
            .map(|h| h.text.as_str())
            .collect();
        // equal timestamps keep stream order: B before C
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn chapters_sort_by_index_not_uid() {
        let index = index_with_idx(&[(10, 3), (20, 1), (30, 2)]);
        let organized = organize(
            vec![
                highlight("h1", 10, "x", 0),
                highlight("h2", 20, "y", 0),
                highlight("h3", 30, "z", 0),
            ],
            vec![],
            &index,
        );
        let uids: Vec<i64> = organized.chapters.iter().map(|c| c.uid.value()).collect();
        assert_eq!(uids, vec![20, 30, 10]);
    }

    #[test]
    fn empty_text_highlights_never_form_a_chapter() {
        let organized = organize(
            vec![highlight("h1", 5, "   ", 0), highlight("h2", 6, "kept", 0)],
            vec![],
            &ChapterIndex::default(),
        );
        assert_eq!(organized.chapters.len(), 1);
        assert_eq!(organized.chapters[0].uid, ChapterUid::new(6));
    }

    #[test]
    fn duplicate_note_ids_resolve_last_write_wins() {
        let organized = organize(
            vec![highlight("bm1", 1, "text", 0)],
            vec![
                note_review("r1", "bm1", "first"),
                note_review("r2", "bm1", "second"),
            ],
            &ChapterIndex::default(),
        );
        assert_eq!(
            organized.notes.get(&BookmarkId::new("bm1")).map(String::as_str),
            Some("second")
        );
    }

    #[test]
    fn thought_only_chapters_are_included() {
        let thought = RawReview {
            id: ReviewId::new("r1"),
            bookmark_id: None,
            content: "想法".to_string(),
            abstract_text: Some("原文".to_string()),
            review_type: 1,
            chapter_uid: ChapterUid::new(9),
            created_at: 10,
            range: "1-2".to_string(),
        };
        let organized = organize(vec![], vec![thought], &ChapterIndex::default());
        assert_eq!(organized.chapters.len(), 1);
        assert_eq!(organized.chapters[0].thoughts.len(), 1);
        assert_eq!(organized.highlight_count(), 0);
    }

    #[test]
    fn book_reviews_keep_stream_order() {
        let review = |id: &str, content: &str| RawReview {
            id: ReviewId::new(id),
            bookmark_id: None,
            content: content.to_string(),
            abstract_text: None,
            review_type: crate::constants::REVIEW_TYPE_BOOK,
            chapter_uid: ChapterUid::FRONT_MATTER,
            created_at: 0,
            range: String::new(),
        };
        let organized = organize(
            vec![],
            vec![review("r1", "第一段"), review("r2", "第二段")],
            &ChapterIndex::default(),
        );
        let contents: Vec<&str> = organized.reviews.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["第一段", "第二段"]);
    }
}
