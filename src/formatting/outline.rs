// src/formatting/outline.rs
//! Per-book Logseq outline renderer.
//!
//! Line layout is a bit-exact contract with the target outliner:
//! `key:: value` metadata at the top, `- ` list blocks indented one tab
//! per nesting level, `heading:: true` and `部分::` markers under section
//! blocks, `> ` lines for quoted annotations, and a lone `-` as the final
//! line that closes the outline.

use crate::chapters::ChapterIndex;
use crate::constants::{
    CHARS_PER_HIGHLIGHT_ESTIMATE, COVER_DISPLAY_WIDTH, DOCUMENT_INITIAL_CAPACITY,
    NO_INTRO_PLACEHOLDER, PLATFORM_NAME,
};
use crate::model::{Book, Highlight, StandaloneThought};
use crate::normalize::{
    clean_author, format_date_link, format_publish_date, parse_range, simplify_category,
};
use crate::organize::OrganizedBook;
use crate::types::HighlightBlockId;

/// Renders one book's complete Logseq outline.
pub fn render_outline(book: &Book, organized: &OrganizedBook, index: &ChapterIndex) -> String {
    let capacity =
        DOCUMENT_INITIAL_CAPACITY + organized.highlight_count() * CHARS_PER_HIGHLIGHT_ESTIMATE;
    let mut lines: Vec<String> = Vec::with_capacity(capacity / 40);

    push_metadata_header(&mut lines, book);
    push_intro_section(&mut lines, book);
    push_review_section(&mut lines, organized);
    push_notes_section(&mut lines, book, organized, index);

    // terminal empty block closes the outline
    lines.push("-".to_string());

    let mut document = String::with_capacity(capacity);
    for line in &lines {
        document.push_str(line);
        document.push('\n');
    }
    document
}

/// `key:: value` metadata lines, fixed order.
fn push_metadata_header(lines: &mut Vec<String>, book: &Book) {
    lines.push("tags:: 书".to_string());
    lines.push(format!("分类:: [[{}]]", simplify_category(&book.categories)));
    lines.push(format!("作者:: [[{}]]", clean_author(&book.author)));

    if let Some(translator) = &book.translator {
        lines.push(format!("译者:: [[{}]]", translator));
    }

    match &book.publisher {
        Some(publisher) => lines.push(format!("出版社:: [[{}]]", publisher)),
        None => lines.push(format!("出版社:: [[{}]]", PLATFORM_NAME)),
    }

    if let Some(publish_time) = &book.publish_time {
        let formatted = format_publish_date(publish_time);
        if !formatted.is_empty() {
            lines.push(format!("出版日期:: [[{}]]", formatted));
        }
    }

    if let Some(isbn) = &book.isbn {
        lines.push(format!("ISBN:: {}", isbn));
    }

    lines.push("已读完:: 是".to_string());
    lines.push(format!("来源:: [[{}]]", PLATFORM_NAME));

    if !book.id.is_empty() {
        lines.push(format!("书籍id:: {}", book.id));
    }

    if let Some(version) = book.version {
        lines.push(format!("版本:: {}", version));
    }

    if let Some(cover) = &book.cover_url {
        lines.push(format!(
            "封面:: ![]({}){{:width {}}}",
            cover, COVER_DISPLAY_WIDTH
        ));
    }

    lines.push(String::new());
}

fn push_intro_section(lines: &mut Vec<String>, book: &Book) {
    lines.push("- [[简介]]".to_string());
    lines.push("  heading:: true".to_string());
    lines.push("  部分:: 简介".to_string());

    let intro = book.intro.trim();
    if intro.is_empty() {
        lines.push(format!("\t- {}", NO_INTRO_PLACEHOLDER));
    } else {
        // embedded newlines collapse to spaces inside a single block
        lines.push(format!("\t- {}", intro.replace('\n', " ")));
    }
}

/// Whole-book reviews, one nested block per non-empty paragraph.
fn push_review_section(lines: &mut Vec<String>, organized: &OrganizedBook) {
    if organized.reviews.is_empty() {
        return;
    }
    lines.push("- ## [[读后感]]".to_string());
    for review in &organized.reviews {
        for paragraph in review.content.trim().split('\n') {
            let paragraph = paragraph.trim();
            if !paragraph.is_empty() {
                lines.push(format!("\t- {}", paragraph));
            }
        }
    }
}

fn push_notes_section(
    lines: &mut Vec<String>,
    book: &Book,
    organized: &OrganizedBook,
    index: &ChapterIndex,
) {
    lines.push("- [[笔记]]".to_string());
    lines.push("  heading:: true".to_string());
    lines.push("  部分:: 笔记".to_string());

    for group in &organized.chapters {
        lines.push(format!("\t- {}", index.title_of(group.uid)));
        lines.push("\t  heading:: true".to_string());

        for highlight in &group.highlights {
            push_highlight_block(lines, book, organized, highlight);
        }
        for thought in &group.thoughts {
            push_thought_block(lines, thought);
        }
    }
}

fn push_highlight_block(
    lines: &mut Vec<String>,
    book: &Book,
    organized: &OrganizedBook,
    highlight: &Highlight,
) {
    let (start, end) = parse_range(&highlight.range);
    lines.push(format!("\t\t- {}", highlight.text.trim()));

    // the annotation sits right under the text it annotates
    if let Some(note) = organized.notes.get(&highlight.id) {
        lines.push(format!("> {}", note));
    }

    let block_id = HighlightBlockId::synthesize(&book.id, highlight.chapter_uid, start, end);
    lines.push(format!("\t\t  划线id:: {}", block_id));

    let date_link = format_date_link(highlight.created_at);
    if !date_link.is_empty() {
        lines.push(format!("\t\t  创建日期:: {}", date_link));
    }

    lines.push(format!("\t\t  起始:: {}", start));
    lines.push(format!("\t\t  结束:: {}", end));
    lines.push(String::new());
}

fn push_thought_block(lines: &mut Vec<String>, thought: &StandaloneThought) {
    let (start, end) = parse_range(&thought.range);
    lines.push(format!("\t\t- {}", thought.quoted_text));
    lines.push(format!("> {}", thought.content));

    if !thought.id.is_empty() {
        lines.push(format!("\t\t  想法id:: {}", thought.id));
    }

    let date_link = format_date_link(thought.created_at);
    if !date_link.is_empty() {
        lines.push(format!("\t\t  创建日期:: {}", date_link));
    }

    lines.push(format!("\t\t  起始:: {}", start));
    lines.push(format!("\t\t  结束:: {}", end));
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Chapter, RawReview};
    use crate::organize::organize;
    use crate::types::{BookId, BookmarkId, ChapterUid, ReviewId};
    use pretty_assertions::assert_eq;

    fn book() -> Book {
        let mut book = Book::bare(BookId::new("b42"), "测试之书", "[美] Author Name");
        book.intro = "第一行\n第二行".to_string();
        book.categories = vec![Category {
            title: "精品小说-现代-社会小说".to_string(),
        }];
        book
    }

    fn highlight(id: &str, chapter: i64, text: &str, created_at: i64, range: &str) -> Highlight {
        Highlight {
            id: BookmarkId::new(id),
            book_id: BookId::new("b42"),
            chapter_uid: ChapterUid::new(chapter),
            text: text.to_string(),
            created_at,
            range: range.to_string(),
        }
    }

    fn chapter_index() -> ChapterIndex {
        ChapterIndex::new(vec![Chapter {
            uid: ChapterUid::new(1),
            title: "Chapter 1".to_string(),
            idx: Some(0),
        }])
    }

    #[test]
    fn metadata_header_has_fixed_order_and_fallbacks() {
        let organized = OrganizedBook::default();
        let doc = render_outline(&book(), &organized, &chapter_index());
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0], "tags:: 书");
        assert_eq!(lines[1], "分类:: [[精品小说-社会小说]]");
        assert_eq!(lines[2], "作者:: [[Author Name]]");
        // no publisher: the platform is the fallback
        assert_eq!(lines[3], "出版社:: [[微信读书]]");
        assert!(lines.contains(&"已读完:: 是"));
        assert!(lines.contains(&"来源:: [[微信读书]]"));
        assert!(lines.contains(&"书籍id:: b42"));
    }

    #[test]
    fn intro_newlines_collapse_to_spaces() {
        let doc = render_outline(&book(), &OrganizedBook::default(), &chapter_index());
        assert!(doc.contains("\t- 第一行 第二行"));
    }

    #[test]
    fn missing_intro_renders_placeholder() {
        let mut b = book();
        b.intro = String::new();
        let doc = render_outline(&b, &OrganizedBook::default(), &chapter_index());
        assert!(doc.contains("\t- 暂无简介"));
    }

    #[test]
    fn document_ends_with_lone_dash() {
        let doc = render_outline(&book(), &OrganizedBook::default(), &chapter_index());
        assert!(doc.ends_with("\n-\n"));
    }

    #[test]
    fn end_to_end_chapter_ordering_and_note_attachment() {
        // two highlights out of timestamp order; note attached to the later one
        let highlights = vec![
            highlight("bm-b", 1, "B", 100, "30-40"),
            highlight("bm-a", 1, "A", 50, "10-20"),
        ];
        let note = RawReview {
            id: ReviewId::new("r1"),
            bookmark_id: Some(BookmarkId::new("bm-b")),
            content: "只属于B的想法".to_string(),
            abstract_text: None,
            review_type: 1,
            chapter_uid: ChapterUid::new(1),
            created_at: 120,
            range: String::new(),
        };
        let index = chapter_index();
        let organized = organize(highlights, vec![note], &index);
        let doc = render_outline(&book(), &organized, &index);

        let pos_chapter = doc.find("\t- Chapter 1").expect("chapter heading");
        let pos_a = doc.find("\t\t- A").expect("highlight A");
        let pos_b = doc.find("\t\t- B").expect("highlight B");
        let pos_note = doc.find("> 只属于B的想法").expect("note line");
        assert!(pos_chapter < pos_a);
        assert!(pos_a < pos_b, "A (ts 50) must precede B (ts 100)");
        assert!(pos_note > pos_b, "note attaches to B only");

        // the note precedes B's attribute lines
        let pos_b_id = doc.find("划线id:: b42_1_30-40").expect("B block id");
        assert!(pos_note < pos_b_id);
        // and A carries no note
        let a_block = &doc[pos_a..pos_b];
        assert!(!a_block.contains('>'));
    }

    #[test]
    fn highlight_attributes_are_complete_and_ordered() {
        let index = chapter_index();
        let organized = organize(vec![highlight("bm", 1, "text", 0, "5-9")], vec![], &index);
        let doc = render_outline(&book(), &organized, &index);

        let id_pos = doc.find("\t\t  划线id:: b42_1_5-9").expect("block id");
        let start_pos = doc.find("\t\t  起始:: 5").expect("start");
        let end_pos = doc.find("\t\t  结束:: 9").expect("end");
        assert!(id_pos < start_pos && start_pos < end_pos);
        // timestamp 0: no creation-date link
        assert!(!doc.contains("创建日期"));
    }

    #[test]
    fn thought_renders_quoted_abstract_then_content() {
        let thought = RawReview {
            id: ReviewId::new("rv9"),
            bookmark_id: None,
            content: "我的想法".to_string(),
            abstract_text: Some("被引的原文".to_string()),
            review_type: 1,
            chapter_uid: ChapterUid::new(1),
            created_at: 0,
            range: "7".to_string(),
        };
        let index = chapter_index();
        let organized = organize(vec![], vec![thought], &index);
        let doc = render_outline(&book(), &organized, &index);

        let abstract_pos = doc.find("\t\t- 被引的原文").expect("abstract block");
        let content_pos = doc.find("> 我的想法").expect("content quote");
        let id_pos = doc.find("\t\t  想法id:: rv9").expect("thought id");
        assert!(abstract_pos < content_pos && content_pos < id_pos);
        assert!(doc.contains("\t\t  起始:: 7"));
        assert!(doc.contains("\t\t  结束:: 7"));
    }

    #[test]
    fn book_reviews_split_into_paragraph_blocks() {
        let review = RawReview {
            id: ReviewId::new("r1"),
            bookmark_id: None,
            content: "第一段\n\n第二段".to_string(),
            abstract_text: None,
            review_type: crate::constants::REVIEW_TYPE_BOOK,
            chapter_uid: ChapterUid::FRONT_MATTER,
            created_at: 0,
            range: String::new(),
        };
        let index = chapter_index();
        let organized = organize(vec![], vec![review], &index);
        let doc = render_outline(&book(), &organized, &index);

        assert!(doc.contains("- ## [[读后感]]"));
        assert!(doc.contains("\t- 第一段"));
        assert!(doc.contains("\t- 第二段"));
    }

    #[test]
    fn empty_chapters_emit_no_heading() {
        let index = chapter_index();
        // all highlights empty-text: the chapter disappears entirely
        let organized = organize(vec![highlight("bm", 1, "  ", 0, "")], vec![], &index);
        let doc = render_outline(&book(), &organized, &index);
        assert!(!doc.contains("Chapter 1"));
    }
}
