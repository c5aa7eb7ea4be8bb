// src/formatting/digest.rs
//! Single-file digest renderer.
//!
//! All books in one plain-Markdown document: title, export timestamp,
//! a linked table of contents, then a lighter per-book section (level-1
//! book heading, highlight count, level-2 chapter headings, quoted
//! highlights with optional note lines). Deliberately *not* the per-book
//! outline shape: the digest is for reading, not for importing.

use crate::chapters::ChapterIndex;
use crate::model::Book;
use crate::organize::OrganizedBook;
use crate::output::sanitize_filename;
use chrono::{DateTime, Local};

/// One book's contribution to the digest. Only books with at least one
/// highlight are handed to the renderer; empty books never reach it.
#[derive(Debug, Clone)]
pub struct DigestEntry {
    pub book: Book,
    pub organized: OrganizedBook,
    pub chapter_index: ChapterIndex,
    /// Raw bookmark count, as reported by the service (pre-filtering).
    pub highlight_count: usize,
}

/// Renders the aggregate digest document for all included books.
pub fn render_digest(entries: &[DigestEntry], exported_at: DateTime<Local>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# 微信读书笔记汇总".to_string());
    lines.push(String::new());
    lines.push(format!(
        "**导出时间**: {}",
        exported_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("**书籍数量**: {} 本", entries.len()));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    push_table_of_contents(&mut lines, entries);

    for entry in entries {
        push_book_section(&mut lines, entry);
    }

    let mut document = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in &lines {
        document.push_str(line);
        document.push('\n');
    }
    document
}

/// Anchor id linking a TOC entry to its book section.
fn anchor_for(title: &str) -> String {
    sanitize_filename(title)
}

fn push_table_of_contents(lines: &mut Vec<String>, entries: &[DigestEntry]) {
    lines.push("## 📚 目录".to_string());
    lines.push(String::new());
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{}. [{}](#{}) - {}",
            i + 1,
            entry.book.title,
            anchor_for(&entry.book.title),
            entry.book.author
        ));
    }
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
}

fn push_book_section(lines: &mut Vec<String>, entry: &DigestEntry) {
    lines.push(format!("<a id=\"{}\"></a>", anchor_for(&entry.book.title)));
    lines.push(String::new());
    lines.push(format!("# 《{}》", entry.book.title));
    lines.push(String::new());
    lines.push(format!(
        "**作者**: {} | **划线**: {} 条",
        entry.book.author, entry.highlight_count
    ));
    lines.push(String::new());

    for group in &entry.organized.chapters {
        lines.push(format!("## {}", entry.chapter_index.title_of(group.uid)));
        lines.push(String::new());

        for highlight in &group.highlights {
            lines.push(format!("> {}", highlight.text.trim()));
            if let Some(note) = entry.organized.notes.get(&highlight.id) {
                lines.push(String::new());
                lines.push(format!("💭 {}", note));
            }
            lines.push(String::new());
        }
    }

    lines.push("---".to_string());
    lines.push(String::new());
}
