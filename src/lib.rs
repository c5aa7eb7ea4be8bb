// src/lib.rs
//! weread2logseq library: exports WeRead highlights and notes as
//! Logseq-flavoured Markdown outlines.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `WereadErrorCode`
//! - **Configuration**: `ExportConfig`, `ExportMode`
//! - **Domain model**: `Book`, `Chapter`, `Highlight`, `RawReview`, etc.
//! - **Core engine**: `ChapterIndex`, `organize`, `render_outline`,
//!   `render_digest`
//! - **API client**: `WereadRepository`, `WereadHttpClient`, parsers
//! - **Orchestration**: `Exporter`, `ExportSummary`

mod api;
mod chapters;
mod config;
mod constants;
mod error;
mod exporter;
mod formatting;
mod model;
mod normalize;
mod organize;
mod output;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, Result, WereadErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExportConfig, ExportMode};

// --- Domain Model ---
pub use crate::model::{
    Book, BookReview, Category, Chapter, ClassifiedReview, Highlight, LinkedNote, RawReview,
    StandaloneThought,
};
pub use crate::types::{BookId, BookmarkId, ChapterUid, HighlightBlockId, ReviewId};

// --- Core Engine ---
pub use crate::chapters::ChapterIndex;
pub use crate::normalize::{
    clean_author, format_date_link, format_publish_date, parse_range, simplify_category,
};
pub use crate::organize::{organize, ChapterGroup, OrganizedBook};

// --- Rendering ---
pub use crate::formatting::{render_digest, render_outline, DigestEntry};

// --- API Client ---
pub use crate::api::{
    parser::{
        parse_book_info, parse_bookmark_list, parse_chapter_list, parse_notebook_list,
        parse_review_list,
    },
    NotebookEntry, WereadHttpClient, WereadRepository,
};

// --- Output ---
pub use crate::output::{book_file_path, sanitize_filename, write_document};

// --- Orchestration ---
pub use crate::exporter::{Exporter, ExportSummary};
