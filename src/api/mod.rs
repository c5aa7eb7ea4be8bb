// src/api/mod.rs
//! WeRead API interaction: fetching a reader's notebooks and annotations.
//!
//! This module separates I/O from parsing: the HTTP client fetches raw
//! bodies, `parser` maps them through validated DTOs into the typed
//! domain model, and everything above depends only on the
//! [`WereadRepository`] trait, never on HTTP details.

pub mod client;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::{Book, Chapter, Highlight, RawReview};
use crate::types::BookId;

/// A book entry in the reader's notebook: its id plus whatever metadata
/// the list endpoint embeds (enough to proceed if the detail fetch fails).
#[derive(Debug, Clone)]
pub struct NotebookEntry {
    pub book_id: BookId,
    pub book: Book,
}

/// The ability to retrieve a reader's annotation data from WeRead.
///
/// This is the capability object handed to the orchestrator: business
/// logic depends on this trait, tests substitute an in-memory fake.
#[async_trait::async_trait]
pub trait WereadRepository: Send + Sync {
    /// Books that carry at least one note, in service order.
    async fn notebook_list(&self) -> Result<Vec<NotebookEntry>, AppError>;

    /// Full book metadata (intro, ISBN, publisher, ...).
    async fn book_info(&self, book_id: &BookId) -> Result<Book, AppError>;

    /// The book's highlights.
    async fn bookmark_list(&self, book_id: &BookId) -> Result<Vec<Highlight>, AppError>;

    /// The book's chapter infos.
    async fn chapter_list(&self, book_id: &BookId) -> Result<Vec<Chapter>, AppError>;

    /// The book's raw annotations (notes, thoughts, reviews).
    async fn review_list(&self, book_id: &BookId) -> Result<Vec<RawReview>, AppError>;
}

pub use client::WereadHttpClient;
