// src/exporter.rs
//! Export orchestration: fetch → organize → render → write, per book.
//!
//! Failure policy follows the batch contract: a book without highlights
//! is skipped (soft), a per-book error is recorded by title and the batch
//! continues, and only initialization-class failures (expired session)
//! abort the run.

use crate::api::{NotebookEntry, WereadRepository};
use crate::chapters::ChapterIndex;
use crate::config::ExportConfig;
use crate::constants::INTER_BOOK_DELAY;
use crate::error::AppError;
use crate::formatting::{render_digest, render_outline, DigestEntry};
use crate::model::{Book, Highlight, RawReview};
use crate::organize::{organize, OrganizedBook};
use crate::output::{book_file_path, write_document};
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything fetched for one book, before organization.
struct BookBundle {
    book: Book,
    highlights: Vec<Highlight>,
    chapter_index: ChapterIndex,
    reviews: Vec<RawReview>,
}

/// Outcome of a batch export.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub exported: Vec<PathBuf>,
    /// Titles of books whose processing failed.
    pub failed: Vec<String>,
    /// Books skipped because they had no highlights.
    pub skipped: usize,
}

impl ExportSummary {
    /// A batch counts as failed only when nothing succeeded at all.
    pub fn is_total_failure(&self) -> bool {
        self.exported.is_empty() && !self.failed.is_empty()
    }
}

/// Drives the per-book pipeline over the reader's notebook.
pub struct Exporter {
    repo: Arc<dyn WereadRepository>,
    config: ExportConfig,
}

impl Exporter {
    pub fn new(repo: Arc<dyn WereadRepository>, config: ExportConfig) -> Self {
        Self { repo, config }
    }

    /// Fetches the four record streams for one notebook entry.
    ///
    /// A failed detail fetch degrades to the list entry's embedded
    /// metadata; empty chapter or review lists are fine.
    async fn fetch_bundle(&self, entry: &NotebookEntry) -> Result<BookBundle, AppError> {
        let book = match self.repo.book_info(&entry.book_id).await {
            Ok(book) => book,
            Err(e) if !e.is_fatal() => {
                log::warn!(
                    "Book detail fetch failed for '{}', using notebook metadata: {}",
                    entry.book.title,
                    e
                );
                entry.book.clone()
            }
            Err(e) => return Err(e),
        };

        let highlights = self.repo.bookmark_list(&entry.book_id).await?;
        let chapters = self.repo.chapter_list(&entry.book_id).await?;
        let reviews = self.repo.review_list(&entry.book_id).await?;

        Ok(BookBundle {
            book,
            highlights,
            chapter_index: ChapterIndex::new(chapters),
            reviews,
        })
    }

    /// Exports one book's outline. Returns `None` (not an error) when the
    /// book has no highlights.
    pub async fn export_one(&self, entry: &NotebookEntry) -> Result<Option<PathBuf>, AppError> {
        log::info!("📚 Processing '{}' - {}", entry.book.title, entry.book.author);

        let bundle = self.fetch_bundle(entry).await?;
        if bundle.highlights.is_empty() {
            log::info!("   No highlights, skipping");
            return Ok(None);
        }
        log::info!("   {} highlights fetched", bundle.highlights.len());

        let organized = organize(bundle.highlights, bundle.reviews, &bundle.chapter_index);
        let document = render_outline(&bundle.book, &organized, &bundle.chapter_index);

        let path = book_file_path(&self.config.output_dir, &bundle.book.title);
        write_document(&path, &document)?;
        Ok(Some(path))
    }

    /// Exports every book in the notebook, one file each.
    pub async fn export_all(&self) -> Result<ExportSummary, AppError> {
        let entries = self.repo.notebook_list().await?;
        if entries.is_empty() {
            log::warn!("No books with notes found");
            return Ok(ExportSummary::default());
        }
        log::info!("Found {} books with notes", entries.len());

        let mut summary = ExportSummary::default();
        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            log::info!("[{}/{}] {}", i + 1, total, entry.book.title);

            match self.export_one(entry).await {
                Ok(Some(path)) => summary.exported.push(path),
                Ok(None) => summary.skipped += 1,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    log::error!("   Export failed for '{}': {}", entry.book.title, e);
                    summary.failed.push(entry.book.title.clone());
                }
            }

            if i + 1 < total {
                tokio::time::sleep(INTER_BOOK_DELAY).await;
            }
        }
        Ok(summary)
    }

    /// Exports the first book whose title contains `keyword`.
    /// Returns `None` when nothing matches or the match has no highlights.
    pub async fn export_by_title(&self, keyword: &str) -> Result<Option<PathBuf>, AppError> {
        let entries = self.repo.notebook_list().await?;
        let Some(entry) = entries.iter().find(|e| e.book.title.contains(keyword)) else {
            log::warn!("No book title contains '{}'", keyword);
            for entry in entries.iter().take(10) {
                log::info!("  available: {}", entry.book.title);
            }
            return Ok(None);
        };

        log::info!("Matched '{}'", entry.book.title);
        self.export_one(entry).await
    }

    /// Exports all books into a single digest document.
    pub async fn export_single_file(&self) -> Result<PathBuf, AppError> {
        let entries = self.repo.notebook_list().await?;
        log::info!("Found {} books with notes", entries.len());

        let mut digest_entries: Vec<DigestEntry> = Vec::new();
        let mut total_highlights = 0usize;
        let total = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            log::info!("[{}/{}] {}", i + 1, total, entry.book.title);

            match self.fetch_bundle(entry).await {
                Ok(bundle) if bundle.highlights.is_empty() => {}
                Ok(bundle) => {
                    let highlight_count = bundle.highlights.len();
                    total_highlights += highlight_count;
                    let organized: OrganizedBook =
                        organize(bundle.highlights, bundle.reviews, &bundle.chapter_index);
                    digest_entries.push(DigestEntry {
                        book: bundle.book,
                        organized,
                        chapter_index: bundle.chapter_index,
                        highlight_count,
                    });
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    log::error!("   Skipping '{}': {}", entry.book.title, e);
                }
            }

            if i + 1 < total {
                tokio::time::sleep(INTER_BOOK_DELAY).await;
            }
        }

        let document = render_digest(&digest_entries, Local::now());
        let path = self.config.output_dir.join(&self.config.digest_filename);
        write_document(&path, &document)?;

        log::info!(
            "Digest complete: {} books, {} highlights",
            digest_entries.len(),
            total_highlights
        );
        Ok(path)
    }
}
