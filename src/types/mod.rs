// src/types/mod.rs
//! Strongly typed domain primitives.
//!
//! Raw service records are stringly typed; this module gives every kind
//! of identifier its own type so a bookmark id can never be passed where
//! a review id is expected.

mod ids;

pub use ids::{BookId, BookmarkId, ChapterUid, HighlightBlockId, ReviewId};

use thiserror::Error;

/// Validation failures for domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Invalid cookie: {0}")]
    InvalidCookie(String),
}
