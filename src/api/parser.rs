// src/api/parser.rs
//! Validating boundary adapter: raw response bodies → typed domain model.
//!
//! The service signals failure by swapping the payload for an
//! `errCode`/`errMsg` envelope, so every body is checked for the envelope
//! before payload parsing. Empty strings on the wire become `None` here;
//! the core never inspects untyped structures.

use super::responses::{
    BookInfoDto, BookmarkListResponse, ChapterInfosResponse, ErrorEnvelope, NotebookListResponse,
    ReviewListResponse,
};
use super::NotebookEntry;
use crate::error::{AppError, WereadErrorCode};
use crate::model::{Book, Category, Chapter, Highlight, RawReview};
use crate::types::{BookId, BookmarkId, ChapterUid, ReviewId};
use url::Url;

/// Parses a response body, rejecting service error envelopes first.
fn parse_body<T: serde::de::DeserializeOwned>(body: &str, endpoint: &str) -> Result<T, AppError> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        // some success payloads carry errCode: 0, only nonzero is a failure
        if envelope.err_code != 0 {
            return Err(AppError::WereadService {
                code: WereadErrorCode::from_err_code(envelope.err_code),
                message: envelope.err_msg,
            });
        }
    }

    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", endpoint, e);
        AppError::MalformedResponse(format!("{}: {}", endpoint, e))
    })
}

pub fn parse_notebook_list(body: &str) -> Result<Vec<NotebookEntry>, AppError> {
    let response: NotebookListResponse = parse_body(body, "user/notebooks")?;
    Ok(response
        .books
        .into_iter()
        .map(|entry| {
            let book_id = BookId::new(entry.book_id.clone());
            let book = match entry.book {
                Some(dto) => book_from_dto(dto, &book_id),
                None => Book::bare(book_id.clone(), "未知书名", "未知作者"),
            };
            NotebookEntry { book_id, book }
        })
        .collect())
}

pub fn parse_book_info(body: &str, book_id: &BookId) -> Result<Book, AppError> {
    let dto: BookInfoDto = parse_body(body, "book/info")?;
    Ok(book_from_dto(dto, book_id))
}

pub fn parse_bookmark_list(body: &str) -> Result<Vec<Highlight>, AppError> {
    let response: BookmarkListResponse = parse_body(body, "book/bookmarklist")?;
    Ok(response
        .updated
        .into_iter()
        .map(|dto| Highlight {
            id: BookmarkId::new(dto.bookmark_id),
            book_id: BookId::new(dto.book_id),
            chapter_uid: ChapterUid::new(dto.chapter_uid),
            text: dto.mark_text,
            created_at: dto.create_time,
            range: dto.range,
        })
        .collect())
}

pub fn parse_chapter_list(body: &str) -> Result<Vec<Chapter>, AppError> {
    let response: ChapterInfosResponse = parse_body(body, "book/chapterInfos")?;
    Ok(response
        .data
        .into_iter()
        .flat_map(|entry| entry.updated)
        .map(|dto| Chapter {
            uid: ChapterUid::new(dto.chapter_uid),
            title: dto.title,
            idx: dto.chapter_idx,
        })
        .collect())
}

pub fn parse_review_list(body: &str) -> Result<Vec<RawReview>, AppError> {
    let response: ReviewListResponse = parse_body(body, "review/list")?;
    Ok(response
        .reviews
        .into_iter()
        .map(|envelope| {
            let dto = envelope.review;
            RawReview {
                id: ReviewId::new(dto.review_id),
                bookmark_id: non_empty(dto.bookmark_id).map(BookmarkId::new),
                content: dto.content,
                abstract_text: non_empty(dto.abstract_text),
                review_type: dto.review_type,
                chapter_uid: ChapterUid::new(dto.chapter_uid),
                created_at: dto.create_time,
                range: dto.range,
            }
        })
        .collect())
}

/// Maps a book DTO into the domain model, falling back to the caller's
/// book id when the payload omits its own.
fn book_from_dto(dto: BookInfoDto, fallback_id: &BookId) -> Book {
    let id = if dto.book_id.is_empty() {
        fallback_id.clone()
    } else {
        BookId::new(dto.book_id)
    };
    Book {
        id,
        title: or_placeholder(dto.title, "未知书名"),
        author: or_placeholder(dto.author, "未知作者"),
        translator: non_empty(dto.translator),
        publisher: non_empty(dto.publisher),
        publish_time: non_empty(dto.publish_time),
        isbn: non_empty(dto.isbn),
        cover_url: validated_cover(dto.cover),
        intro: dto.intro,
        categories: dto
            .categories
            .into_iter()
            .filter(|c| !c.title.is_empty())
            .map(|c| Category { title: c.title })
            .collect(),
        version: dto.version,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

/// A cover only renders if it is an actual URL; anything else is dropped
/// rather than emitted as a broken image block.
fn validated_cover(cover: String) -> Option<String> {
    if cover.is_empty() {
        return None;
    }
    match Url::parse(&cover) {
        Ok(_) => Some(cover),
        Err(e) => {
            log::debug!("Dropping unparseable cover URL '{}': {}", cover, e);
            None
        }
    }
}
