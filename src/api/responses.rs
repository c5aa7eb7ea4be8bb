// src/api/responses.rs
//! Serde DTOs for WeRead API response bodies.
//!
//! These mirror the wire format as-is (camelCase keys, empty strings for
//! absent fields, loose integers). The boundary adapter in `parser`
//! converts them into the strongly typed model; nothing above the API
//! layer sees these types.

use serde::Deserialize;

/// Error envelope the service returns in place of a payload.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "errCode")]
    pub err_code: i64,
    #[serde(rename = "errMsg", default)]
    pub err_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct NotebookListResponse {
    #[serde(default)]
    pub books: Vec<NotebookEntryDto>,
}

#[derive(Debug, Deserialize)]
pub struct NotebookEntryDto {
    #[serde(rename = "bookId")]
    pub book_id: String,
    #[serde(default)]
    pub book: Option<BookInfoDto>,
}

/// Book metadata as embedded in the notebook list or returned by the
/// `book/info` endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct BookInfoDto {
    #[serde(rename = "bookId", default)]
    pub book_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub translator: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(rename = "publishTime", default)]
    pub publish_time: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
    #[serde(default)]
    pub version: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryDto {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct BookmarkListResponse {
    #[serde(default)]
    pub updated: Vec<BookmarkDto>,
}

#[derive(Debug, Deserialize)]
pub struct BookmarkDto {
    #[serde(rename = "bookmarkId")]
    pub bookmark_id: String,
    #[serde(rename = "bookId", default)]
    pub book_id: String,
    #[serde(rename = "chapterUid", default)]
    pub chapter_uid: i64,
    #[serde(rename = "markText", default)]
    pub mark_text: String,
    #[serde(rename = "createTime", default)]
    pub create_time: i64,
    #[serde(default)]
    pub range: String,
}

#[derive(Debug, Deserialize)]
pub struct ChapterInfosResponse {
    #[serde(default)]
    pub data: Vec<ChapterInfosEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ChapterInfosEntry {
    #[serde(default)]
    pub updated: Vec<ChapterDto>,
}

#[derive(Debug, Deserialize)]
pub struct ChapterDto {
    #[serde(rename = "chapterUid")]
    pub chapter_uid: i64,
    #[serde(rename = "chapterIdx", default)]
    pub chapter_idx: Option<i64>,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewListResponse {
    #[serde(default)]
    pub reviews: Vec<ReviewEnvelopeDto>,
}

/// The list wraps each review in a one-field envelope.
#[derive(Debug, Deserialize)]
pub struct ReviewEnvelopeDto {
    pub review: ReviewDto,
}

#[derive(Debug, Deserialize)]
pub struct ReviewDto {
    #[serde(rename = "reviewId", default)]
    pub review_id: String,
    #[serde(rename = "bookmarkId", default)]
    pub bookmark_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(rename = "type", default)]
    pub review_type: i64,
    #[serde(rename = "chapterUid", default)]
    pub chapter_uid: i64,
    #[serde(rename = "createTime", default)]
    pub create_time: i64,
    #[serde(default)]
    pub range: String,
}
