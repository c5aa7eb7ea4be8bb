// src/api/client.rs
//! HTTP client for the WeRead internal API.
//!
//! A thin wrapper around reqwest that authenticates with the reader's
//! cookie and hands raw bodies to the boundary parser. No business logic
//! lives here.

use super::{parser, NotebookEntry, WereadRepository};
use crate::constants::WEREAD_API_BASE_URL;
use crate::error::AppError;
use crate::model::{Book, Chapter, Highlight, RawReview};
use crate::types::BookId;
use reqwest::{header, Client};

/// Authenticated WeRead API client.
#[derive(Clone)]
pub struct WereadHttpClient {
    client: Client,
    base_url: String,
}

impl WereadHttpClient {
    /// Creates a client that sends the reader's cookie with every request.
    pub fn new(cookie: &str) -> Result<Self, AppError> {
        Self::with_base_url(cookie, WEREAD_API_BASE_URL)
    }

    /// Base-URL override for tests against a local server.
    pub fn with_base_url(cookie: &str, base_url: &str) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();
        let cookie_value = header::HeaderValue::from_str(cookie.trim())
            .map_err(|e| crate::types::ValidationError::InvalidCookie(e.to_string()))?;
        headers.insert(header::COOKIE, cookie_value);
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36",
            ),
        );

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Makes a GET request and returns the response body.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String, AppError> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() && body.is_empty() {
            return Err(AppError::WereadService {
                code: crate::error::WereadErrorCode::from_http_status(status.as_u16()),
                message: format!("HTTP {} from {}", status, url),
            });
        }
        Ok(body)
    }

    /// Makes a POST request with a JSON body and returns the response body.
    async fn post<T: serde::Serialize>(&self, path: &str, json: &T) -> Result<String, AppError> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("POST {}", url);

        let response = self.client.post(&url).json(json).send().await?;
        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl WereadRepository for WereadHttpClient {
    async fn notebook_list(&self) -> Result<Vec<NotebookEntry>, AppError> {
        let body = self.get("user/notebooks", &[]).await?;
        parser::parse_notebook_list(&body)
    }

    async fn book_info(&self, book_id: &BookId) -> Result<Book, AppError> {
        let body = self
            .get("book/info", &[("bookId", book_id.as_str())])
            .await?;
        parser::parse_book_info(&body, book_id)
    }

    async fn bookmark_list(&self, book_id: &BookId) -> Result<Vec<Highlight>, AppError> {
        let body = self
            .get("book/bookmarklist", &[("bookId", book_id.as_str())])
            .await?;
        parser::parse_bookmark_list(&body)
    }

    async fn chapter_list(&self, book_id: &BookId) -> Result<Vec<Chapter>, AppError> {
        let payload = serde_json::json!({ "bookIds": [book_id.as_str()] });
        let body = self.post("book/chapterInfos", &payload).await?;
        parser::parse_chapter_list(&body)
    }

    async fn review_list(&self, book_id: &BookId) -> Result<Vec<RawReview>, AppError> {
        let body = self
            .get(
                "review/list",
                &[
                    ("bookId", book_id.as_str()),
                    ("listType", "11"),
                    ("mine", "1"),
                    ("synckey", "0"),
                ],
            )
            .await?;
        parser::parse_review_list(&body)
    }
}
